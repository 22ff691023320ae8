//! Read-only access to the place catalogue.
//!
//! The planner never writes places back. A [`PlaceStore`] hands out the
//! active places of one area and the planner takes it from there.

use crate::{Place, PlaceStatus};

/// Source of candidate places.
///
/// Implementations must be safe to share across threads so a single store
/// can back concurrent planning requests.
///
/// # Examples
/// ```
/// use tripweave_core::{Coordinates, MemoryStore, Place, PlaceStore};
///
/// let store = MemoryStore::with_places([
///     Place::new(1, Coordinates::new(127.0, 37.0), None).in_area(1, 10),
///     Place::new(2, Coordinates::new(127.1, 37.0), None).in_area(2, 20),
/// ]);
/// let found = store.active_places(1, 10);
/// assert_eq!(found.len(), 1);
/// ```
pub trait PlaceStore: Send + Sync {
    /// Return every active place in the given region and city.
    fn active_places(&self, region_id: u64, city_id: u64) -> Vec<Place>;
}

/// In-memory [`PlaceStore`] over a snapshot of places.
///
/// The store performs a linear scan, which is adequate for the few thousand
/// places a single region carries.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    places: Vec<Place>,
}

impl MemoryStore {
    /// Create a store from a collection of places.
    pub fn with_places<I>(places: I) -> Self
    where
        I: IntoIterator<Item = Place>,
    {
        Self {
            places: places.into_iter().collect(),
        }
    }

    /// Number of places held, regardless of status or area.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.places.len()
    }

    /// Report whether the snapshot is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl PlaceStore for MemoryStore {
    fn active_places(&self, region_id: u64, city_id: u64) -> Vec<Place> {
        self.places
            .iter()
            .filter(|place| place.status == PlaceStatus::Active)
            .filter(|place| place.region_id == Some(region_id) && place.city_id == Some(city_id))
            .cloned()
            .collect()
    }
}

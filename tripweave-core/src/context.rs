//! Per-request planning state.
//!
//! Everything the selectors mutate lives in [`PlanningContext`], which is
//! built once per request and dropped with it. Nothing is shared between
//! concurrent planning runs.

use std::collections::HashSet;

use rand::Rng;

use crate::{Place, PlannerConfig};

/// Place ids the traveller has favourited.
///
/// # Examples
/// ```
/// use tripweave_core::LikedSet;
///
/// let liked: LikedSet = [3, 5].into_iter().collect();
/// assert!(liked.contains(3));
/// assert!(!liked.contains(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet(HashSet<u64>);

impl LikedSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whether `id` was liked.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.0.contains(&id)
    }

    /// Number of liked places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether nothing was liked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<u64> for LikedSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Place ids already placed in the itinerary.
///
/// Ids can only be added; a place never becomes available again within one
/// planning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedSet(HashSet<u64>);

impl UsedSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as used. Returns `false` if it already was.
    pub fn insert(&mut self, id: u64) -> bool {
        self.0.insert(id)
    }

    /// Report whether `id` has been used.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.0.contains(&id)
    }

    /// Number of used places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether nothing has been used yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Score-sorted candidate sequences, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pools {
    /// Sightseeing candidates.
    pub attractions: Vec<Place>,
    /// Restaurants.
    pub meals: Vec<Place>,
    /// Lodging.
    pub lodging: Vec<Place>,
}

/// Mutable state threaded through the selectors for one request.
///
/// The random source is borrowed so callers decide between entropy and a
/// seeded generator.
pub struct PlanningContext<'a, R: Rng + ?Sized> {
    /// Classified candidates.
    pub pools: Pools,
    /// Places already scheduled.
    pub used: UsedSet,
    /// The traveller's favourites.
    pub liked: &'a LikedSet,
    /// Tuning constants.
    pub config: &'a PlannerConfig,
    /// Random source for every stochastic choice.
    pub rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> PlanningContext<'a, R> {
    /// Start a run with nothing used yet.
    pub fn new(
        pools: Pools,
        liked: &'a LikedSet,
        config: &'a PlannerConfig,
        rng: &'a mut R,
    ) -> Self {
        Self {
            pools,
            used: UsedSet::new(),
            liked,
            config,
            rng,
        }
    }
}

impl<R: Rng + ?Sized> std::fmt::Debug for PlanningContext<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanningContext")
            .field("pools", &self.pools)
            .field("used", &self.used)
            .field("liked", &self.liked)
            .finish_non_exhaustive()
    }
}

//! Fixture builders shared by unit, behaviour and doc tests.
//!
//! Every builder produces an active place with a known position. Areas are
//! left unset except in [`sample_region`], which files everything under
//! region `1`, city `10`.

use crate::{CategoryId, Coordinates, MemoryStore, Place};

/// Region used by [`sample_region`].
pub const SAMPLE_REGION_ID: u64 = 1;

/// City used by [`sample_region`].
pub const SAMPLE_CITY_ID: u64 = 10;

/// Category given to attractions built by [`place`].
pub const SIGHTSEEING: CategoryId = CategoryId(12);

/// Category mixed into [`sample_region`] for variety.
pub const CULTURE: CategoryId = CategoryId(14);

/// An attraction at `(lon, lat)`.
#[must_use]
pub fn place(id: u64, lon: f64, lat: f64) -> Place {
    place_in(id, lon, lat, SIGHTSEEING)
}

/// A place of an arbitrary category at `(lon, lat)`.
#[must_use]
pub fn place_in(id: u64, lon: f64, lat: f64, category: CategoryId) -> Place {
    Place::new(id, Coordinates::new(lon, lat), Some(category)).with_title(format!("place {id}"))
}

/// A restaurant at `(lon, lat)`.
#[must_use]
pub fn restaurant(id: u64, lon: f64, lat: f64) -> Place {
    place_in(id, lon, lat, CategoryId::RESTAURANT)
}

/// A lodging at `(lon, lat)`.
#[must_use]
pub fn lodging(id: u64, lon: f64, lat: f64) -> Place {
    place_in(id, lon, lat, CategoryId::LODGING)
}

/// Twenty attractions, five restaurants and two lodgings spread along a
/// few kilometres of one city.
///
/// Ids are `1..=20` for attractions, `101..=105` for restaurants and
/// `201..=202` for lodging. Nothing is ever closed.
#[must_use]
pub fn sample_region() -> MemoryStore {
    MemoryStore::with_places(sample_places())
}

/// The places behind [`sample_region`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fixture positions are laid out on a grid"
)]
pub fn sample_places() -> Vec<Place> {
    let grid = (0_u32..4).flat_map(|row| (0_u32..5).map(move |col| (row, col)));
    let attractions = grid.map(|(row, col)| {
        let n = row * 5 + col + 1;
        let lon = 127.0 + f64::from(col) * 0.01;
        let lat = 37.5 + f64::from(row) * 0.01;
        let category = if (row + col) & 1 == 1 { CULTURE } else { SIGHTSEEING };
        place_in(u64::from(n), lon, lat, category).with_like_count(n)
    });
    let restaurants = (1_u32..=5).map(|n| {
        let lon = 127.005 + f64::from(n) * 0.008;
        restaurant(100 + u64::from(n), lon, 37.52)
    });
    let stays = [lodging(201, 127.02, 37.52), lodging(202, 127.1, 37.6)];
    attractions
        .chain(restaurants)
        .chain(stays)
        .map(|place| place.in_area(SAMPLE_REGION_ID, SAMPLE_CITY_ID))
        .collect()
}

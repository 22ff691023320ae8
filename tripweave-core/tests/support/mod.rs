//! Builders shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use tripweave_core::{CategoryId, Coordinates, MemoryStore, Place};

pub const REGION: u64 = 1;
pub const CITY: u64 = 10;

pub fn attraction(id: u64, lon: f64, lat: f64) -> Place {
    Place::new(id, Coordinates::new(lon, lat), Some(CategoryId(12)))
        .with_title(format!("attraction {id}"))
        .in_area(REGION, CITY)
}

pub fn restaurant(id: u64, lon: f64, lat: f64) -> Place {
    Place::new(id, Coordinates::new(lon, lat), Some(CategoryId::RESTAURANT))
        .with_title(format!("restaurant {id}"))
        .in_area(REGION, CITY)
}

pub fn lodging(id: u64, lon: f64, lat: f64) -> Place {
    Place::new(id, Coordinates::new(lon, lat), Some(CategoryId::LODGING))
        .with_title(format!("lodging {id}"))
        .in_area(REGION, CITY)
}

/// Lay `count` places of one kind along a diagonal starting at `origin`.
pub fn spread(
    count: u32,
    first_id: u64,
    origin: (f64, f64),
    build: fn(u64, f64, f64) -> Place,
) -> Vec<Place> {
    (0..count)
        .map(|n| {
            let step = f64::from(n) * 0.004;
            build(first_id + u64::from(n), origin.0 + step, origin.1 + step / 2.0)
        })
        .collect()
}

/// An area with the given number of attractions, restaurants and lodgings.
pub fn area(attractions: u32, restaurants: u32, lodgings: u32) -> MemoryStore {
    let mut places = spread(attractions, 1, (127.0, 37.5), attraction);
    places.extend(spread(restaurants, 1_000, (127.002, 37.501), restaurant));
    places.extend(spread(lodgings, 2_000, (127.01, 37.505), lodging));
    MemoryStore::with_places(places)
}

/// Like [`area`], with attraction base scores cycling through 40 to 90.
pub fn scored_area(attractions: u32, restaurants: u32, lodgings: u32) -> MemoryStore {
    let scores = [40, 50, 60, 70, 80, 90].into_iter().cycle();
    let mut places: Vec<Place> = spread(attractions, 1, (127.0, 37.5), attraction)
        .into_iter()
        .zip(scores)
        .map(|(place, score)| place.with_base_score(score))
        .collect();
    places.extend(spread(restaurants, 1_000, (127.002, 37.501), restaurant));
    places.extend(spread(lodgings, 2_000, (127.01, 37.505), lodging));
    MemoryStore::with_places(places)
}

//! Itinerary planning engine for Tripweave.
//!
//! Given a destination area, trip dates and the traveller's position, the
//! [`Planner`] turns a snapshot of places into a day-by-day schedule of
//! sightseeing, meals and overnight stays. The pipeline is a greedy,
//! score-weighted heuristic:
//!
//! - [`classify`] splits the places into attraction, meal and lodging pools
//!   ordered by a noisy affinity score.
//! - [`select_anchors`] picks one anchor attraction per day, walking
//!   eastwards from the westmost candidate.
//! - [`select_accommodation`] picks one lodging near the anchors' centroid.
//! - [`build_schedule`] fills each day around its anchor using
//!   [`find_nearby`](nearby::find_nearby).
//!
//! All randomness comes from the caller's generator, so a seeded generator
//! replays the same itinerary.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tripweave_core::{Coordinates, LikedSet, MemoryStore, Place, PlanRequest, Planner};
//!
//! let places = [
//!     Place::new(1, Coordinates::new(127.00, 37.5), None).in_area(1, 10),
//!     Place::new(2, Coordinates::new(127.01, 37.5), None).in_area(1, 10),
//! ];
//! let planner = Planner::new(MemoryStore::with_places(places));
//! let request = PlanRequest {
//!     region_id: 1,
//!     city_id: 10,
//!     start_date: NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date"),
//!     end_date: NaiveDate::from_ymd_opt(2024, 6, 4).expect("valid date"),
//!     party_size: 2,
//!     current: Coordinates::new(126.98, 37.57),
//! };
//! let itinerary = planner
//!     .plan(&request, &LikedSet::new(), &mut ChaCha8Rng::seed_from_u64(1))
//!     .expect("plan succeeds");
//! assert_eq!(itinerary.duration, 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod anchors;
pub mod availability;
mod config;
mod context;
mod error;
mod geometry;
mod itinerary;
pub mod lodging;
pub mod nearby;
mod place;
mod planner;
pub mod schedule;
pub mod scorer;
mod store;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use anchors::select_anchors;
pub use availability::is_open;
pub use config::{
    AnchorConfig, ConfigError, DayTemplate, LodgingConfig, NearbyConfig, PlannerConfig,
    ScoringWeights,
};
pub use context::{LikedSet, PlanningContext, Pools, UsedSet};
pub use error::{PlanError, PlanRequestValidationError};
pub use geometry::{
    KM_PER_DEGREE, TravelSpeeds, UNKNOWN_DISTANCE, distance, initial_travel_minutes,
    travel_minutes,
};
pub use itinerary::{DayPlan, ItemKind, Itinerary, LodgingStatus, ScheduleItem};
pub use lodging::select_accommodation;
pub use place::{
    CategoryId, Coordinates, DEFAULT_BASE_SCORE, Place, PlaceKind, PlaceStatus, PlaceSummary,
};
pub use planner::{PlanRequest, Planner};
pub use schedule::build_schedule;
pub use scorer::classify;
pub use store::{MemoryStore, PlaceStore};

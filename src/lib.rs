//! Facade crate for the Tripweave itinerary planner.
//!
//! This crate re-exports the planning API from `tripweave-core` so that
//! applications depend on a single crate. Fixture builders are available
//! behind the `test-support` feature.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use tripweave_core::{
    CategoryId, ConfigError, Coordinates, DayPlan, ItemKind, Itinerary, LikedSet, LodgingStatus,
    MemoryStore, Place, PlaceKind, PlaceStatus, PlaceStore, PlaceSummary, PlanError, PlanRequest,
    PlanRequestValidationError, Planner, PlannerConfig, ScheduleItem,
};

#[cfg(feature = "test-support")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use tripweave_core::test_support;

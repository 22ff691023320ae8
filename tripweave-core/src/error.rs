//! Caller-visible planning failures.
//!
//! Running out of candidates mid-schedule is not an error: slots are left
//! empty and the itinerary comes back shorter. Only problems with the
//! request itself or an area with nothing to visit surface here.

use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a [`PlanRequest`](crate::PlanRequest) is rejected before planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanRequestValidationError {
    /// The trip ends before it starts.
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart {
        /// First day of the trip.
        start: NaiveDate,
        /// Last day of the trip.
        end: NaiveDate,
    },
    /// Nobody is travelling.
    #[error("party size must be at least one")]
    EmptyParty,
    /// The trip has more days than can be represented.
    #[error("trip of {days} days is too long")]
    TooLong {
        /// Requested length in days.
        days: i64,
    },
}

/// Errors returned by [`Planner::plan`](crate::Planner::plan).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The request failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] PlanRequestValidationError),
    /// The store holds no active places for the area.
    #[error("no places available for region {region_id}, city {city_id}")]
    NoPlaces {
        /// Requested region.
        region_id: u64,
        /// Requested city.
        city_id: u64,
    },
    /// The area has places but none of them is an attraction.
    #[error("not enough attractions in region {region_id}, city {city_id}")]
    InsufficientAttractions {
        /// Requested region.
        region_id: u64,
        /// Requested city.
        city_id: u64,
    },
}

//! The planner's output: a day-by-day, time-stamped schedule.
//!
//! Serialisation mirrors the client payload: items carry a `type` tag, an
//! `HH:MM` time and the place summary under `data`; dates render as
//! `YYYY-MM-DD`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

use crate::{Place, PlaceSummary};

/// What a schedule entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Sightseeing visit.
    Spot,
    /// Lunch or dinner.
    Meal,
    /// Lodging event.
    Accommodation,
}

/// Lodging event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LodgingStatus {
    /// Leaving the lodging in the morning.
    Start,
    /// Arriving on the first evening.
    CheckIn,
    /// Coming back on later evenings.
    Return,
}

/// One entry of a day plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleItem {
    /// Entry type.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// When the entry starts; rendered as `HH:MM`.
    #[serde(rename = "time", serialize_with = "serialize_clock")]
    pub at: NaiveDateTime,
    /// The place involved.
    #[serde(rename = "data")]
    pub place: PlaceSummary,
    /// Lodging event type; present only on accommodation entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LodgingStatus>,
}

impl ScheduleItem {
    /// A sightseeing visit starting at `at`.
    #[must_use]
    pub fn spot(place: &Place, at: NaiveDateTime) -> Self {
        Self {
            kind: ItemKind::Spot,
            at,
            place: place.summary(),
            status: None,
        }
    }

    /// A meal served at `at`.
    #[must_use]
    pub fn meal(place: &Place, at: NaiveDateTime) -> Self {
        Self {
            kind: ItemKind::Meal,
            at,
            place: place.summary(),
            status: None,
        }
    }

    /// A lodging event at `at`.
    #[must_use]
    pub fn lodging(place: &Place, at: NaiveDateTime, status: LodgingStatus) -> Self {
        Self {
            kind: ItemKind::Accommodation,
            at,
            place: place.summary(),
            status: Some(status),
        }
    }

    /// Wall-clock time of the entry.
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.at.time()
    }
}

/// All entries for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// One-based day number.
    pub day: usize,
    /// Calendar date.
    pub date: NaiveDate,
    /// Entries in visiting order.
    #[serde(rename = "schedule")]
    pub items: Vec<ScheduleItem>,
}

impl DayPlan {
    /// Entries of the given kind, in order.
    pub fn items_of(&self, kind: ItemKind) -> impl Iterator<Item = &ScheduleItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}

/// A complete trip plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Requested trip length in days.
    pub duration: usize,
    /// Minutes from the traveller's position to the first anchor.
    #[serde(rename = "travel_time_to_dest")]
    pub initial_travel_minutes: u32,
    /// Region the trip was planned for.
    pub region_id: u64,
    /// Lodging used for the whole trip, if any.
    #[serde(rename = "recommended_accommodation")]
    pub accommodation: Option<PlaceSummary>,
    /// Day plans in date order.
    #[serde(rename = "plan")]
    pub days: Vec<DayPlan>,
}

fn serialize_clock<S: Serializer>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&at.format("%H:%M"))
}

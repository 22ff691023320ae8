//! Straight-line distances and travel-time estimates.
//!
//! Distances are measured in coordinate degrees without geodesic
//! correction. One degree is treated as [`KM_PER_DEGREE`] kilometres when
//! converting to travel minutes.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::Coordinates;

/// Distance reported when either endpoint has no usable position.
///
/// Large enough that such places sort after every real candidate while
/// remaining in their pools.
pub const UNKNOWN_DISTANCE: f64 = 99_999.0;

/// Approximate kilometres per coordinate degree.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Euclidean distance between two positions in degrees.
///
/// Returns [`UNKNOWN_DISTANCE`] when either side is not
/// [known](Coordinates::is_known).
///
/// # Examples
/// ```
/// use tripweave_core::{Coordinates, distance, UNKNOWN_DISTANCE};
///
/// let a = Coordinates::new(127.0, 37.0);
/// let b = Coordinates::new(127.3, 37.4);
/// assert!((distance(a, b) - 0.5).abs() < 1e-9);
/// assert_eq!(distance(a, Coordinates::UNKNOWN), UNKNOWN_DISTANCE);
/// ```
#[must_use]
pub fn distance(a: Coordinates, b: Coordinates) -> f64 {
    if !a.is_known() || !b.is_known() {
        return UNKNOWN_DISTANCE;
    }
    let delta = Coord::from(a) - Coord::from(b);
    delta.x.hypot(delta.y)
}

/// Average speeds used to turn distances into minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelSpeeds {
    /// Speed for moves between places inside the destination.
    pub local_kmh: f64,
    /// Speed for the initial leg when it is long enough to use highways.
    pub highway_kmh: f64,
    /// Initial legs longer than this many kilometres use `highway_kmh`.
    pub highway_threshold_km: f64,
}

impl Default for TravelSpeeds {
    fn default() -> Self {
        Self {
            local_kmh: 40.0,
            highway_kmh: 70.0,
            highway_threshold_km: 10.0,
        }
    }
}

impl TravelSpeeds {
    /// Minutes needed to cover `distance_deg` between two places.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "converts degrees to kilometres")]
    pub fn leg_minutes(&self, distance_deg: f64) -> u32 {
        minutes_at(distance_deg * KM_PER_DEGREE, self.local_kmh)
    }

    /// Minutes needed to move between two positions.
    #[must_use]
    pub fn minutes_between(&self, from: Coordinates, to: Coordinates) -> u32 {
        self.leg_minutes(distance(from, to))
    }

    /// Minutes from the traveller's position to the first anchor.
    ///
    /// Picks the highway speed for long legs and the local speed otherwise.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "converts degrees to kilometres")]
    pub fn initial_minutes(&self, traveller: Coordinates, destination: Coordinates) -> u32 {
        let km = distance(traveller, destination) * KM_PER_DEGREE;
        let speed = if km > self.highway_threshold_km {
            self.highway_kmh
        } else {
            self.local_kmh
        };
        minutes_at(km, speed)
    }
}

/// Minutes for a local move of `distance_deg` at the default speed.
///
/// # Examples
/// ```
/// use tripweave_core::travel_minutes;
///
/// // 0.1 degrees is 11.1 km; at 40 km/h that is 16.65 minutes.
/// assert_eq!(travel_minutes(0.1), 16);
/// ```
#[must_use]
pub fn travel_minutes(distance_deg: f64) -> u32 {
    TravelSpeeds::default().leg_minutes(distance_deg)
}

/// Minutes for the traveller's initial leg at the default speeds.
#[must_use]
pub fn initial_travel_minutes(traveller: Coordinates, destination: Coordinates) -> u32 {
    TravelSpeeds::default().initial_minutes(traveller, destination)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "travel estimates truncate fractional minutes towards zero"
)]
fn minutes_at(km: f64, speed_kmh: f64) -> u32 {
    if speed_kmh <= 0.0 || !km.is_finite() {
        return 0;
    }
    // Float-to-int `as` saturates, so absurd distances clamp at u32::MAX.
    (km / speed_kmh * 60.0) as u32
}

//! Tunable constants for the planner.
//!
//! [`PlannerConfig::default`] reproduces the production tuning. Callers can
//! override any subset through `serde`, since every section defaults.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TravelSpeeds;

/// Errors returned by [`PlannerConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A travel speed was zero, negative, or not finite.
    #[error("travel speed `{field}` must be a positive number")]
    NonPositiveSpeed {
        /// Offending field name.
        field: &'static str,
    },
    /// The noise amplitude was negative or not finite.
    #[error("score noise amplitude must be a non-negative number")]
    InvalidNoise,
    /// A top-k pick had nothing to choose from.
    #[error("`{field}` must allow at least one choice")]
    EmptyChoice {
        /// Offending field name.
        field: &'static str,
    },
    /// The candidate finder weights cannot drive a weighted draw.
    #[error("candidate selection weights must contain a positive entry")]
    UnusableSelectionWeights,
    /// The day template's clock thresholds are out of order.
    #[error("day template thresholds must satisfy start < morning cutoff <= lunch cutoff")]
    DayTemplateOrder,
}

/// Components of the desirability score shared by every selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Bonus for places the traveller liked.
    pub liked_bonus: i32,
    /// Points per like from other travellers.
    pub points_per_like: i32,
    /// Upper bound on the popularity bonus.
    pub popularity_cap: i32,
    /// Half-width of the uniform noise added during classification.
    pub noise_amplitude: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            liked_bonus: 150,
            points_per_like: 2,
            popularity_cap: 60,
            noise_amplitude: 5.0,
        }
    }
}

/// Anchor chaining limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Top-scoring attractions considered per trip day.
    pub candidates_per_day: usize,
    /// Nearest candidates the next anchor is drawn from.
    pub nearest_choices: usize,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            candidates_per_day: 15,
            nearest_choices: 3,
        }
    }
}

/// Accommodation selection tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LodgingConfig {
    /// Score deducted per degree from the anchor centroid.
    pub distance_penalty: f64,
    /// Best-scoring lodgings the stay is drawn from.
    pub top_choices: usize,
}

impl Default for LodgingConfig {
    fn default() -> Self {
        Self {
            distance_penalty: 2500.0,
            top_choices: 3,
        }
    }
}

/// Next-stop search tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearbyConfig {
    /// Score deducted per degree on meal searches.
    pub meal_distance_penalty: f64,
    /// Score deducted per degree on attraction searches.
    pub attraction_distance_penalty: f64,
    /// Score deducted when an attraction repeats the previous category.
    pub variety_penalty: f64,
    /// Draw weights by rank; its length bounds the shortlist.
    pub selection_weights: Vec<u32>,
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            meal_distance_penalty: 3000.0,
            attraction_distance_penalty: 2000.0,
            variety_penalty: 80.0,
            selection_weights: vec![10, 10, 10, 2, 2],
        }
    }
}

/// Clock thresholds and dwell times for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayTemplate {
    /// When every day begins.
    pub day_start: NaiveTime,
    /// Morning visits only start before this time.
    pub morning_cutoff: NaiveTime,
    /// A second morning stop must be finished by this time.
    pub morning_extra_deadline: NaiveTime,
    /// Lunch is only searched for before this time.
    pub lunch_cutoff: NaiveTime,
    /// Lunch is never served earlier than this.
    pub lunch_earliest: NaiveTime,
    /// Dinner is never served earlier than this.
    pub dinner_earliest: NaiveTime,
    /// Afternoon visits stop once the clock reaches this hour.
    pub afternoon_end_hour: u32,
    /// Afternoon attraction slots per day.
    pub afternoon_spots: usize,
    /// Minutes spent at the day's anchor.
    pub anchor_dwell_minutes: u32,
    /// Minutes spent at the optional second morning stop.
    pub morning_extra_dwell_minutes: u32,
    /// Minutes spent at each afternoon stop.
    pub afternoon_dwell_minutes: u32,
    /// Minutes spent at each meal.
    pub meal_dwell_minutes: u32,
}

impl Default for DayTemplate {
    fn default() -> Self {
        Self {
            day_start: clock(9, 0),
            morning_cutoff: clock(11, 30),
            morning_extra_deadline: clock(13, 0),
            lunch_cutoff: clock(14, 0),
            lunch_earliest: clock(12, 0),
            dinner_earliest: clock(18, 0),
            afternoon_end_hour: 18,
            afternoon_spots: 2,
            anchor_dwell_minutes: 90,
            morning_extra_dwell_minutes: 60,
            afternoon_dwell_minutes: 90,
            meal_dwell_minutes: 60,
        }
    }
}

/// Every tunable constant used while planning.
///
/// # Examples
/// ```
/// use tripweave_core::PlannerConfig;
///
/// let config = PlannerConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.nearby.selection_weights, vec![10, 10, 10, 2, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Shared score components.
    pub scoring: ScoringWeights,
    /// Anchor chaining.
    pub anchors: AnchorConfig,
    /// Accommodation selection.
    pub lodging: LodgingConfig,
    /// Next-stop search.
    pub nearby: NearbyConfig,
    /// Travel-time conversion.
    pub speeds: TravelSpeeds,
    /// Daily clock.
    pub day: DayTemplate,
}

impl PlannerConfig {
    /// Check that the configuration can drive a planning run.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, speed) in [
            ("local_kmh", self.speeds.local_kmh),
            ("highway_kmh", self.speeds.highway_kmh),
        ] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(ConfigError::NonPositiveSpeed { field });
            }
        }
        let noise = self.scoring.noise_amplitude;
        if !(noise.is_finite() && noise >= 0.0) {
            return Err(ConfigError::InvalidNoise);
        }
        for (field, choices) in [
            ("anchors.candidates_per_day", self.anchors.candidates_per_day),
            ("anchors.nearest_choices", self.anchors.nearest_choices),
            ("lodging.top_choices", self.lodging.top_choices),
        ] {
            if choices == 0 {
                return Err(ConfigError::EmptyChoice { field });
            }
        }
        if !self.nearby.selection_weights.iter().any(|&weight| weight > 0) {
            return Err(ConfigError::UnusableSelectionWeights);
        }
        let day = &self.day;
        if day.day_start >= day.morning_cutoff || day.morning_cutoff > day.lunch_cutoff {
            return Err(ConfigError::DayTemplateOrder);
        }
        Ok(())
    }
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_configuration_is_valid() {
        assert_eq!(PlannerConfig::default().validate(), Ok(()));
    }

    #[rstest]
    fn rejects_zero_local_speed() {
        let mut config = PlannerConfig::default();
        config.speeds.local_kmh = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveSpeed { field: "local_kmh" })
        );
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![0, 0, 0])]
    fn rejects_unusable_weights(#[case] weights: Vec<u32>) {
        let mut config = PlannerConfig::default();
        config.nearby.selection_weights = weights;
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnusableSelectionWeights)
        );
    }

    #[rstest]
    fn rejects_negative_noise() {
        let mut config = PlannerConfig::default();
        config.scoring.noise_amplitude = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidNoise));
    }

    #[rstest]
    fn rejects_zero_anchor_choices() {
        let mut config = PlannerConfig::default();
        config.anchors.nearest_choices = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyChoice {
                field: "anchors.nearest_choices"
            })
        );
    }

    #[rstest]
    fn partial_json_keeps_defaults() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{ "nearby": { "variety_penalty": 40.0 } }"#)
                .expect("partial config parses");
        assert!((config.nearby.variety_penalty - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.nearby.selection_weights, vec![10, 10, 10, 2, 2]);
        assert_eq!(config.day, DayTemplate::default());
    }
}

//! Next-stop search around the traveller's current position.
//!
//! Candidates are scored by affinity minus a distance penalty (and, for
//! sightseeing, a penalty for repeating the previous stop's category). The
//! best few form a shortlist and one is drawn with rank-based weights, so
//! the top entries dominate while lower ranks still surface now and then.

use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::scorer::{affinity, rank};
use crate::{LikedSet, Place, PlannerConfig, PlanningContext, distance, is_open};

/// What the traveller is looking for next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Search<'p> {
    /// A restaurant for lunch or dinner.
    Meal,
    /// Another attraction.
    Attraction {
        /// The last attraction visited, for the variety penalty.
        previous: Option<&'p Place>,
    },
}

impl Search<'_> {
    const fn is_meal(&self) -> bool {
        matches!(self, Self::Meal)
    }
}

/// Deterministic part of a candidate's score for a search from `from`.
///
/// # Examples
/// ```
/// use tripweave_core::nearby::{Search, proximity_score};
/// use tripweave_core::{Coordinates, LikedSet, Place, PlannerConfig};
///
/// let here = Place::new(1, Coordinates::new(127.0, 37.0), None);
/// let there = Place::new(2, Coordinates::new(127.01, 37.0), None);
/// let config = PlannerConfig::default();
/// let score = proximity_score(&there, &here, Search::Meal, &LikedSet::new(), &config);
/// // 50 base minus 0.01 degrees at 3000 points per degree.
/// assert!((score - 20.0).abs() < 1e-6);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "candidate scores combine affinity with distance penalties"
)]
pub fn proximity_score(
    candidate: &Place,
    from: &Place,
    search: Search<'_>,
    liked: &LikedSet,
    config: &PlannerConfig,
) -> f64 {
    let nearby = &config.nearby;
    let weight = if search.is_meal() {
        nearby.meal_distance_penalty
    } else {
        nearby.attraction_distance_penalty
    };
    let variety = match search {
        Search::Attraction {
            previous: Some(previous),
        } if candidate.shares_category_with(previous) => nearby.variety_penalty,
        _ => 0.0,
    };
    affinity(candidate, liked, &config.scoring)
        - distance(from.location, candidate.location) * weight
        - variety
}

/// Draw the next stop for `search`, or `None` when nothing qualifies.
///
/// Used places, places closed on `date`, and (for meals) the place the
/// traveller is standing in are skipped. The returned place is not marked
/// as used; callers decide whether the visit actually happens.
pub fn find_nearby<R: Rng + ?Sized>(
    ctx: &mut PlanningContext<'_, R>,
    from: &Place,
    search: Search<'_>,
    date: NaiveDate,
) -> Option<Place> {
    let pool = if search.is_meal() {
        &ctx.pools.meals
    } else {
        &ctx.pools.attractions
    };
    let scored: Vec<(f64, &Place)> = pool
        .iter()
        .filter(|candidate| !ctx.used.contains(candidate.id))
        .filter(|candidate| !(search.is_meal() && candidate.id == from.id))
        .filter(|candidate| is_open(candidate, date))
        .map(|candidate| {
            let score = proximity_score(candidate, from, search, ctx.liked, ctx.config);
            (score, candidate)
        })
        .collect();
    if scored.is_empty() {
        debug!("no open candidate for {search:?} near place {}", from.id);
        return None;
    }

    let weights = &ctx.config.nearby.selection_weights;
    let mut shortlist = rank(scored);
    shortlist.truncate(weights.len());
    let weighted: Vec<(Place, u32)> = shortlist.into_iter().zip(weights.iter().copied()).collect();
    let picked = weighted
        .choose_weighted(&mut *ctx.rng, |(_, weight)| *weight)
        .ok()
        .or_else(|| weighted.first())
        .map(|(place, _)| place.clone());
    debug!(
        "picked {:?} from shortlist {:?}",
        picked.as_ref().map(|place| place.id),
        weighted.iter().map(|(place, _)| place.id).collect::<Vec<_>>()
    );
    picked
}

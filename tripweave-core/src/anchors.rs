//! Anchor selection: one headline attraction per trip day.
//!
//! The chain starts at the westmost strong candidate and hops to one of the
//! nearest remaining candidates each day, so consecutive days stay close
//! together without always taking the single nearest hop.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Place, PlanningContext, distance};

/// Longitude used for places without one, so they start a chain last.
pub const MISSING_LONGITUDE: f64 = 999.0;

fn westmost_key(place: &Place) -> f64 {
    let lon = place.location.lon;
    if lon.is_finite() && lon != 0.0 {
        lon
    } else {
        MISSING_LONGITUDE
    }
}

/// Choose up to `days` anchors from the attraction pool.
///
/// Only the first `days * candidates_per_day` attractions are considered.
/// Every chosen anchor is recorded in the context's used set. Returning
/// fewer anchors than days is a valid, degraded outcome.
pub fn select_anchors<R: Rng + ?Sized>(ctx: &mut PlanningContext<'_, R>, days: usize) -> Vec<Place> {
    let limit = days.saturating_mul(ctx.config.anchors.candidates_per_day);
    let candidates: Vec<&Place> = ctx.pools.attractions.iter().take(limit).collect();
    let mut anchors: Vec<Place> = Vec::with_capacity(days.min(candidates.len()));
    if days == 0 {
        return anchors;
    }

    let Some(start) = candidates
        .iter()
        .copied()
        .min_by(|lhs, rhs| westmost_key(lhs).total_cmp(&westmost_key(rhs)))
    else {
        return anchors;
    };
    ctx.used.insert(start.id);
    anchors.push(start.clone());

    while anchors.len() < days {
        let Some(last) = anchors.last().map(|anchor| anchor.location) else {
            break;
        };
        let mut remaining: Vec<&Place> = candidates
            .iter()
            .copied()
            .filter(|candidate| !ctx.used.contains(candidate.id))
            .collect();
        if remaining.is_empty() {
            break;
        }
        remaining.sort_by(|lhs, rhs| {
            distance(last, lhs.location).total_cmp(&distance(last, rhs.location))
        });
        remaining.truncate(ctx.config.anchors.nearest_choices.max(1));
        let Some(next) = remaining.choose(&mut *ctx.rng).copied() else {
            break;
        };
        ctx.used.insert(next.id);
        anchors.push(next.clone());
    }

    if anchors.len() < days {
        warn!(
            "only {} anchor(s) available for a {days}-day trip",
            anchors.len()
        );
    }
    debug!(
        "selected anchors {:?}",
        anchors.iter().map(|anchor| anchor.id).collect::<Vec<_>>()
    );
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::place;
    use crate::{LikedSet, PlannerConfig, Pools};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;
    use std::collections::HashSet;

    fn pools(attractions: Vec<Place>) -> Pools {
        Pools {
            attractions,
            ..Pools::default()
        }
    }

    #[rstest]
    fn starts_from_westmost_candidate() {
        let config = PlannerConfig::default();
        let liked = LikedSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut ctx = PlanningContext::new(
            pools(vec![
                place(1, 127.5, 37.0),
                place(2, 126.2, 37.0),
                place(3, 0.0, 0.0),
                place(4, 127.0, 37.0),
            ]),
            &liked,
            &config,
            &mut rng,
        );
        let anchors = select_anchors(&mut ctx, 1);
        assert_eq!(anchors.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
        assert!(ctx.used.contains(2));
    }

    #[rstest]
    fn places_without_longitude_start_only_as_last_resort() {
        let config = PlannerConfig::default();
        let liked = LikedSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut ctx = PlanningContext::new(pools(vec![place(8, 0.0, 0.0)]), &liked, &config, &mut rng);
        let anchors = select_anchors(&mut ctx, 2);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors.first().map(|a| a.id), Some(8));
    }

    #[rstest]
    fn next_anchor_is_among_three_nearest() {
        let config = PlannerConfig::default();
        let liked = LikedSet::new();
        let attractions = vec![
            place(1, 126.0, 37.0),
            place(2, 126.01, 37.0),
            place(3, 126.02, 37.0),
            place(4, 126.03, 37.0),
            place(5, 128.0, 37.0),
        ];
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx = PlanningContext::new(pools(attractions.clone()), &liked, &config, &mut rng);
            let anchors = select_anchors(&mut ctx, 2);
            let second = anchors.get(1).map(|a| a.id);
            assert!(matches!(second, Some(2..=4)), "unexpected second anchor {second:?}");
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(10, 6)]
    fn never_exceeds_days_or_pool(#[case] days: usize, #[case] expected: usize) {
        let config = PlannerConfig::default();
        let liked = LikedSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let attractions = (1..=6).map(|id| place(id, 126.0 + id as f64 * 0.01, 37.0)).collect();
        let mut ctx = PlanningContext::new(pools(attractions), &liked, &config, &mut rng);
        let anchors = select_anchors(&mut ctx, days);
        assert_eq!(anchors.len(), expected);
        let unique: HashSet<u64> = anchors.iter().map(|a| a.id).collect();
        assert_eq!(unique.len(), anchors.len());
    }

    #[rstest]
    fn only_top_candidates_per_day_are_considered() {
        let mut config = PlannerConfig::default();
        config.anchors.candidates_per_day = 2;
        let liked = LikedSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        // The westmost attraction sits beyond the candidate window.
        let attractions = vec![
            place(1, 127.0, 37.0),
            place(2, 127.1, 37.0),
            place(3, 120.0, 37.0),
        ];
        let mut ctx = PlanningContext::new(pools(attractions), &liked, &config, &mut rng);
        let anchors = select_anchors(&mut ctx, 1);
        assert_eq!(anchors.first().map(|a| a.id), Some(1));
    }
}

//! Accommodation selection.
//!
//! One lodging serves the whole trip. Candidates are scored against the
//! centroid of the anchors so the traveller sleeps near the days' headline
//! attractions, then one of the best few is drawn at random.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::scorer::{affinity, rank};
use crate::{Coordinates, Place, PlanningContext, distance};

/// Mean position of the anchors with known coordinates.
///
/// # Examples
/// ```
/// use tripweave_core::{Coordinates, Place, lodging::centroid};
///
/// let anchors = vec![
///     Place::new(1, Coordinates::new(127.0, 37.0), None),
///     Place::new(2, Coordinates::new(127.2, 37.4), None),
///     Place::new(3, Coordinates::UNKNOWN, None),
/// ];
/// let centre = centroid(&anchors).expect("two anchors have coordinates");
/// assert!((centre.lon - 127.1).abs() < 1e-9);
/// assert!((centre.lat - 37.2).abs() < 1e-9);
/// assert!(centroid(&anchors[2..]).is_none());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the centroid is an arithmetic mean of coordinates"
)]
pub fn centroid(anchors: &[Place]) -> Option<Coordinates> {
    let known: Vec<Coordinates> = anchors
        .iter()
        .map(|anchor| anchor.location)
        .filter(|location| location.is_known())
        .collect();
    if known.is_empty() {
        return None;
    }
    let count = known.len() as f64;
    let lon = known.iter().map(|c| c.lon).sum::<f64>() / count;
    let lat = known.iter().map(|c| c.lat).sum::<f64>() / count;
    Some(Coordinates::new(lon, lat))
}

/// Pick the lodging for the trip, if the pool has any.
///
/// Falls back to the best-ranked lodging when no anchor has coordinates.
#[expect(
    clippy::float_arithmetic,
    reason = "lodging scores subtract a distance penalty"
)]
pub fn select_accommodation<R: Rng + ?Sized>(
    ctx: &mut PlanningContext<'_, R>,
    anchors: &[Place],
) -> Option<Place> {
    if ctx.pools.lodging.is_empty() || anchors.is_empty() {
        return None;
    }
    let Some(centre) = centroid(anchors) else {
        debug!("no anchor has coordinates; using the top-ranked lodging");
        return ctx.pools.lodging.first().cloned();
    };

    let weights = &ctx.config.scoring;
    let penalty = ctx.config.lodging.distance_penalty;
    let scored: Vec<(f64, &Place)> = ctx
        .pools
        .lodging
        .iter()
        .map(|candidate| {
            let score = affinity(candidate, ctx.liked, weights)
                - distance(centre, candidate.location) * penalty;
            (score, candidate)
        })
        .collect();
    let mut shortlist = rank(scored);
    shortlist.truncate(ctx.config.lodging.top_choices.max(1));
    let chosen = shortlist.choose(&mut *ctx.rng).cloned();
    debug!(
        "selected lodging {:?} from {} candidate(s)",
        chosen.as_ref().map(|place| place.id),
        shortlist.len()
    );
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lodging, place};
    use crate::{LikedSet, PlannerConfig, Pools};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    fn pools(lodging: Vec<Place>) -> Pools {
        Pools {
            lodging,
            ..Pools::default()
        }
    }

    #[rstest]
    fn no_lodging_means_no_stay() {
        let config = PlannerConfig::default();
        let liked = LikedSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut ctx = PlanningContext::new(Pools::default(), &liked, &config, &mut rng);
        let anchors = vec![place(1, 127.0, 37.0)];
        assert!(select_accommodation(&mut ctx, &anchors).is_none());
    }

    #[rstest]
    fn far_lodging_never_wins() {
        let config = PlannerConfig::default();
        let liked = LikedSet::new();
        let anchors = vec![place(1, 127.0, 37.0), place(2, 127.02, 37.0)];
        let candidates = vec![
            lodging(10, 127.01, 37.0),
            lodging(11, 127.011, 37.001),
            lodging(12, 127.012, 37.0),
            lodging(13, 129.0, 35.0).with_like_count(100),
        ];
        for seed in 0..30 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx = PlanningContext::new(pools(candidates.clone()), &liked, &config, &mut rng);
            let stay = select_accommodation(&mut ctx, &anchors).map(|p| p.id);
            assert!(matches!(stay, Some(10..=12)), "picked {stay:?}");
        }
    }

    #[rstest]
    fn single_candidate_is_deterministic() {
        let config = PlannerConfig::default();
        let liked = LikedSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut ctx =
            PlanningContext::new(pools(vec![lodging(20, 127.0, 37.0)]), &liked, &config, &mut rng);
        let anchors = vec![place(1, 127.0, 37.0)];
        assert_eq!(select_accommodation(&mut ctx, &anchors).map(|p| p.id), Some(20));
    }

    #[rstest]
    fn anchors_without_coordinates_fall_back_to_first_lodging() {
        let config = PlannerConfig::default();
        let liked = LikedSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut ctx = PlanningContext::new(
            pools(vec![lodging(30, 127.0, 37.0), lodging(31, 127.1, 37.0)]),
            &liked,
            &config,
            &mut rng,
        );
        let anchors = vec![place(1, 0.0, 0.0)];
        assert_eq!(select_accommodation(&mut ctx, &anchors).map(|p| p.id), Some(30));
    }
}

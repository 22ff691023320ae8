//! Desirability scoring and pool classification.
//!
//! Every selector starts from the same affinity: the editorial score, a
//! bonus for places the traveller liked, and a capped popularity bonus.
//! Classification adds a little uniform noise on top so repeated requests
//! produce different orderings.

use rand::Rng;

use crate::{LikedSet, Place, PlaceKind, Pools, ScoringWeights};

/// Capped bonus for `likes` from other travellers.
///
/// # Examples
/// ```
/// use tripweave_core::{ScoringWeights, scorer::popularity_bonus};
///
/// let weights = ScoringWeights::default();
/// assert_eq!(popularity_bonus(12, &weights), 24);
/// assert_eq!(popularity_bonus(500, &weights), 60);
/// ```
#[must_use]
pub fn popularity_bonus(likes: u32, weights: &ScoringWeights) -> i32 {
    i32::try_from(likes)
        .unwrap_or(i32::MAX)
        .saturating_mul(weights.points_per_like)
        .min(weights.popularity_cap)
}

/// Noise-free desirability of `place` for this traveller.
#[must_use]
pub fn affinity(place: &Place, liked: &LikedSet, weights: &ScoringWeights) -> f64 {
    let liked_bonus = if liked.contains(place.id) {
        weights.liked_bonus
    } else {
        0
    };
    let total = place
        .base_score()
        .saturating_add(liked_bonus)
        .saturating_add(popularity_bonus(place.like_count, weights));
    f64::from(total)
}

/// Affinity plus uniform noise in `±noise_amplitude`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "noise is drawn as a floating-point offset"
)]
pub fn noisy_score<R: Rng + ?Sized>(
    place: &Place,
    liked: &LikedSet,
    weights: &ScoringWeights,
    rng: &mut R,
) -> f64 {
    let amplitude = weights.noise_amplitude;
    let noise = if amplitude > 0.0 {
        rng.gen_range(-amplitude..=amplitude)
    } else {
        0.0
    };
    affinity(place, liked, weights) + noise
}

/// Split `places` into attraction, meal and lodging pools, best first.
///
/// Each place receives one noisy score; pools are sorted by it in
/// descending order with a stable sort, then the scores are discarded.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tripweave_core::{CategoryId, Coordinates, LikedSet, Place, ScoringWeights, classify};
///
/// let places = vec![
///     Place::new(1, Coordinates::new(127.0, 37.0), None).with_base_score(40),
///     Place::new(2, Coordinates::new(127.1, 37.0), None).with_base_score(90),
///     Place::new(3, Coordinates::new(127.2, 37.0), Some(CategoryId::RESTAURANT)),
/// ];
/// let mut rng = StdRng::seed_from_u64(7);
/// let pools = classify(&places, &LikedSet::new(), &ScoringWeights::default(), &mut rng);
/// let order: Vec<u64> = pools.attractions.iter().map(|p| p.id).collect();
/// assert_eq!(order, vec![2, 1]);
/// assert_eq!(pools.meals.len(), 1);
/// assert!(pools.lodging.is_empty());
/// ```
pub fn classify<R: Rng + ?Sized>(
    places: &[Place],
    liked: &LikedSet,
    weights: &ScoringWeights,
    rng: &mut R,
) -> Pools {
    let mut attractions = Vec::new();
    let mut meals = Vec::new();
    let mut lodging = Vec::new();
    for place in places {
        let scored = (noisy_score(place, liked, weights, rng), place);
        match place.kind() {
            PlaceKind::Attraction => attractions.push(scored),
            PlaceKind::Meal => meals.push(scored),
            PlaceKind::Lodging => lodging.push(scored),
        }
    }
    Pools {
        attractions: rank(attractions),
        meals: rank(meals),
        lodging: rank(lodging),
    }
}

/// Stable descending sort by score, keeping only the places.
pub(crate) fn rank(mut scored: Vec<(f64, &Place)>) -> Vec<Place> {
    scored.sort_by(|(lhs, _), (rhs, _)| rhs.total_cmp(lhs));
    scored.into_iter().map(|(_, place)| place.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lodging, place, restaurant};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    fn quiet() -> ScoringWeights {
        ScoringWeights {
            noise_amplitude: 0.0,
            ..ScoringWeights::default()
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(29, 58)]
    #[case(30, 60)]
    #[case(u32::MAX, 60)]
    fn popularity_is_capped(#[case] likes: u32, #[case] bonus: i32) {
        assert_eq!(popularity_bonus(likes, &ScoringWeights::default()), bonus);
    }

    #[rstest]
    fn liked_places_gain_bonus() {
        let spot = place(9, 127.0, 37.0).with_like_count(5);
        let liked: LikedSet = [9].into_iter().collect();
        let weights = ScoringWeights::default();
        let with = affinity(&spot, &liked, &weights);
        let without = affinity(&spot, &LikedSet::new(), &weights);
        assert!((with - without - 150.0).abs() < f64::EPSILON);
        assert!((without - 60.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn noise_stays_within_band() {
        let spot = place(1, 127.0, 37.0);
        let weights = ScoringWeights::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let score = noisy_score(&spot, &LikedSet::new(), &weights, &mut rng);
            assert!((45.0..=55.0).contains(&score), "score {score} escaped the band");
        }
    }

    #[rstest]
    fn classification_partitions_by_category() {
        let places = vec![
            place(1, 127.0, 37.0),
            restaurant(2, 127.0, 37.1),
            lodging(3, 127.0, 37.2),
            place(4, 127.0, 37.3),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let pools = classify(&places, &LikedSet::new(), &ScoringWeights::default(), &mut rng);
        assert_eq!(pools.attractions.len(), 2);
        assert_eq!(pools.meals.first().map(|p| p.id), Some(2));
        assert_eq!(pools.lodging.first().map(|p| p.id), Some(3));
    }

    #[rstest]
    fn ties_keep_input_order() {
        let places: Vec<Place> = (1..=6).map(|id| place(id, 127.0, 37.0)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let pools = classify(&places, &LikedSet::new(), &quiet(), &mut rng);
        let ids: Vec<u64> = pools.attractions.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn identical_draws_give_identical_pools() {
        let places: Vec<Place> = (1..=20)
            .map(|id| place(id, 127.0, 37.0).with_base_score(50 + (id % 3) as i32))
            .collect();
        let weights = ScoringWeights::default();
        let first = classify(
            &places,
            &LikedSet::new(),
            &weights,
            &mut ChaCha8Rng::seed_from_u64(99),
        );
        let second = classify(
            &places,
            &LikedSet::new(),
            &weights,
            &mut ChaCha8Rng::seed_from_u64(99),
        );
        assert_eq!(first, second);
    }
}

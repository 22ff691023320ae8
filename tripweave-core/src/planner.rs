//! Request handling and orchestration.
//!
//! [`Planner::plan`] validates a [`PlanRequest`], pulls the area's places
//! from a [`PlaceStore`] and runs the pipeline: classify, pick anchors,
//! pick lodging, then build the daily schedule.

use chrono::NaiveDate;
use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::schedule::{TripFrame, build_schedule};
use crate::{
    ConfigError, Coordinates, Itinerary, LikedSet, Place, PlaceStore, PlanError,
    PlanRequestValidationError, PlannerConfig, PlanningContext, classify, select_accommodation,
    select_anchors,
};

/// A request for a trip plan.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tripweave_core::{Coordinates, PlanRequest};
///
/// let request = PlanRequest {
///     region_id: 1,
///     city_id: 10,
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date"),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 5).expect("valid date"),
///     party_size: 2,
///     current: Coordinates::new(126.98, 37.57),
/// };
/// assert_eq!(request.duration_days(), Ok(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Destination region.
    pub region_id: u64,
    /// Destination city within the region.
    pub city_id: u64,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip, inclusive.
    pub end_date: NaiveDate,
    /// Number of travellers.
    #[serde(alias = "num_people")]
    pub party_size: u32,
    /// Where the traveller is now.
    pub current: Coordinates,
}

impl PlanRequest {
    /// Check the request without touching any data.
    ///
    /// # Errors
    /// Returns [`PlanRequestValidationError`] when the dates are reversed or
    /// the party is empty. An unknown current position is not an error; the
    /// first leg then takes the sentinel distance.
    pub fn validate(&self) -> Result<(), PlanRequestValidationError> {
        if self.party_size == 0 {
            return Err(PlanRequestValidationError::EmptyParty);
        }
        self.duration_days().map(|_| ())
    }

    /// Trip length in days, counting both ends.
    ///
    /// # Errors
    /// Returns [`PlanRequestValidationError::EndBeforeStart`] for reversed
    /// dates.
    pub fn duration_days(&self) -> Result<usize, PlanRequestValidationError> {
        if self.end_date < self.start_date {
            return Err(PlanRequestValidationError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        let days = (self.end_date - self.start_date).num_days().saturating_add(1);
        usize::try_from(days).map_err(|_| PlanRequestValidationError::TooLong { days })
    }
}

/// Builds itineraries from the places a [`PlaceStore`] provides.
///
/// The planner holds no per-request state, so one instance can serve many
/// threads when the store allows it.
#[derive(Debug, Clone)]
pub struct Planner<S> {
    store: S,
    config: PlannerConfig,
}

impl<S: PlaceStore> Planner<S> {
    /// Create a planner with the default configuration.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: PlannerConfig::default(),
        }
    }

    /// Create a planner with a custom configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration fails validation.
    pub fn with_config(store: S, config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a trip.
    ///
    /// `liked` boosts favourited places; `rng` drives every random choice,
    /// so a seeded generator replays the same itinerary.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidRequest`] for a malformed request,
    /// [`PlanError::NoPlaces`] when the area is empty and
    /// [`PlanError::InsufficientAttractions`] when it has nothing to visit.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use tripweave_core::{
    ///     CategoryId, Coordinates, LikedSet, MemoryStore, Place, PlanRequest, Planner,
    /// };
    ///
    /// let places = (0..6_u32).map(|n| {
    ///     let lon = 127.0 + f64::from(n) / 100.0;
    ///     let category = (n == 5).then_some(CategoryId::RESTAURANT);
    ///     Place::new(u64::from(n), Coordinates::new(lon, 37.5), category).in_area(1, 10)
    /// });
    /// let planner = Planner::new(MemoryStore::with_places(places));
    /// let request = PlanRequest {
    ///     region_id: 1,
    ///     city_id: 10,
    ///     start_date: NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date"),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date"),
    ///     party_size: 1,
    ///     current: Coordinates::new(127.0, 37.5),
    /// };
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let itinerary = planner.plan(&request, &LikedSet::new(), &mut rng)?;
    /// assert_eq!(itinerary.days.len(), 1);
    /// # Ok::<(), tripweave_core::PlanError>(())
    /// ```
    pub fn plan<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        liked: &LikedSet,
        rng: &mut R,
    ) -> Result<Itinerary, PlanError> {
        request.validate()?;
        let duration = request.duration_days()?;
        let (region_id, city_id) = (request.region_id, request.city_id);

        let places = self.store.active_places(region_id, city_id);
        if places.is_empty() {
            return Err(PlanError::NoPlaces { region_id, city_id });
        }
        let pools = classify(&places, liked, &self.config.scoring, &mut *rng);
        if pools.attractions.is_empty() {
            return Err(PlanError::InsufficientAttractions { region_id, city_id });
        }

        let mut ctx = PlanningContext::new(pools, liked, &self.config, rng);
        let anchors = select_anchors(&mut ctx, duration);
        let accommodation = select_accommodation(&mut ctx, &anchors);
        if accommodation.is_none() && duration > 1 {
            warn!("no lodging available for a {duration}-day trip in region {region_id}");
        }
        let initial_travel_minutes = anchors.first().map_or(0, |first| {
            self.config
                .speeds
                .initial_minutes(request.current, first.location)
        });
        let frame = TripFrame {
            start_date: request.start_date,
            duration,
            initial_travel_minutes,
            accommodation: accommodation.as_ref(),
        };
        let days = build_schedule(&mut ctx, &anchors, frame);

        info!(
            "planned {} of {duration} day(s) for region {region_id}, city {city_id} using {} place(s)",
            days.len(),
            ctx.used.len()
        );
        Ok(Itinerary {
            duration,
            initial_travel_minutes,
            region_id,
            accommodation: accommodation.as_ref().map(Place::summary),
            days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use crate::test_support::{place, restaurant, sample_region};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).expect("valid date")
    }

    #[fixture]
    fn request() -> PlanRequest {
        PlanRequest {
            region_id: 1,
            city_id: 10,
            start_date: date(3),
            end_date: date(5),
            party_size: 2,
            current: Coordinates::new(126.9, 37.5),
        }
    }

    #[rstest]
    fn reversed_dates_are_rejected(mut request: PlanRequest) {
        request.end_date = date(2);
        let planner = Planner::new(sample_region());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = planner
            .plan(&request, &LikedSet::new(), &mut rng)
            .expect_err("reversed dates");
        assert!(matches!(
            err,
            PlanError::InvalidRequest(PlanRequestValidationError::EndBeforeStart { .. })
        ));
    }

    #[rstest]
    fn empty_party_is_rejected(mut request: PlanRequest) {
        request.party_size = 0;
        assert_eq!(request.validate(), Err(PlanRequestValidationError::EmptyParty));
    }

    #[rstest]
    #[case(Coordinates::UNKNOWN)]
    #[case(Coordinates::new(127.0, 0.0))]
    #[case(Coordinates::new(f64::NAN, 37.0))]
    fn unknown_position_still_plans(mut request: PlanRequest, #[case] current: Coordinates) {
        request.current = current;
        assert_eq!(request.validate(), Ok(()));
        let planner = Planner::new(sample_region());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let itinerary = planner
            .plan(&request, &LikedSet::new(), &mut rng)
            .expect("unknown position degrades");
        let far = planner.config().speeds.initial_minutes(Coordinates::UNKNOWN, request.current);
        assert_eq!(itinerary.initial_travel_minutes, far);
        assert!(itinerary.initial_travel_minutes > 24 * 60);
        assert_eq!(itinerary.days.len(), 3);
    }

    #[rstest]
    fn multi_millennium_trip_degrades_to_available_anchors(mut request: PlanRequest) {
        request.start_date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        request.end_date = NaiveDate::from_ymd_opt(200_000, 1, 1).expect("valid date");
        let store = MemoryStore::with_places([
            place(1, 127.0, 37.5).in_area(1, 10),
            place(2, 127.01, 37.5).in_area(1, 10),
            place(3, 127.02, 37.5).in_area(1, 10),
        ]);
        let planner = Planner::new(store);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let itinerary = planner
            .plan(&request, &LikedSet::new(), &mut rng)
            .expect("long trips degrade");
        assert!(itinerary.duration > 365 * 100_000);
        assert_eq!(itinerary.days.len(), 3);
    }

    #[rstest]
    fn same_day_trip_lasts_one_day(mut request: PlanRequest) {
        request.end_date = request.start_date;
        assert_eq!(request.duration_days(), Ok(1));
    }

    #[rstest]
    fn empty_area_reports_no_places(request: PlanRequest) {
        let planner = Planner::new(MemoryStore::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = planner
            .plan(&request, &LikedSet::new(), &mut rng)
            .expect_err("empty store");
        assert_eq!(err, PlanError::NoPlaces { region_id: 1, city_id: 10 });
    }

    #[rstest]
    fn restaurants_alone_are_not_enough(request: PlanRequest) {
        let store = MemoryStore::with_places([restaurant(1, 127.0, 37.5).in_area(1, 10)]);
        let planner = Planner::new(store);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = planner
            .plan(&request, &LikedSet::new(), &mut rng)
            .expect_err("no attractions");
        assert_eq!(
            err,
            PlanError::InsufficientAttractions { region_id: 1, city_id: 10 }
        );
    }

    #[rstest]
    fn invalid_config_is_refused() {
        let mut config = PlannerConfig::default();
        config.nearby.selection_weights.clear();
        assert!(Planner::with_config(MemoryStore::default(), config).is_err());
    }

    #[rstest]
    fn three_day_trip_uses_sample_region(request: PlanRequest) {
        let planner = Planner::new(sample_region());
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let itinerary = planner
            .plan(&request, &LikedSet::new(), &mut rng)
            .expect("plan succeeds");
        assert_eq!(itinerary.duration, 3);
        assert_eq!(itinerary.days.len(), 3);
        assert!(itinerary.accommodation.is_some());
        let dates: Vec<NaiveDate> = itinerary.days.iter().map(|day| day.date).collect();
        assert_eq!(dates, vec![date(3), date(4), date(5)]);
    }

    #[rstest]
    fn single_attraction_shortens_the_trip(request: PlanRequest) {
        let store = MemoryStore::with_places([place(1, 127.0, 37.5).in_area(1, 10)]);
        let planner = Planner::new(store);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let itinerary = planner
            .plan(&request, &LikedSet::new(), &mut rng)
            .expect("plan succeeds");
        assert_eq!(itinerary.duration, 3);
        assert_eq!(itinerary.days.len(), 1);
        assert!(itinerary.accommodation.is_none());
    }

    #[rstest]
    fn seeded_runs_replay(request: PlanRequest) {
        let planner = Planner::new(sample_region());
        let liked = LikedSet::new();
        let first = planner
            .plan(&request, &liked, &mut ChaCha8Rng::seed_from_u64(5))
            .expect("plan succeeds");
        let second = planner
            .plan(&request, &liked, &mut ChaCha8Rng::seed_from_u64(5))
            .expect("plan succeeds");
        assert_eq!(first, second);
    }
}

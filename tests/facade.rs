//! Smoke test of the re-exported planning API.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::rstest;
use tripweave_core::test_support::{SAMPLE_CITY_ID, SAMPLE_REGION_ID, sample_region};
use tripweave_engine::{Coordinates, ItemKind, LikedSet, PlanRequest, Planner};

#[rstest]
fn facade_plans_and_serialises_a_trip() {
    let start = NaiveDate::from_ymd_opt(2024, 6, 7).expect("valid date");
    let request = PlanRequest {
        region_id: SAMPLE_REGION_ID,
        city_id: SAMPLE_CITY_ID,
        start_date: start,
        end_date: start.succ_opt().expect("valid date"),
        party_size: 3,
        current: Coordinates::new(127.3, 37.4),
    };
    let liked: LikedSet = [4, 9].into_iter().collect();
    let planner = Planner::new(sample_region());
    let itinerary = planner
        .plan(&request, &liked, &mut ChaCha8Rng::seed_from_u64(3))
        .expect("plan succeeds");

    let first = itinerary.days.first().expect("first day");
    assert!(first.items_of(ItemKind::Spot).next().is_some());
    let value = serde_json::to_value(&itinerary).expect("serialisable");
    assert_eq!(value["duration"], serde_json::json!(2));
    assert_eq!(value["region_id"], serde_json::json!(SAMPLE_REGION_ID));
    assert!(value["travel_time_to_dest"].as_u64().is_some_and(|minutes| minutes > 0));
}

//! Test helpers for laying out plan command inputs on disk.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use tempfile::TempDir;
use tripweave_core::test_support::{SAMPLE_CITY_ID, SAMPLE_REGION_ID, sample_places};
use tripweave_core::{Coordinates, PlanRequest};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn sample_request(days: u64) -> PlanRequest {
    let start = NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date");
    PlanRequest {
        region_id: SAMPLE_REGION_ID,
        city_id: SAMPLE_CITY_ID,
        start_date: start,
        end_date: start
            .checked_add_days(chrono::Days::new(days - 1))
            .expect("valid date"),
        party_size: 2,
        current: Coordinates::new(126.97, 37.55),
    }
}

/// Request, places and liked-id files in a temporary directory.
pub(super) struct PlanInputs {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) request: Utf8PathBuf,
    pub(super) places: Utf8PathBuf,
    pub(super) liked: Utf8PathBuf,
}

impl PlanInputs {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let inputs = Self {
            request: root.join("request.json"),
            places: root.join("places.json"),
            liked: root.join("liked.json"),
            root,
            _dir: dir,
        };
        inputs.write_request(&sample_request(2));
        let places = serde_json::to_vec(&sample_places()).expect("serialise places");
        write_utf8(&inputs.places, &places);
        write_utf8(&inputs.liked, b"[3, 7]");
        inputs
    }

    pub(super) fn write_request(&self, request: &PlanRequest) {
        let payload = serde_json::to_vec_pretty(request).expect("serialise request");
        write_utf8(&self.request, &payload);
    }
}

//! Weekly closure checks.
//!
//! Closure patterns are free text written with Korean day names, e.g.
//! `"매주 월요일"` or `"화, 수"`. A place is closed on a date when the
//! single-character token for that weekday appears anywhere in the
//! pattern. Public holidays and seasonal hours are not modelled.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::Place;

/// Day tokens indexed from Monday.
pub const WEEKDAY_TOKENS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Token used for `weekday` in closure patterns.
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use tripweave_core::availability::weekday_token;
///
/// assert_eq!(weekday_token(Weekday::Mon), "월");
/// assert_eq!(weekday_token(Weekday::Sun), "일");
/// ```
#[must_use]
pub const fn weekday_token(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => WEEKDAY_TOKENS[0],
        Weekday::Tue => WEEKDAY_TOKENS[1],
        Weekday::Wed => WEEKDAY_TOKENS[2],
        Weekday::Thu => WEEKDAY_TOKENS[3],
        Weekday::Fri => WEEKDAY_TOKENS[4],
        Weekday::Sat => WEEKDAY_TOKENS[5],
        Weekday::Sun => WEEKDAY_TOKENS[6],
    }
}

/// Report whether `pattern` marks `date` as a closing day.
///
/// An empty or blank pattern never closes.
#[must_use]
pub fn closed_on(pattern: &str, date: NaiveDate) -> bool {
    let trimmed = pattern.trim();
    !trimmed.is_empty() && trimmed.contains(weekday_token(date.weekday()))
}

/// Report whether `place` is open on `date`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tripweave_core::{Coordinates, Place, is_open};
///
/// let museum = Place::new(1, Coordinates::new(127.0, 37.5), None)
///     .with_rest_date("매주 월요일");
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date");
/// let tuesday = monday.succ_opt().expect("valid date");
/// assert!(!is_open(&museum, monday));
/// assert!(is_open(&museum, tuesday));
/// ```
#[must_use]
pub fn is_open(place: &Place, date: NaiveDate) -> bool {
    !closed_on(&place.rest_date, date)
}

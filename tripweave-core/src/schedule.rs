//! Day-by-day schedule construction.
//!
//! Each day threads a simulated clock and the traveller's current place
//! through fixed slots: a morning at the day's anchor (plus an optional
//! second stop), lunch, up to two afternoon attractions, dinner, and the
//! walk back to the lodging. Slots without a suitable candidate are simply
//! left out.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use log::debug;
use rand::Rng;

use crate::nearby::{Search, find_nearby};
use crate::{DayPlan, LodgingStatus, Place, PlanningContext, ScheduleItem};

/// Fixed inputs shared by every day of one trip.
#[derive(Debug, Clone, Copy)]
pub struct TripFrame<'p> {
    /// Date of the first day.
    pub start_date: NaiveDate,
    /// Requested number of days.
    pub duration: usize,
    /// Minutes from the traveller's position to the first anchor.
    pub initial_travel_minutes: u32,
    /// Lodging for the whole trip, if any.
    pub accommodation: Option<&'p Place>,
}

/// Build one [`DayPlan`] per anchor.
///
/// Days run in anchor order, so a trip with fewer anchors than requested
/// days yields a shorter plan. Every attraction visited is added to the
/// context's used set.
pub fn build_schedule<R: Rng + ?Sized>(
    ctx: &mut PlanningContext<'_, R>,
    anchors: &[Place],
    frame: TripFrame<'_>,
) -> Vec<DayPlan> {
    let mut days = Vec::with_capacity(anchors.len());
    for (index, anchor) in anchors.iter().enumerate() {
        let offset = u64::try_from(index).unwrap_or(u64::MAX);
        let Some(date) = frame.start_date.checked_add_days(Days::new(offset)) else {
            break;
        };
        let plan = DayState::open(ctx, anchor, date, index, frame).run(ctx, anchor, frame);
        debug!("day {} planned with {} item(s)", plan.day, plan.items.len());
        days.push(plan);
    }
    days
}

struct DayState {
    index: usize,
    date: NaiveDate,
    clock: NaiveDateTime,
    current: Place,
    previous: Option<Place>,
    items: Vec<ScheduleItem>,
}

impl DayState {
    /// Place the traveller at the start of the day.
    fn open<R: Rng + ?Sized>(
        ctx: &PlanningContext<'_, R>,
        anchor: &Place,
        date: NaiveDate,
        index: usize,
        frame: TripFrame<'_>,
    ) -> Self {
        let mut state = Self {
            index,
            date,
            clock: date.and_time(ctx.config.day.day_start),
            current: anchor.clone(),
            previous: None,
            items: Vec::new(),
        };
        if index == 0 {
            state.advance(frame.initial_travel_minutes);
        } else if let Some(stay) = frame.accommodation {
            state.current = stay.clone();
            state.items.push(ScheduleItem::lodging(stay, state.clock, LodgingStatus::Start));
            state.advance(ctx.config.speeds.minutes_between(stay.location, anchor.location));
        }
        state
    }

    fn run<R: Rng + ?Sized>(
        mut self,
        ctx: &mut PlanningContext<'_, R>,
        anchor: &Place,
        frame: TripFrame<'_>,
    ) -> DayPlan {
        self.morning(ctx, anchor);
        self.lunch(ctx);
        let final_day = self.index.saturating_add(1) == frame.duration;
        if !(final_day && frame.duration > 1) {
            self.afternoon(ctx);
            self.dinner(ctx);
            if let Some(stay) = frame.accommodation {
                self.head_home(ctx, stay);
            }
        }
        DayPlan {
            day: self.index.saturating_add(1),
            date: self.date,
            items: self.items,
        }
    }

    fn morning<R: Rng + ?Sized>(&mut self, ctx: &mut PlanningContext<'_, R>, anchor: &Place) {
        let config = ctx.config;
        let cutoff = self.at(config.day.morning_cutoff);
        if self.clock >= cutoff {
            return;
        }
        self.items.push(ScheduleItem::spot(anchor, self.clock));
        self.advance(config.day.anchor_dwell_minutes);
        self.current = anchor.clone();
        self.previous = Some(anchor.clone());
        if self.clock >= cutoff {
            return;
        }

        let search = Search::Attraction {
            previous: self.previous.as_ref(),
        };
        let Some(extra) = find_nearby(ctx, &self.current, search, self.date) else {
            return;
        };
        let dwell = config.day.morning_extra_dwell_minutes;
        let travel = config.speeds.minutes_between(self.current.location, extra.location);
        let finish = add_minutes(self.clock, travel.saturating_add(dwell));
        if finish > self.at(config.day.morning_extra_deadline) {
            debug!("dropping morning stop {}: would end at {finish}", extra.id);
            return;
        }
        self.advance(travel);
        self.visit(ctx, extra, dwell);
    }

    fn lunch<R: Rng + ?Sized>(&mut self, ctx: &mut PlanningContext<'_, R>) {
        let config = ctx.config;
        if self.clock >= self.at(config.day.lunch_cutoff) {
            return;
        }
        self.eat(ctx, config.day.lunch_earliest, true);
    }

    fn afternoon<R: Rng + ?Sized>(&mut self, ctx: &mut PlanningContext<'_, R>) {
        let config = ctx.config;
        for _ in 0..config.day.afternoon_spots {
            if self.clock.hour() >= config.day.afternoon_end_hour {
                break;
            }
            let search = Search::Attraction {
                previous: self.previous.as_ref(),
            };
            let Some(spot) = find_nearby(ctx, &self.current, search, self.date) else {
                continue;
            };
            self.advance(config.speeds.minutes_between(self.current.location, spot.location));
            self.visit(ctx, spot, config.day.afternoon_dwell_minutes);
        }
    }

    fn dinner<R: Rng + ?Sized>(&mut self, ctx: &mut PlanningContext<'_, R>) {
        let config = ctx.config;
        self.eat(ctx, config.day.dinner_earliest, false);
    }

    fn head_home<R: Rng + ?Sized>(&mut self, ctx: &PlanningContext<'_, R>, stay: &Place) {
        let travel = ctx.config.speeds.minutes_between(self.current.location, stay.location);
        let arrival = add_minutes(self.clock, travel);
        let status = if self.index == 0 {
            LodgingStatus::CheckIn
        } else {
            LodgingStatus::Return
        };
        self.items.push(ScheduleItem::lodging(stay, arrival, status));
    }

    /// Record an attraction visit at the current clock and stay `dwell` minutes.
    fn visit<R: Rng + ?Sized>(&mut self, ctx: &mut PlanningContext<'_, R>, spot: Place, dwell: u32) {
        self.items.push(ScheduleItem::spot(&spot, self.clock));
        ctx.used.insert(spot.id);
        self.previous = Some(spot.clone());
        self.current = spot;
        self.advance(dwell);
    }

    /// Find a restaurant and serve the meal no earlier than `earliest`.
    fn eat<R: Rng + ?Sized>(
        &mut self,
        ctx: &mut PlanningContext<'_, R>,
        earliest: NaiveTime,
        track_variety: bool,
    ) {
        let config = ctx.config;
        let Some(restaurant) = find_nearby(ctx, &self.current, Search::Meal, self.date) else {
            return;
        };
        let travel = config.speeds.minutes_between(self.current.location, restaurant.location);
        let served = add_minutes(self.clock, travel).max(self.at(earliest));
        self.items.push(ScheduleItem::meal(&restaurant, served));
        self.clock = add_minutes(served, config.day.meal_dwell_minutes);
        if track_variety {
            self.previous = Some(restaurant.clone());
        }
        self.current = restaurant;
    }

    /// `time` on the clock's current date.
    const fn at(&self, time: NaiveTime) -> NaiveDateTime {
        self.clock.date().and_time(time)
    }

    fn advance(&mut self, minutes: u32) {
        self.clock = add_minutes(self.clock, minutes);
    }
}

fn add_minutes(at: NaiveDateTime, minutes: u32) -> NaiveDateTime {
    at.checked_add_signed(TimeDelta::minutes(i64::from(minutes)))
        .unwrap_or(NaiveDateTime::MAX)
}

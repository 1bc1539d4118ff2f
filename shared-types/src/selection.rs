//! Date, time, duration and player selection for a single booking surface.
//!
//! A [`BookingSelection`] is created when the booking modal opens and
//! dropped (or [`reset`](BookingSelection::reset)) when it closes. The
//! submit affordance is enabled only while [`BookingSelection::can_submit`]
//! holds, which is exactly the [`SelectionState::Ready`] state.

use crate::money::{Money, SERVICE_FEE};
use crate::schedule::{DateOption, TimeSlot};
use crate::venue::VenueDescriptor;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const DURATION_CHOICES: [u8; 3] = [1, 2, 3];
pub const PLAYER_CHOICES: RangeInclusive<u8> = 1..=8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("date {0} is not available for booking")]
    UnavailableDate(NaiveDate),
    #[error("duration must be 1, 2 or 3 hours, got {0}")]
    InvalidDuration(u8),
    #[error("player count must be between 1 and 8, got {0}")]
    InvalidPlayerCount(u8),
    #[error("time slot {0} is not offered")]
    UnofferedTime(TimeSlot),
    #[error("a date and a time slot must be selected before booking")]
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    DatePicked,
    Ready,
}

/// Fields change only through the validating setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSelection {
    selected_date: Option<NaiveDate>,
    selected_time: Option<TimeSlot>,
    duration_hours: u8,
    player_count: u8,
}

impl Default for BookingSelection {
    fn default() -> Self {
        Self {
            selected_date: None,
            selected_time: None,
            duration_hours: 1,
            player_count: 1,
        }
    }
}

impl BookingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.selected_time
    }

    pub fn duration_hours(&self) -> u8 {
        self.duration_hours
    }

    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    pub fn is_date_selected(&self, option: &DateOption) -> bool {
        self.selected_date == Some(option.date)
    }

    pub fn is_time_selected(&self, slot: TimeSlot) -> bool {
        self.selected_time == Some(slot)
    }

    /// Rejects unavailable dates without touching the current selection.
    pub fn pick_date(&mut self, option: &DateOption) -> Result<(), SelectionError> {
        if !option.available {
            return Err(SelectionError::UnavailableDate(option.date));
        }
        self.selected_date = Some(option.date);
        Ok(())
    }

    pub fn pick_time(&mut self, slot: TimeSlot) {
        self.selected_time = Some(slot);
    }

    pub fn set_duration(&mut self, hours: u8) -> Result<(), SelectionError> {
        if !DURATION_CHOICES.contains(&hours) {
            return Err(SelectionError::InvalidDuration(hours));
        }
        self.duration_hours = hours;
        Ok(())
    }

    pub fn set_player_count(&mut self, count: u8) -> Result<(), SelectionError> {
        if !PLAYER_CHOICES.contains(&count) {
            return Err(SelectionError::InvalidPlayerCount(count));
        }
        self.player_count = count;
        Ok(())
    }

    // A time picked before any date still counts as Idle.
    pub fn state(&self) -> SelectionState {
        match (self.selected_date, self.selected_time) {
            (Some(_), Some(_)) => SelectionState::Ready,
            (Some(_), None) => SelectionState::DatePicked,
            (None, _) => SelectionState::Idle,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state() == SelectionState::Ready
    }

    pub fn compute_total(&self, hourly_price: Money) -> Money {
        hourly_price.times(u32::from(self.duration_hours)) + SERVICE_FEE
    }

    pub fn quote(&self, hourly_price: Money) -> PriceQuote {
        let rental = hourly_price.times(u32::from(self.duration_hours));
        PriceQuote {
            hourly: hourly_price,
            hours: self.duration_hours,
            rental,
            service_fee: SERVICE_FEE,
            total: self.compute_total(hourly_price),
        }
    }

    /// Snapshot handed to the submission target. Only available once Ready.
    pub fn to_request(&self, venue: &VenueDescriptor) -> Result<BookingRequest, SelectionError> {
        match (self.selected_date, self.selected_time) {
            (Some(date), Some(time)) => Ok(BookingRequest {
                venue_name: venue.name.clone(),
                sport: venue.sport_tag.clone(),
                date,
                time,
                duration_hours: self.duration_hours,
                players: self.player_count,
                total: self.compute_total(venue.hourly_price),
            }),
            _ => Err(SelectionError::Incomplete),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Line items for the booking summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub hourly: Money,
    pub hours: u8,
    pub rental: Money,
    pub service_fee: Money,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub venue_name: String,
    pub sport: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub duration_hours: u8,
    pub players: u8,
    pub total: Money,
}

impl BookingRequest {
    /// Re-checks the duration and player domains on a request that crossed
    /// the wire.
    pub fn validate(&self) -> Result<(), SelectionError> {
        if !DURATION_CHOICES.contains(&self.duration_hours) {
            return Err(SelectionError::InvalidDuration(self.duration_hours));
        }
        if !PLAYER_CHOICES.contains(&self.players) {
            return Err(SelectionError::InvalidPlayerCount(self.players));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{default_time_slots, upcoming_dates};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn dates() -> Vec<DateOption> {
        upcoming_dates(day(15), 5, &[day(18)])
    }

    fn slot(hour: u32) -> TimeSlot {
        TimeSlot::at(hour).unwrap()
    }

    fn descriptor() -> VenueDescriptor {
        VenueDescriptor {
            name: "Elite Sports Complex".to_string(),
            image_ref: "/assets/padel-court.jpg".to_string(),
            location: "Downtown Sports District".to_string(),
            hourly_price: Money::from_units(35),
            sport_tag: "Padel".to_string(),
        }
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Date(usize),
        Time(u32),
        Duration(u8),
        Players(u8),
        Reset,
    }

    fn apply(sel: &mut BookingSelection, op: Op, dates: &[DateOption]) {
        match op {
            Op::Date(i) => {
                let _ = sel.pick_date(&dates[i]);
            }
            Op::Time(h) => sel.pick_time(slot(h)),
            Op::Duration(h) => {
                let _ = sel.set_duration(h);
            }
            Op::Players(n) => {
                let _ = sel.set_player_count(n);
            }
            Op::Reset => sel.reset(),
        }
    }

    #[test]
    fn starts_idle_with_defaults() {
        let sel = BookingSelection::new();
        assert_eq!(sel.state(), SelectionState::Idle);
        assert_eq!(sel.selected_date(), None);
        assert_eq!(sel.selected_time(), None);
        assert_eq!(sel.duration_hours(), 1);
        assert_eq!(sel.player_count(), 1);
        assert!(!sel.can_submit());
    }

    #[test]
    fn unavailable_date_is_rejected_without_changing_state() {
        let dates = dates();
        let blocked = dates.iter().find(|d| !d.available).unwrap();

        let mut sel = BookingSelection::new();
        assert_eq!(sel.pick_date(blocked), Err(SelectionError::UnavailableDate(day(18))));
        assert_eq!(sel, BookingSelection::new());

        sel.pick_date(&dates[0]).unwrap();
        sel.pick_time(slot(10));
        let before = sel.clone();
        assert!(sel.pick_date(blocked).is_err());
        assert_eq!(sel, before);
        assert_eq!(sel.selected_date(), Some(day(15)));
    }

    #[test]
    fn rejected_inputs_never_produce_a_submittable_selection() {
        let dates = dates();
        let blocked = dates.iter().find(|d| !d.available).unwrap();

        let mut sel = BookingSelection::new();
        assert!(sel.pick_date(blocked).is_err());
        sel.pick_time(slot(10));
        assert!(sel.set_duration(0).is_err());
        assert!(sel.set_player_count(200).is_err());

        assert_eq!(sel.selected_date(), None);
        assert_eq!(sel.duration_hours(), 1);
        assert_eq!(sel.player_count(), 1);
        assert!(!sel.can_submit());
        assert_eq!(sel.compute_total(Money::from_units(35)), Money::from_cents(3_799));
        assert_eq!(sel.to_request(&descriptor()), Err(SelectionError::Incomplete));
    }

    #[test]
    fn state_follows_date_then_time() {
        let dates = dates();
        let mut sel = BookingSelection::new();

        sel.pick_date(&dates[1]).unwrap();
        assert_eq!(sel.state(), SelectionState::DatePicked);

        sel.pick_time(slot(18));
        assert_eq!(sel.state(), SelectionState::Ready);

        // Re-picking a date keeps the chosen time.
        sel.pick_date(&dates[2]).unwrap();
        assert_eq!(sel.state(), SelectionState::Ready);
        assert_eq!(sel.selected_time(), Some(slot(18)));
    }

    #[test]
    fn time_before_date_stays_idle_until_date_is_picked() {
        let dates = dates();
        let mut sel = BookingSelection::new();
        sel.pick_time(slot(9));
        assert_eq!(sel.state(), SelectionState::Idle);
        assert!(!sel.can_submit());
        sel.pick_date(&dates[0]).unwrap();
        assert!(sel.can_submit());
    }

    #[test]
    fn duration_and_players_do_not_change_state() {
        let dates = dates();
        let mut sel = BookingSelection::new();
        sel.pick_date(&dates[0]).unwrap();

        sel.set_duration(3).unwrap();
        sel.set_player_count(8).unwrap();
        assert_eq!(sel.state(), SelectionState::DatePicked);
        assert_eq!(sel.duration_hours(), 3);
        assert_eq!(sel.player_count(), 8);
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        let mut sel = BookingSelection::new();
        for bad in [0u8, 4, 12, u8::MAX] {
            assert_eq!(sel.set_duration(bad), Err(SelectionError::InvalidDuration(bad)));
        }
        for bad in [0u8, 9, 100] {
            assert_eq!(sel.set_player_count(bad), Err(SelectionError::InvalidPlayerCount(bad)));
        }
        assert_eq!(sel, BookingSelection::new());

        for hours in DURATION_CHOICES {
            assert!(sel.set_duration(hours).is_ok());
        }
        for count in PLAYER_CHOICES {
            assert!(sel.set_player_count(count).is_ok());
        }
    }

    #[test]
    fn can_submit_iff_date_and_time_for_all_short_sequences() {
        let dates = dates();
        let ops = [
            Op::Date(0),
            Op::Date(3),
            Op::Date(4),
            Op::Time(9),
            Op::Time(20),
            Op::Duration(2),
            Op::Duration(7),
            Op::Players(4),
            Op::Players(0),
            Op::Reset,
        ];

        // Every sequence of up to four operations.
        let mut frontier: Vec<Vec<Op>> = vec![vec![]];
        let mut sequences = Vec::new();
        for _ in 0..4 {
            frontier = frontier
                .iter()
                .flat_map(|seq| {
                    ops.iter().map(move |op| {
                        let mut next = seq.clone();
                        next.push(*op);
                        next
                    })
                })
                .collect();
            sequences.extend(frontier.iter().cloned());
        }

        for seq in &sequences {
            let mut sel = BookingSelection::new();
            for op in seq {
                apply(&mut sel, *op, &dates);
                let both = sel.selected_date().is_some() && sel.selected_time().is_some();
                assert_eq!(sel.can_submit(), both, "sequence {:?}", seq);
                if let Some(date) = sel.selected_date() {
                    assert!(dates.iter().any(|d| d.date == date && d.available));
                }
            }
        }
    }

    #[test]
    fn total_is_non_decreasing_in_duration() {
        for units in [0u64, 1, 28, 35, 45, 10_000] {
            let price = Money::from_units(units);
            let mut sel = BookingSelection::new();
            let mut previous = Money::ZERO;
            for hours in DURATION_CHOICES {
                sel.set_duration(hours).unwrap();
                let total = sel.compute_total(price);
                assert!(total >= previous);
                previous = total;
            }
        }
    }

    #[test]
    fn picking_same_date_twice_is_idempotent() {
        let dates = dates();
        let mut once = BookingSelection::new();
        once.pick_date(&dates[2]).unwrap();

        let mut twice = BookingSelection::new();
        twice.pick_date(&dates[2]).unwrap();
        twice.pick_date(&dates[2]).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let dates = dates();
        let mut sel = BookingSelection::new();
        sel.pick_date(&dates[4]).unwrap();
        sel.pick_time(slot(15));
        sel.set_duration(2).unwrap();
        sel.set_player_count(6).unwrap();

        sel.reset();
        assert_eq!(sel.selected_date(), None);
        assert_eq!(sel.selected_time(), None);
        assert_eq!(sel.duration_hours(), 1);
        assert_eq!(sel.player_count(), 1);
        assert_eq!(sel.state(), SelectionState::Idle);
    }

    #[test]
    fn two_hours_at_thirty_five_costs_seventy_two_ninety_nine() {
        let dates = dates();
        let mut sel = BookingSelection::new();
        sel.set_duration(2).unwrap();
        assert_eq!(sel.compute_total(Money::from_units(35)), Money::from_cents(7299));
        assert_eq!(sel.compute_total(Money::from_units(35)).to_string(), "$72.99");

        assert!(sel.pick_date(&dates[3]).is_err());
        assert!(!sel.can_submit());

        sel.pick_date(&dates[0]).unwrap();
        sel.pick_time(default_time_slots()[0]);
        assert!(sel.can_submit());
    }

    #[test]
    fn quote_breaks_down_the_total() {
        let mut sel = BookingSelection::new();
        sel.set_duration(3).unwrap();
        let quote = sel.quote(Money::from_units(45));
        assert_eq!(quote.hours, 3);
        assert_eq!(quote.rental, Money::from_units(135));
        assert_eq!(quote.service_fee, SERVICE_FEE);
        assert_eq!(quote.total, Money::from_cents(13_799));
        assert_eq!(quote.total, quote.rental + quote.service_fee);
    }

    #[test]
    fn request_requires_ready_state() {
        let dates = dates();
        let venue = descriptor();
        let mut sel = BookingSelection::new();
        assert_eq!(sel.to_request(&venue), Err(SelectionError::Incomplete));

        sel.pick_date(&dates[1]).unwrap();
        assert_eq!(sel.to_request(&venue), Err(SelectionError::Incomplete));

        sel.pick_time(slot(19));
        sel.set_player_count(4).unwrap();
        let request = sel.to_request(&venue).unwrap();
        assert_eq!(request.venue_name, "Elite Sports Complex");
        assert_eq!(request.date, day(16));
        assert_eq!(request.time.label(), "19:00");
        assert_eq!(request.players, 4);
        assert_eq!(request.total, Money::from_cents(3799));
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn tampered_request_fails_validation() {
        let dates = dates();
        let mut sel = BookingSelection::new();
        sel.pick_date(&dates[0]).unwrap();
        sel.pick_time(slot(12));
        let request = sel.to_request(&descriptor()).unwrap();

        let long = BookingRequest { duration_hours: 5, ..request.clone() };
        assert_eq!(long.validate(), Err(SelectionError::InvalidDuration(5)));

        let crowded = BookingRequest { players: 0, ..request };
        assert_eq!(crowded.validate(), Err(SelectionError::InvalidPlayerCount(0)));
    }
}

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A bookable day with its availability flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOption {
    pub date: NaiveDate,
    pub label: String,
    pub available: bool,
}

impl DateOption {
    pub fn new(date: NaiveDate, label: impl Into<String>, available: bool) -> Self {
        Self {
            date,
            label: label.into(),
            available,
        }
    }

    /// Builds an option whose label is derived relative to `today`.
    pub fn relative_to(date: NaiveDate, today: NaiveDate, available: bool) -> Self {
        Self::new(date, relative_label(date, today), available)
    }

    /// Day of month as shown under the label, e.g. `"15"`.
    pub fn day_of_month(&self) -> String {
        format!("{:02}", self.date.day())
    }
}

/// `count` consecutive days starting at `today`; days listed in
/// `unavailable` are flagged as not bookable.
pub fn upcoming_dates(today: NaiveDate, count: usize, unavailable: &[NaiveDate]) -> Vec<DateOption> {
    (0..count)
        .map(|offset| {
            let date = today + Duration::days(offset as i64);
            DateOption::relative_to(date, today, !unavailable.contains(&date))
        })
        .collect()
}

pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => short_weekday(date.weekday()).to_string(),
    }
}

fn short_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// A start-of-hour slot label such as `09:00`.
///
/// Slots carry no availability flag; every listed slot can be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    pub fn at(hour: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, 0, 0).map(TimeSlot)
    }

    pub fn parse(label: &str) -> Option<Self> {
        NaiveTime::parse_from_str(label.trim(), "%H:%M")
            .ok()
            .map(TimeSlot)
    }

    /// Hourly slots from `first` to `last` inclusive.
    pub fn hourly(first: u32, last: u32) -> Vec<Self> {
        (first..=last).filter_map(TimeSlot::at).collect()
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn label(&self) -> String {
        self.0.format("%H:%M").to_string()
    }
}

/// The default opening hours, 09:00 through 20:00.
pub fn default_time_slots() -> Vec<TimeSlot> {
    TimeSlot::hourly(9, 20)
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeSlot::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time slot '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_slots_cover_opening_hours() {
        let slots = default_time_slots();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots.first().unwrap().label(), "09:00");
        assert_eq!(slots.last().unwrap().label(), "20:00");
        assert!(slots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn labels_are_relative_to_today() {
        let today = day(2024, 1, 15);
        assert_eq!(relative_label(today, today), "Today");
        assert_eq!(relative_label(day(2024, 1, 16), today), "Tomorrow");
        assert_eq!(relative_label(day(2024, 1, 17), today), "Wed");
        assert_eq!(relative_label(day(2024, 1, 19), today), "Fri");
    }

    #[test]
    fn upcoming_dates_flags_unavailable_days() {
        let today = day(2024, 1, 15);
        let dates = upcoming_dates(today, 5, &[day(2024, 1, 18)]);
        assert_eq!(dates.len(), 5);
        let flags: Vec<bool> = dates.iter().map(|d| d.available).collect();
        assert_eq!(flags, vec![true, true, true, false, true]);
        assert_eq!(dates[3].label, "Thu");
        assert_eq!(dates[4].day_of_month(), "19");
    }

    #[test]
    fn time_slot_parses_and_serializes_as_label() {
        let slot = TimeSlot::parse("18:00").unwrap();
        assert_eq!(slot.hour(), 18);
        assert_eq!(serde_json::to_string(&slot).unwrap(), "\"18:00\"");
        let back: TimeSlot = serde_json::from_str("\"09:00\"").unwrap();
        assert_eq!(back, TimeSlot::at(9).unwrap());
        assert!(serde_json::from_str::<TimeSlot>("\"nine\"").is_err());
        assert!(TimeSlot::at(24).is_none());
    }
}

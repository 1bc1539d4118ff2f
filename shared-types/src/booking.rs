use crate::money::Money;
use crate::venue::Sport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "badge badge--primary",
            BookingStatus::Pending => "badge badge--accent",
            BookingStatus::Completed => "badge badge--muted",
            BookingStatus::Cancelled => "badge badge--destructive",
        }
    }

    pub fn is_upcoming(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Pending)
    }
}

/// A booking as listed on the bookings and profile pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub venue: String,
    pub image: String,
    pub sport: Sport,
    pub date_label: String,
    pub time_label: String,
    pub location: String,
    pub price: Money,
    pub status: BookingStatus,
    pub players: u8,
    #[serde(default)]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Reschedule,
    Cancel,
    Rate,
}

impl BookingAction {
    pub fn label(&self) -> &'static str {
        match self {
            BookingAction::Reschedule => "Reschedule",
            BookingAction::Cancel => "Cancel",
            BookingAction::Rate => "Rate",
        }
    }
}

impl BookingRecord {
    pub fn actions(&self) -> Vec<BookingAction> {
        match self.status {
            BookingStatus::Confirmed => vec![BookingAction::Reschedule, BookingAction::Cancel],
            BookingStatus::Completed if self.rating.is_none() => vec![BookingAction::Rate],
            _ => vec![],
        }
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || [self.venue.as_str(), self.sport.name(), self.location.as_str()]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

pub fn upcoming<'a>(bookings: &'a [BookingRecord], query: &str) -> Vec<&'a BookingRecord> {
    bookings
        .iter()
        .filter(|b| b.status.is_upcoming() && b.matches_query(query))
        .collect()
}

pub fn past<'a>(bookings: &'a [BookingRecord], query: &str) -> Vec<&'a BookingRecord> {
    bookings
        .iter()
        .filter(|b| !b.status.is_upcoming() && b.matches_query(query))
        .collect()
}

/// Summary figures for the "This Month" and profile stat cards.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingStats {
    pub total: usize,
    pub games_played: usize,
    pub total_spent: Money,
    pub sports_played: usize,
    pub average_rating: Option<f32>,
}

impl BookingStats {
    pub fn from_records(bookings: &[BookingRecord]) -> Self {
        let completed: Vec<&BookingRecord> = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .collect();
        let ratings: Vec<u8> = bookings.iter().filter_map(|b| b.rating).collect();
        let sports: BTreeSet<Sport> = bookings.iter().map(|b| b.sport).collect();

        let average_rating = if ratings.is_empty() {
            None
        } else {
            let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
            Some(sum as f32 / ratings.len() as f32)
        };

        Self {
            total: bookings.len(),
            games_played: completed.len(),
            total_spent: completed.iter().map(|b| b.price).sum(),
            sports_played: sports.len(),
            average_rating,
        }
    }

    pub fn average_rating_label(&self) -> String {
        self.average_rating
            .map(|avg| format!("{:.1}", avg))
            .unwrap_or_else(|| "–".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn record(status: BookingStatus, rating: Option<u8>) -> BookingRecord {
        BookingRecord {
            id: "x".to_string(),
            venue: "Metro Basketball Arena".to_string(),
            image: String::new(),
            sport: Sport::Basketball,
            date_label: "Jan 15, 2024".to_string(),
            time_label: "7:30 PM - 8:30 PM".to_string(),
            location: "Gulshan-e-Iqbal, Karachi".to_string(),
            price: Money::from_units(2800),
            status,
            players: 3,
            rating,
        }
    }

    #[test]
    fn actions_depend_on_status_and_rating() {
        assert_eq!(
            record(BookingStatus::Confirmed, None).actions(),
            vec![BookingAction::Reschedule, BookingAction::Cancel]
        );
        assert!(record(BookingStatus::Pending, None).actions().is_empty());
        assert_eq!(record(BookingStatus::Completed, None).actions(), vec![BookingAction::Rate]);
        assert!(record(BookingStatus::Completed, Some(5)).actions().is_empty());
        assert!(record(BookingStatus::Cancelled, None).actions().is_empty());
    }

    #[test]
    fn demo_bookings_split_into_upcoming_and_past() {
        let catalog = Catalog::demo();
        let up = upcoming(&catalog.bookings, "");
        let done = past(&catalog.bookings, "");
        assert_eq!(up.len(), 2);
        assert_eq!(done.len(), 2);
        assert!(up.iter().all(|b| b.status.is_upcoming()));
        assert_eq!(up.len() + done.len(), catalog.bookings.len());
    }

    #[test]
    fn search_matches_venue_sport_and_location() {
        let catalog = Catalog::demo();
        assert_eq!(upcoming(&catalog.bookings, "football").len(), 1);
        assert_eq!(past(&catalog.bookings, "DHA").len(), 1);
        assert!(upcoming(&catalog.bookings, "tennis").is_empty());
        assert!(record(BookingStatus::Pending, None).matches_query("   "));
    }

    #[test]
    fn stats_summarise_completed_games() {
        let records = vec![
            record(BookingStatus::Completed, Some(5)),
            record(BookingStatus::Completed, Some(4)),
            record(BookingStatus::Confirmed, None),
        ];
        let stats = BookingStats::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.total_spent, Money::from_units(5600));
        assert_eq!(stats.sports_played, 1);
        assert_eq!(stats.average_rating_label(), "4.5");

        let none = BookingStats::from_records(&[]);
        assert_eq!(none.average_rating, None);
        assert_eq!(none.total_spent, Money::ZERO);
    }
}

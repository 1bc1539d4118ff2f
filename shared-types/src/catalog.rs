use crate::booking::{BookingRecord, BookingStatus};
use crate::money::Money;
use crate::schedule::{default_time_slots, upcoming_dates, DateOption, TimeSlot};
use crate::selection::{BookingRequest, SelectionError};
use crate::tournament::{Difficulty, Tournament, TournamentRegistration, TournamentStatus};
use crate::venue::{Amenity, Sport, Venue, VenueAvailability};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no bookable dates")]
    NoDates,
    #[error("catalog has no time slots")]
    NoTimeSlots,
    #[error("date {0} is listed more than once")]
    DuplicateDate(NaiveDate),
}

/// Every piece of listing data the pages render.
///
/// The booking modal reads `dates` and `time_slots` from here rather than
/// from literals, so a deployment can swap the whole dataset by pointing
/// `GAMEON_CATALOG` at a JSON file with this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub reference_date: NaiveDate,
    pub dates: Vec<DateOption>,
    #[serde(default = "default_time_slots")]
    pub time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub registrations: Vec<TournamentRegistration>,
}

impl Catalog {
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.dates.is_empty() {
            return Err(CatalogError::NoDates);
        }
        if self.time_slots.is_empty() {
            return Err(CatalogError::NoTimeSlots);
        }
        let mut seen = HashSet::new();
        for option in &self.dates {
            if !seen.insert(option.date) {
                return Err(CatalogError::DuplicateDate(option.date));
            }
        }
        Ok(())
    }

    /// Checks that a request names an available date and an offered slot.
    pub fn check_offered(&self, request: &BookingRequest) -> Result<(), SelectionError> {
        let date_offered = self
            .dates
            .iter()
            .any(|option| option.date == request.date && option.available);
        if !date_offered {
            return Err(SelectionError::UnavailableDate(request.date));
        }
        if !self.time_slots.iter().any(|slot| *slot == request.time) {
            return Err(SelectionError::UnofferedTime(request.time));
        }
        Ok(())
    }

    pub fn venue(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    /// The bundled sample dataset.
    pub fn demo() -> Self {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
        let thursday = today + chrono::Duration::days(3);

        Self {
            reference_date: today,
            dates: upcoming_dates(today, 5, &[thursday]),
            time_slots: default_time_slots(),
            venues: demo_venues(),
            bookings: demo_bookings(),
            tournaments: demo_tournaments(),
            registrations: demo_registrations(),
        }
    }
}

fn demo_venues() -> Vec<Venue> {
    vec![
        Venue {
            id: "1".to_string(),
            name: "Elite Sports Complex".to_string(),
            image: "/assets/padel-court.jpg".to_string(),
            rating: 4.8,
            reviews: 124,
            location: "Downtown Sports District".to_string(),
            distance_km: 0.8,
            sport: Sport::Padel,
            hourly_price: Money::from_units(35),
            amenities: vec![Amenity::Wifi, Amenity::Parking, Amenity::Lighting],
            availability: VenueAvailability::Available,
        },
        Venue {
            id: "2".to_string(),
            name: "Champions Football Ground".to_string(),
            image: "/assets/football-field.jpg".to_string(),
            rating: 4.6,
            reviews: 89,
            location: "Riverside Park".to_string(),
            distance_km: 1.2,
            sport: Sport::Football,
            hourly_price: Money::from_units(45),
            amenities: vec![Amenity::Parking, Amenity::Showers, Amenity::Equipment],
            availability: VenueAvailability::Busy,
        },
        Venue {
            id: "3".to_string(),
            name: "Metro Basketball Arena".to_string(),
            image: "/assets/basketball-court.jpg".to_string(),
            rating: 4.9,
            reviews: 156,
            location: "City Center".to_string(),
            distance_km: 0.5,
            sport: Sport::Basketball,
            hourly_price: Money::from_units(28),
            amenities: vec![Amenity::Wifi, Amenity::Lighting, Amenity::Showers],
            availability: VenueAvailability::Available,
        },
    ]
}

fn demo_bookings() -> Vec<BookingRecord> {
    let record = |id: &str,
                  venue: &str,
                  image: &str,
                  sport: Sport,
                  date: &str,
                  time: &str,
                  location: &str,
                  price: u64,
                  status: BookingStatus,
                  players: u8,
                  rating: Option<u8>| BookingRecord {
        id: id.to_string(),
        venue: venue.to_string(),
        image: image.to_string(),
        sport,
        date_label: date.to_string(),
        time_label: time.to_string(),
        location: location.to_string(),
        price: Money::from_units(price),
        status,
        players,
        rating,
    };

    vec![
        record(
            "1",
            "Elite Sports Complex",
            "/assets/padel-court.jpg",
            Sport::Padel,
            "Today",
            "6:00 PM - 7:00 PM",
            "DHA Phase 5, Karachi",
            3500,
            BookingStatus::Confirmed,
            4,
            None,
        ),
        record(
            "2",
            "Champions Football Ground",
            "/assets/football-field.jpg",
            Sport::Football,
            "Tomorrow",
            "8:00 AM - 9:00 AM",
            "Clifton Beach, Karachi",
            4500,
            BookingStatus::Pending,
            6,
            None,
        ),
        record(
            "3",
            "Metro Basketball Arena",
            "/assets/basketball-court.jpg",
            Sport::Basketball,
            "Jan 15, 2024",
            "7:30 PM - 8:30 PM",
            "Gulshan-e-Iqbal, Karachi",
            2800,
            BookingStatus::Completed,
            3,
            Some(5),
        ),
        record(
            "4",
            "Elite Sports Complex",
            "/assets/padel-court.jpg",
            Sport::Padel,
            "Jan 12, 2024",
            "5:00 PM - 6:00 PM",
            "DHA Phase 5, Karachi",
            3500,
            BookingStatus::Completed,
            4,
            Some(4),
        ),
    ]
}

fn demo_tournaments() -> Vec<Tournament> {
    vec![
        Tournament {
            id: "1".to_string(),
            name: "City Football Championship".to_string(),
            image: "/assets/football-field.jpg".to_string(),
            sport: Sport::Football,
            date_label: "Jan 25-27, 2024".to_string(),
            time_label: "9:00 AM onwards".to_string(),
            location: "Champions Football Ground".to_string(),
            participants: 32,
            max_participants: 32,
            prize: "$2,500".to_string(),
            registration_fee: Money::from_units(25),
            difficulty: Difficulty::Intermediate,
            status: TournamentStatus::Open,
        },
        Tournament {
            id: "2".to_string(),
            name: "Weekend Basketball 3v3".to_string(),
            image: "/assets/basketball-court.jpg".to_string(),
            sport: Sport::Basketball,
            date_label: "Jan 20, 2024".to_string(),
            time_label: "2:00 PM - 8:00 PM".to_string(),
            location: "Metro Basketball Arena".to_string(),
            participants: 18,
            max_participants: 24,
            prize: "$800".to_string(),
            registration_fee: Money::from_units(15),
            difficulty: Difficulty::Beginner,
            status: TournamentStatus::Open,
        },
        Tournament {
            id: "3".to_string(),
            name: "Padel Masters Series".to_string(),
            image: "/assets/padel-court.jpg".to_string(),
            sport: Sport::Padel,
            date_label: "Feb 1-3, 2024".to_string(),
            time_label: "All Day".to_string(),
            location: "Elite Sports Complex".to_string(),
            participants: 28,
            max_participants: 32,
            prize: "$1,200".to_string(),
            registration_fee: Money::from_units(35),
            difficulty: Difficulty::Advanced,
            status: TournamentStatus::FillingFast,
        },
    ]
}

fn demo_registrations() -> Vec<TournamentRegistration> {
    vec![
        TournamentRegistration {
            id: "4".to_string(),
            name: "New Year Basketball Cup".to_string(),
            sport: Sport::Basketball,
            date_label: "Jan 15, 2024".to_string(),
            status: TournamentStatus::Completed,
            position: Some("2nd Place".to_string()),
            prize_won: Some("$200".to_string()),
            registered_on: None,
        },
        TournamentRegistration {
            id: "5".to_string(),
            name: "Winter Football League".to_string(),
            sport: Sport::Football,
            date_label: "Jan 22, 2024".to_string(),
            status: TournamentStatus::Upcoming,
            position: None,
            prize_won: None,
            registered_on: Some("Jan 10, 2024".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_at(date: NaiveDate, hour: u32) -> BookingRequest {
        BookingRequest {
            venue_name: "Elite Sports Complex".to_string(),
            sport: "Padel".to_string(),
            date,
            time: TimeSlot::at(hour).unwrap(),
            duration_hours: 1,
            players: 2,
            total: Money::from_cents(3_799),
        }
    }

    #[test]
    fn offered_requests_need_an_available_date_and_a_listed_slot() {
        let catalog = Catalog::demo();
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();

        assert_eq!(catalog.check_offered(&request_at(day(15), 10)), Ok(()));
        assert_eq!(
            catalog.check_offered(&request_at(day(18), 10)),
            Err(SelectionError::UnavailableDate(day(18)))
        );
        assert_eq!(
            catalog.check_offered(&request_at(day(30), 10)),
            Err(SelectionError::UnavailableDate(day(30)))
        );
        assert_eq!(
            catalog.check_offered(&request_at(day(15), 21)),
            Err(SelectionError::UnofferedTime(TimeSlot::at(21).unwrap()))
        );
    }

    #[test]
    fn demo_catalog_matches_reference_dataset() {
        let catalog = Catalog::demo();
        assert!(catalog.validate().is_ok());

        let labels: Vec<&str> = catalog.dates.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Today", "Tomorrow", "Wed", "Thu", "Fri"]);
        let blocked: Vec<NaiveDate> = catalog
            .dates
            .iter()
            .filter(|d| !d.available)
            .map(|d| d.date)
            .collect();
        assert_eq!(blocked, vec![NaiveDate::from_ymd_opt(2024, 1, 18).unwrap()]);

        assert_eq!(catalog.time_slots.len(), 12);
        let prices: Vec<Money> = catalog.venues.iter().map(|v| v.hourly_price).collect();
        assert_eq!(
            prices,
            vec![Money::from_units(35), Money::from_units(45), Money::from_units(28)]
        );
        assert_eq!(catalog.venue("3").map(|v| v.sport), Some(Sport::Basketball));
        assert!(catalog.venue("99").is_none());
    }

    #[test]
    fn loads_minimal_json_with_default_slots() {
        let raw = r#"{
            "reference_date": "2025-03-01",
            "dates": [
                { "date": "2025-03-01", "label": "Today", "available": true },
                { "date": "2025-03-02", "label": "Tomorrow", "available": false }
            ]
        }"#;
        let catalog = Catalog::from_json_str(raw).unwrap();
        assert_eq!(catalog.dates.len(), 2);
        assert_eq!(catalog.time_slots, default_time_slots());
        assert!(catalog.venues.is_empty());
    }

    #[test]
    fn demo_catalog_survives_json() {
        let catalog = Catalog::demo();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
    }

    #[test]
    fn rejects_invalid_catalogs() {
        let no_dates = r#"{ "reference_date": "2025-03-01", "dates": [] }"#;
        assert!(matches!(Catalog::from_json_str(no_dates), Err(CatalogError::NoDates)));

        let no_slots = r#"{
            "reference_date": "2025-03-01",
            "dates": [{ "date": "2025-03-01", "label": "Today", "available": true }],
            "time_slots": []
        }"#;
        assert!(matches!(Catalog::from_json_str(no_slots), Err(CatalogError::NoTimeSlots)));

        let duplicate = r#"{
            "reference_date": "2025-03-01",
            "dates": [
                { "date": "2025-03-01", "label": "Today", "available": true },
                { "date": "2025-03-01", "label": "Again", "available": true }
            ]
        }"#;
        assert!(matches!(
            Catalog::from_json_str(duplicate),
            Err(CatalogError::DuplicateDate(_))
        ));

        assert!(matches!(Catalog::from_json_str("not json"), Err(CatalogError::Parse(_))));
        assert!(matches!(
            Catalog::load("/definitely/not/here.json"),
            Err(CatalogError::Io { .. })
        ));
    }
}

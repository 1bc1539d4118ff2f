use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sport {
    Football,
    Padel,
    Basketball,
    Tennis,
    Badminton,
    Cricket,
    Futsal,
}

impl Sport {
    pub const ALL: [Sport; 7] = [
        Sport::Football,
        Sport::Padel,
        Sport::Basketball,
        Sport::Tennis,
        Sport::Badminton,
        Sport::Cricket,
        Sport::Futsal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Padel => "Padel",
            Sport::Basketball => "Basketball",
            Sport::Tennis => "Tennis",
            Sport::Badminton => "Badminton",
            Sport::Cricket => "Cricket",
            Sport::Futsal => "Futsal",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Amenity {
    Parking,
    #[serde(rename = "WiFi")]
    Wifi,
    Showers,
    Lighting,
    Equipment,
}

impl Amenity {
    pub const ALL: [Amenity; 5] = [
        Amenity::Parking,
        Amenity::Wifi,
        Amenity::Showers,
        Amenity::Lighting,
        Amenity::Equipment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Amenity::Parking => "Parking",
            Amenity::Wifi => "WiFi",
            Amenity::Showers => "Showers",
            Amenity::Lighting => "Lighting",
            Amenity::Equipment => "Equipment",
        }
    }

    /// Small glyph shown next to the amenity on cards, where one exists.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Amenity::Wifi => Some("📶"),
            Amenity::Parking => Some("🚗"),
            Amenity::Lighting => Some("⚡"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VenueAvailability {
    Available,
    Busy,
    Closed,
}

impl VenueAvailability {
    pub fn label(&self) -> &'static str {
        match self {
            VenueAvailability::Available => "Available",
            VenueAvailability::Busy => "Busy",
            VenueAvailability::Closed => "Closed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            VenueAvailability::Available => "badge badge--primary",
            VenueAvailability::Busy => "badge badge--accent",
            VenueAvailability::Closed => "badge badge--muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    pub distance_km: f32,
    pub sport: Sport,
    pub hourly_price: Money,
    pub amenities: Vec<Amenity>,
    pub availability: VenueAvailability,
}

/// The read-only slice of a venue the booking surface needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDescriptor {
    pub name: String,
    pub image_ref: String,
    pub location: String,
    pub hourly_price: Money,
    pub sport_tag: String,
}

impl Venue {
    pub fn descriptor(&self) -> VenueDescriptor {
        VenueDescriptor {
            name: self.name.clone(),
            image_ref: self.image.clone(),
            location: self.location.clone(),
            hourly_price: self.hourly_price,
            sport_tag: self.sport.name().to_string(),
        }
    }

    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }

    /// First three amenities and how many more are hidden.
    pub fn amenity_preview(&self) -> (&[Amenity], usize) {
        let shown = self.amenities.len().min(3);
        (&self.amenities[..shown], self.amenities.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(amenities: Vec<Amenity>) -> Venue {
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
            amenities,
            availability: VenueAvailability::Available,
        }
    }

    #[test]
    fn descriptor_carries_price_and_sport_tag() {
        let d = venue(vec![]).descriptor();
        assert_eq!(d.name, "Elite Sports Complex");
        assert_eq!(d.hourly_price, Money::from_units(35));
        assert_eq!(d.sport_tag, "Padel");
        assert_eq!(d.image_ref, "/assets/padel-court.jpg");
    }

    #[test]
    fn amenity_preview_caps_at_three() {
        let v = venue(Amenity::ALL.to_vec());
        let (shown, hidden) = v.amenity_preview();
        assert_eq!(shown, &[Amenity::Parking, Amenity::Wifi, Amenity::Showers]);
        assert_eq!(hidden, 2);

        let v = venue(vec![Amenity::Wifi]);
        assert_eq!(v.amenity_preview(), (&[Amenity::Wifi][..], 0));
    }

    #[test]
    fn amenity_names_round_trip_through_json() {
        let json = serde_json::to_string(&Amenity::Wifi).unwrap();
        assert_eq!(json, "\"WiFi\"");
        assert_eq!(venue(vec![]).distance_label(), "0.8 km");
    }
}

use crate::money::Money;
use crate::venue::{Amenity, Sport, Venue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBand {
    #[default]
    Any,
    Under25,
    From25To50,
    From50To100,
    Over100,
}

impl PriceBand {
    pub const ALL: [PriceBand; 5] = [
        PriceBand::Any,
        PriceBand::Under25,
        PriceBand::From25To50,
        PriceBand::From50To100,
        PriceBand::Over100,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Any => "Any Price",
            PriceBand::Under25 => "$0 - $25",
            PriceBand::From25To50 => "$25 - $50",
            PriceBand::From50To100 => "$50 - $100",
            PriceBand::Over100 => "$100+",
        }
    }

    /// Stable key used as the `<select>` option value.
    pub fn key(&self) -> &'static str {
        match self {
            PriceBand::Any => "any",
            PriceBand::Under25 => "0-25",
            PriceBand::From25To50 => "25-50",
            PriceBand::From50To100 => "50-100",
            PriceBand::Over100 => "100+",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.key() == key)
    }

    // Half-open [lo, hi) so adjacent bands never overlap.
    pub fn contains(&self, price: Money) -> bool {
        let (lo, hi) = match self {
            PriceBand::Any => return true,
            PriceBand::Under25 => (0, Some(25)),
            PriceBand::From25To50 => (25, Some(50)),
            PriceBand::From50To100 => (50, Some(100)),
            PriceBand::Over100 => (100, None),
        };
        let cents = price.cents();
        cents >= Money::from_units(lo).cents()
            && hi.map_or(true, |hi| cents < Money::from_units(hi).cents())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceBand {
    #[default]
    Any,
    Within1,
    Within5,
    Within10,
    Within25,
}

impl DistanceBand {
    pub const ALL: [DistanceBand; 5] = [
        DistanceBand::Any,
        DistanceBand::Within1,
        DistanceBand::Within5,
        DistanceBand::Within10,
        DistanceBand::Within25,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DistanceBand::Any => "Any Distance",
            DistanceBand::Within1 => "Within 1 km",
            DistanceBand::Within5 => "Within 5 km",
            DistanceBand::Within10 => "Within 10 km",
            DistanceBand::Within25 => "Within 25 km",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DistanceBand::Any => "any",
            DistanceBand::Within1 => "1",
            DistanceBand::Within5 => "5",
            DistanceBand::Within10 => "10",
            DistanceBand::Within25 => "25",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.key() == key)
    }

    pub fn max_km(&self) -> Option<f32> {
        match self {
            DistanceBand::Any => None,
            DistanceBand::Within1 => Some(1.0),
            DistanceBand::Within5 => Some(5.0),
            DistanceBand::Within10 => Some(10.0),
            DistanceBand::Within25 => Some(25.0),
        }
    }
}

/// Search and filter state behind the discovery panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueFilter {
    pub query: String,
    sports: Vec<Sport>,
    pub price: PriceBand,
    pub distance: DistanceBand,
    amenities: Vec<Amenity>,
    expanded: bool,
}

impl VenueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_sports(&self) -> &[Sport] {
        &self.sports
    }

    pub fn selected_amenities(&self) -> &[Amenity] {
        &self.amenities
    }

    pub fn is_sport_selected(&self, sport: Sport) -> bool {
        self.sports.contains(&sport)
    }

    pub fn is_amenity_selected(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }

    pub fn toggle_sport(&mut self, sport: Sport) {
        toggle(&mut self.sports, sport);
    }

    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        toggle(&mut self.amenities, amenity);
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.sports.is_empty()
            && self.amenities.is_empty()
            && self.price == PriceBand::Any
            && self.distance == DistanceBand::Any
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        let sport_ok = self.sports.is_empty() || self.sports.contains(&venue.sport);
        let amenities_ok = self.amenities.iter().all(|a| venue.amenities.contains(a));
        let price_ok = self.price.contains(venue.hourly_price);
        let distance_ok = self
            .distance
            .max_km()
            .map_or(true, |max| venue.distance_km <= max);

        sport_ok && amenities_ok && price_ok && distance_ok && self.matches_query(venue)
    }

    fn matches_query(&self, venue: &Venue) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [venue.name.as_str(), venue.location.as_str(), venue.sport.name()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        venues.iter().filter(|v| self.matches(v)).collect()
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|existing| *existing == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn toggle_sport_adds_then_removes_in_order() {
        let mut filter = VenueFilter::new();
        filter.toggle_sport(Sport::Tennis);
        filter.toggle_sport(Sport::Padel);
        assert_eq!(filter.selected_sports(), &[Sport::Tennis, Sport::Padel]);

        filter.toggle_sport(Sport::Tennis);
        assert_eq!(filter.selected_sports(), &[Sport::Padel]);
        assert!(!filter.is_sport_selected(Sport::Tennis));

        filter.toggle_sport(Sport::Padel);
        assert!(filter.is_empty());
    }

    #[test]
    fn empty_filter_matches_every_venue() {
        let catalog = Catalog::demo();
        let filter = VenueFilter::new();
        assert_eq!(filter.apply(&catalog.venues).len(), catalog.venues.len());
    }

    #[test]
    fn sport_selection_narrows_venues() {
        let catalog = Catalog::demo();
        let mut filter = VenueFilter::new();
        filter.toggle_sport(Sport::Padel);
        let names: Vec<&str> = filter.apply(&catalog.venues).into_iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Elite Sports Complex"]);

        filter.toggle_sport(Sport::Basketball);
        assert_eq!(filter.apply(&catalog.venues).len(), 2);

        filter.toggle_sport(Sport::Cricket);
        assert_eq!(filter.apply(&catalog.venues).len(), 2);
    }

    #[test]
    fn price_bands_are_half_open() {
        assert!(PriceBand::Under25.contains(Money::from_cents(2499)));
        assert!(!PriceBand::Under25.contains(Money::from_units(25)));
        assert!(PriceBand::From25To50.contains(Money::from_units(25)));
        assert!(PriceBand::From25To50.contains(Money::from_units(45)));
        assert!(!PriceBand::From50To100.contains(Money::from_units(45)));
        assert!(PriceBand::Over100.contains(Money::from_units(100)));
        assert!(PriceBand::Any.contains(Money::ZERO));
    }

    #[test]
    fn distance_amenities_and_query_combine() {
        let catalog = Catalog::demo();
        let mut filter = VenueFilter::new();
        filter.distance = DistanceBand::Within1;
        assert_eq!(filter.apply(&catalog.venues).len(), 2);

        filter.toggle_amenity(Amenity::Showers);
        let names: Vec<&str> = filter.apply(&catalog.venues).into_iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Metro Basketball Arena"]);

        filter.query = "elite".to_string();
        assert!(filter.apply(&catalog.venues).is_empty());

        let mut by_location = VenueFilter::new();
        by_location.query = "  riverside ".to_string();
        assert_eq!(by_location.apply(&catalog.venues).len(), 1);
    }

    #[test]
    fn band_keys_round_trip() {
        for band in PriceBand::ALL {
            assert_eq!(PriceBand::from_key(band.key()), Some(band));
        }
        for band in DistanceBand::ALL {
            assert_eq!(DistanceBand::from_key(band.key()), Some(band));
        }
        assert_eq!(PriceBand::from_key("cheap"), None);
    }

    #[test]
    fn expanded_panel_toggles() {
        let mut filter = VenueFilter::new();
        assert!(!filter.is_expanded());
        filter.toggle_expanded();
        assert!(filter.is_expanded());
        filter.toggle_expanded();
        assert!(!filter.is_expanded());
    }
}

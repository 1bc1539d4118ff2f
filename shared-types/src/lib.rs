pub mod booking;
pub mod catalog;
pub mod filter;
pub mod identity;
pub mod money;
pub mod nav;
pub mod schedule;
pub mod selection;
pub mod tournament;
pub mod venue;

pub use booking::{BookingAction, BookingRecord, BookingStats, BookingStatus};
pub use catalog::{Catalog, CatalogError};
pub use filter::{DistanceBand, PriceBand, VenueFilter};
pub use identity::Identity;
pub use money::{Money, SERVICE_FEE};
pub use nav::NavTab;
pub use schedule::{DateOption, TimeSlot};
pub use selection::{
    BookingRequest, BookingSelection, PriceQuote, SelectionError, SelectionState,
    DURATION_CHOICES, PLAYER_CHOICES,
};
pub use tournament::{Difficulty, Tournament, TournamentRegistration, TournamentStatus};
pub use venue::{Amenity, Sport, Venue, VenueAvailability, VenueDescriptor};

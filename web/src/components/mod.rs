pub mod auth_guard;
pub mod booking_modal;
pub mod date_picker;
pub mod error;
pub mod loading;
pub mod navbar;
pub mod search_filters;
pub mod time_slot_picker;
pub mod venue_card;

// Re-export commonly used components
pub use auth_guard::RequireUser;
pub use booking_modal::BookingModal;
pub use error::ErrorView;
pub use loading::LoadingView;
pub use navbar::Navbar;
pub use search_filters::SearchFilters;
pub use venue_card::VenueCard;

pub mod auth;
pub mod bookings;
pub mod home;
pub mod not_found;
pub mod profile;
pub mod tournaments;

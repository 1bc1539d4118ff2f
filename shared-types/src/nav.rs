use serde::{Deserialize, Serialize};

/// Bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavTab {
    Home,
    Map,
    Bookings,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 4] = [NavTab::Home, NavTab::Map, NavTab::Bookings, NavTab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Home => "Discover",
            NavTab::Map => "Map",
            NavTab::Bookings => "Bookings",
            NavTab::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavTab::Home => "🔍",
            NavTab::Map => "📍",
            NavTab::Bookings => "📅",
            NavTab::Profile => "👤",
        }
    }

    // Map has no page of its own yet and shares the discovery route.
    pub fn path(&self) -> &'static str {
        match self {
            NavTab::Home | NavTab::Map => "/",
            NavTab::Bookings => "/bookings",
            NavTab::Profile => "/profile",
        }
    }

    pub fn from_path(path: &str) -> NavTab {
        match path.trim_end_matches('/') {
            "/profile" => NavTab::Profile,
            "/bookings" => NavTab::Bookings,
            _ => NavTab::Home,
        }
    }
}

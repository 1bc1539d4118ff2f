use leptos::prelude::*;
use leptos::server;
use shared_types::{BookingRequest, Catalog};

#[server]
pub async fn fetch_catalog() -> Result<Catalog, ServerFnError> {
    let catalog = crate::store::get_catalog();
    tracing::debug!(
        venues = catalog.venues.len(),
        dates = catalog.dates.len(),
        "serving catalog"
    );
    Ok(catalog.clone())
}

/// Hands a completed selection to the booking backend.
///
/// Payment and reservation live outside this app; the request is checked,
/// logged and acknowledged. The total is the client's figure and is logged
/// as such.
#[server]
pub async fn submit_booking(request: BookingRequest) -> Result<(), ServerFnError> {
    if let Err(e) = request.validate() {
        tracing::warn!(error = %e, "rejected booking request");
        return Err(ServerFnError::new(format!("Invalid booking request: {}", e)));
    }

    if let Err(e) = crate::store::get_catalog().check_offered(&request) {
        tracing::warn!(
            date = %request.date,
            time = %request.time,
            error = %e,
            "booking requested outside the offered schedule"
        );
        return Err(ServerFnError::new(format!("Slot not available: {}", e)));
    }

    tracing::info!(
        venue = %request.venue_name,
        sport = %request.sport,
        date = %request.date,
        time = %request.time,
        hours = request.duration_hours,
        players = request.players,
        client_total = %request.total,
        "booking submitted"
    );

    Ok(())
}

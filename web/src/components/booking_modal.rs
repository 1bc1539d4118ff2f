use crate::components::date_picker::DatePicker;
use crate::components::error::ErrorView;
use crate::components::time_slot_picker::TimeSlotPicker;
use crate::server::submit_booking;
use leptos::prelude::*;
use shared_types::{
    BookingRequest, BookingSelection, DateOption, PriceQuote, TimeSlot, VenueDescriptor,
    DURATION_CHOICES, PLAYER_CHOICES,
};
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalStep {
    Select,
    Confirmed,
}

#[component]
pub fn BookingModal(
    venue: VenueDescriptor,
    dates: Vec<DateOption>,
    slots: Vec<TimeSlot>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let selection = RwSignal::new(BookingSelection::new());
    let step = RwSignal::new(ModalStep::Select);
    let submission_error = RwSignal::new(None::<String>);
    let confirmed = RwSignal::new(None::<BookingRequest>);

    let hourly_price = venue.hourly_price;
    let quote = Memo::new(move |_| selection.with(|s| s.quote(hourly_price)));
    let can_submit = Memo::new(move |_| selection.with(|s| s.can_submit()));

    let submit = Action::new(|request: &BookingRequest| {
        let request = request.clone();
        async move { submit_booking(request.clone()).await.map(|_| request) }
    });
    let is_submitting = submit.pending();

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            match result {
                Ok(request) => {
                    confirmed.set(Some(request));
                    step.set(ModalStep::Confirmed);
                }
                Err(e) => {
                    leptos::logging::error!("Booking submission failed: {}", e);
                    submission_error.set(Some(format!("Failed to book court: {}", e)));
                }
            }
        }
    });

    let is_button_disabled = Memo::new(move |_| !can_submit.get() || is_submitting.get());

    let handle_submit = {
        let venue = venue.clone();
        move || {
            submission_error.set(None);
            match selection.with_untracked(|s| s.to_request(&venue)) {
                Ok(request) => {
                    submit.dispatch(request);
                }
                Err(e) => leptos::logging::warn!("Booking not ready: {}", e),
            }
        }
    };

    let close_modal = move || {
        selection.update(|s| s.reset());
        step.set(ModalStep::Select);
        submission_error.set(None);
        confirmed.set(None);
        on_close();
    };

    let on_duration_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match raw.parse::<u8>() {
            Ok(hours) => selection.maybe_update(|s| match s.set_duration(hours) {
                Ok(()) => true,
                Err(e) => {
                    leptos::logging::warn!("Ignoring duration: {}", e);
                    false
                }
            }),
            Err(_) => leptos::logging::warn!("Unreadable duration value: {}", raw),
        }
    };

    let on_players_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match raw.parse::<u8>() {
            Ok(count) => selection.maybe_update(|s| match s.set_player_count(count) {
                Ok(()) => true,
                Err(e) => {
                    leptos::logging::warn!("Ignoring player count: {}", e);
                    false
                }
            }),
            Err(_) => leptos::logging::warn!("Unreadable player count: {}", raw),
        }
    };

    let VenueDescriptor {
        name,
        image_ref,
        location,
        sport_tag,
        ..
    } = venue;

    view! {
        <div class="booking-modal-overlay show">
            <div class="booking-modal">
                <div class="modal-header">
                    <h2>{move || match step.get() {
                        ModalStep::Select => "Book Your Game",
                        ModalStep::Confirmed => "Court Booked!",
                    }}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| close_modal()
                        class="close-button"
                    >
                        "×"
                    </Button>
                </div>

                <div class="modal-content">
                    <div class="venue-summary">
                        <img class="venue-summary__image" src=image_ref alt=name.clone()/>
                        <div class="venue-summary__details">
                            <h3>{name.clone()}</h3>
                            <p class="venue-summary__location">{location}</p>
                            <div class="venue-summary__meta">
                                <span class="badge badge--primary">{sport_tag}</span>
                                <span class="venue-summary__price">{format!("{}/hour", hourly_price)}</span>
                            </div>
                        </div>
                    </div>

                    {move || match step.get() {
                        ModalStep::Select => view! {
                            <div class="booking-form">
                                <DatePicker dates=dates.clone() selection=selection/>
                                <TimeSlotPicker slots=slots.clone() selection=selection/>

                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="booking-duration">"Duration"</label>
                                        <select
                                            id="booking-duration"
                                            class="form-select"
                                            on:change=on_duration_change
                                        >
                                            {DURATION_CHOICES
                                                .iter()
                                                .map(|&hours| view! {
                                                    <option
                                                        value=hours.to_string()
                                                        selected=move || selection.with(|s| s.duration_hours() == hours)
                                                    >
                                                        {duration_label(hours)}
                                                    </option>
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </div>
                                    <div class="form-group">
                                        <label for="booking-players">"Players"</label>
                                        <select
                                            id="booking-players"
                                            class="form-select"
                                            on:change=on_players_change
                                        >
                                            {PLAYER_CHOICES
                                                .map(|count| view! {
                                                    <option
                                                        value=count.to_string()
                                                        selected=move || selection.with(|s| s.player_count() == count)
                                                    >
                                                        {players_label(count)}
                                                    </option>
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </div>
                                </div>

                                <div class="price-summary">
                                    <h3 class="price-summary__title">"Booking Summary"</h3>
                                    <div class="price-summary__row">
                                        <span>{move || rental_label(&quote.get())}</span>
                                        <span>{move || rental_breakdown(&quote.get())}</span>
                                    </div>
                                    <div class="price-summary__row">
                                        <span>"Service fee"</span>
                                        <span>{move || quote.get().service_fee.to_string()}</span>
                                    </div>
                                    <div class="price-summary__row price-summary__row--total">
                                        <span>"Total"</span>
                                        <span>{move || quote.get().total.to_string()}</span>
                                    </div>
                                </div>

                                {move || {
                                    submission_error
                                        .get()
                                        .map(|error| view! { <ErrorView message=Some(error)/> })
                                }}

                                <div class="form-actions">
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| close_modal()
                                    >
                                        "Cancel"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        disabled=Signal::from(is_button_disabled)
                                        loading=is_submitting
                                        on_click={
                                            let handle_submit = handle_submit.clone();
                                            move |_| handle_submit()
                                        }
                                    >
                                        {move || {
                                            if is_submitting.get() {
                                                "Booking...".to_string()
                                            } else {
                                                SUBMIT_LABEL.to_string()
                                            }
                                        }}
                                    </Button>
                                </div>
                            </div>
                        }.into_any(),
                        ModalStep::Confirmed => view! {
                            <div class="confirmation-step">
                                <div class="success-icon">"✓"</div>
                                <h3>"You're on the court!"</h3>
                                {move || confirmed.get().map(|request| view! {
                                    <div class="booking-details">
                                        <p>{format!("{} at {}", request.date.format("%A, %B %-d"), request.time)}</p>
                                        <p>{format!(
                                            "{} • {}",
                                            duration_label(request.duration_hours),
                                            players_label(request.players),
                                        )}</p>
                                        <p class="booking-total">{format!("Total paid: {}", request.total)}</p>
                                    </div>
                                })}
                                <div class="confirmation-actions">
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| close_modal()
                                    >
                                        "Done"
                                    </Button>
                                </div>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

const SUBMIT_LABEL: &str = "Pay & Book Now";

fn rental_label(quote: &PriceQuote) -> String {
    format!("Court rental ({}h)", quote.hours)
}

fn rental_breakdown(quote: &PriceQuote) -> String {
    format!("{} × {}", quote.hourly, quote.hours)
}

fn duration_label(hours: u8) -> String {
    if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{} hours", hours)
    }
}

fn players_label(count: u8) -> String {
    if count == 1 {
        "1 player".to_string()
    } else {
        format!("{} players", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Money;

    #[test]
    fn labels_pluralize() {
        assert_eq!(duration_label(1), "1 hour");
        assert_eq!(duration_label(3), "3 hours");
        assert_eq!(players_label(1), "1 player");
        assert_eq!(players_label(8), "8 players");
    }

    #[test]
    fn rental_row_shows_hours_and_rate() {
        let mut selection = BookingSelection::new();
        selection.set_duration(2).unwrap();
        let quote = selection.quote(Money::from_units(35));
        assert_eq!(rental_label(&quote), "Court rental (2h)");
        assert_eq!(rental_breakdown(&quote), "$35 × 2");
        assert_eq!(quote.total.to_string(), "$72.99");
        assert_eq!(SUBMIT_LABEL, "Pay & Book Now");
    }
}

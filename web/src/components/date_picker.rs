use leptos::prelude::*;
use shared_types::{BookingSelection, DateOption};

#[component]
pub fn DatePicker(dates: Vec<DateOption>, selection: RwSignal<BookingSelection>) -> impl IntoView {
    view! {
        <div class="date-picker">
            <h4 class="booking-section-title">"Select Date"</h4>
            <div class="date-picker-row">
                {dates
                    .into_iter()
                    .map(|option| {
                        let for_class = option.clone();
                        let for_click = option.clone();
                        let available = option.available;
                        view! {
                            <button
                                type="button"
                                class=move || date_chip_class(
                                    selection.with(|s| s.is_date_selected(&for_class)),
                                    available,
                                )
                                disabled=!available
                                on:click=move |_| {
                                    selection.maybe_update(|s| match s.pick_date(&for_click) {
                                        Ok(()) => true,
                                        Err(e) => {
                                            leptos::logging::warn!("Ignoring date pick: {}", e);
                                            false
                                        }
                                    });
                                }
                            >
                                <span class="date-chip-label">{option.label.clone()}</span>
                                <span class="date-chip-day">{option.day_of_month()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn date_chip_class(selected: bool, available: bool) -> &'static str {
    match (selected, available) {
        (_, false) => "date-chip date-chip--unavailable",
        (true, true) => "date-chip date-chip--selected",
        (false, true) => "date-chip",
    }
}

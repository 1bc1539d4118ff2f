use leptos::prelude::*;
use shared_types::{BookingSelection, TimeSlot};

#[component]
pub fn TimeSlotPicker(slots: Vec<TimeSlot>, selection: RwSignal<BookingSelection>) -> impl IntoView {
    let has_slots = !slots.is_empty();

    view! {
        <div class="time-slot-picker">
            <h4 class="booking-section-title">"Select Time"</h4>
            <p class="time-slot-picker-subtitle">
                {move || {
                    if selection.with(|s| s.selected_date().is_none()) {
                        "Pick a date to lock in your slot"
                    } else {
                        "All slots are one hour apart"
                    }
                }}
            </p>

            {if has_slots {
                view! {
                    <div class="time-slot-picker-grid">
                        {slots
                            .into_iter()
                            .map(|slot| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if selection.with(|s| s.is_time_selected(slot)) {
                                                "time-slot-button time-slot-button--selected"
                                            } else {
                                                "time-slot-button"
                                            }
                                        }
                                        on:click=move |_| selection.update(|s| s.pick_time(slot))
                                    >
                                        {slot.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="time-slot-picker-empty">
                        <p>"No time slots are open at this venue."</p>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

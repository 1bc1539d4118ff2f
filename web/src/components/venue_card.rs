use crate::components::booking_modal::BookingModal;
use leptos::prelude::*;
use shared_types::{DateOption, TimeSlot, Venue};
use thaw::*;

#[component]
pub fn VenueCard(venue: Venue, dates: Vec<DateOption>, slots: Vec<TimeSlot>) -> impl IntoView {
    let show_booking = RwSignal::new(false);
    let descriptor = venue.descriptor();
    let (amenities, hidden) = venue.amenity_preview();
    let amenities = amenities.to_vec();
    let distance = venue.distance_label();

    view! {
        <div class="venue-card">
            <div class="venue-card__media">
                <img class="venue-card__image" src=venue.image.clone() alt=venue.name.clone()/>
                <span class=format!("venue-card__availability {}", venue.availability.badge_class())>
                    "🕒 " {venue.availability.label()}
                </span>
                <span class="venue-card__sport badge badge--secondary">{venue.sport.name()}</span>
                <div class="venue-card__price">
                    <span class="venue-card__price-amount">{venue.hourly_price.to_string()}</span>
                    <span class="venue-card__price-unit">"/hour"</span>
                </div>
            </div>

            <div class="venue-card__body">
                <h3 class="venue-card__name">{venue.name.clone()}</h3>
                <div class="venue-card__meta">
                    <span class="venue-card__rating">
                        "⭐ " <strong>{format!("{:.1}", venue.rating)}</strong>
                        {format!(" ({})", venue.reviews)}
                    </span>
                    <span class="venue-card__distance">"📍 " {distance}</span>
                </div>
                <p class="venue-card__location">{venue.location.clone()}</p>

                {(!amenities.is_empty()).then(|| view! {
                    <div class="venue-card__amenities">
                        {amenities
                            .into_iter()
                            .map(|amenity| view! {
                                <span class="venue-card__amenity">
                                    {amenity.icon().map(|icon| format!("{} ", icon))}
                                    {amenity.name()}
                                </span>
                            })
                            .collect::<Vec<_>>()}
                        {(hidden > 0).then(|| view! {
                            <span class="venue-card__amenity venue-card__amenity--more">
                                {format!("+{}", hidden)}
                            </span>
                        })}
                    </div>
                })}

                <Button
                    class="venue-card__book"
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=move |_| show_booking.set(true)
                >
                    "Book Now"
                </Button>
            </div>

            {move || {
                show_booking.get().then(|| view! {
                    <BookingModal
                        venue=descriptor.clone()
                        dates=dates.clone()
                        slots=slots.clone()
                        on_close=move || show_booking.set(false)
                    />
                })
            }}
        </div>
    }
}

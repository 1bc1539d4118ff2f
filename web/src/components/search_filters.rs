use leptos::prelude::*;
use shared_types::{Amenity, DistanceBand, PriceBand, Sport, VenueFilter};
use thaw::*;

#[component]
pub fn SearchFilters(filter: RwSignal<VenueFilter>) -> impl IntoView {
    let query = RwSignal::new(filter.with_untracked(|f| f.query.clone()));

    Effect::new(move |_| {
        let text = query.get();
        filter.maybe_update(|f| {
            if f.query == text {
                false
            } else {
                f.query = text;
                true
            }
        });
    });

    let clear_filters = move || {
        query.set(String::new());
        filter.update(|f| {
            let expanded = f.is_expanded();
            *f = VenueFilter::new();
            if expanded {
                f.toggle_expanded();
            }
        });
    };

    view! {
        <div class="search-filters">
            <div class="search-filters__bar">
                <span class="search-filters__icon">"🔍"</span>
                <Input
                    class="search-filters__input"
                    placeholder="Search venues, sports, or locations..."
                    value=query
                />
                <Button
                    appearance=ButtonAppearance::Subtle
                    class="search-filters__toggle"
                    on_click=move |_| filter.update(|f| f.toggle_expanded())
                >
                    "⚙"
                </Button>
            </div>

            <div class="search-filters__location">
                <span>"📍 Near DHA, Karachi, Pakistan"</span>
                <button
                    type="button"
                    class="link-button"
                    on:click=move |_| leptos::logging::log!("Location picker is not available yet")
                >
                    "Change"
                </button>
            </div>

            <div class="search-filters__section">
                <h3 class="search-filters__heading">"Sports"</h3>
                <div class="chip-row">
                    {Sport::ALL
                        .into_iter()
                        .map(|sport| view! {
                            <button
                                type="button"
                                class=move || chip_class(filter.with(|f| f.is_sport_selected(sport)))
                                on:click=move |_| filter.update(|f| f.toggle_sport(sport))
                            >
                                {sport.name()}
                            </button>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <Show when=move || filter.with(|f| f.is_expanded())>
                <div class="search-filters__extended">
                    <div class="form-row">
                        <div class="form-group">
                            <label for="filter-price">"Price Range"</label>
                            <select
                                id="filter-price"
                                class="form-select"
                                on:change=move |ev| {
                                    let key = event_target_value(&ev);
                                    match PriceBand::from_key(&key) {
                                        Some(band) => filter.update(|f| f.price = band),
                                        None => leptos::logging::warn!("Unknown price band: {}", key),
                                    }
                                }
                            >
                                {PriceBand::ALL
                                    .into_iter()
                                    .map(|band| view! {
                                        <option
                                            value=band.key()
                                            selected=move || filter.with(|f| f.price == band)
                                        >
                                            {band.label()}
                                        </option>
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="filter-distance">"Distance"</label>
                            <select
                                id="filter-distance"
                                class="form-select"
                                on:change=move |ev| {
                                    let key = event_target_value(&ev);
                                    match DistanceBand::from_key(&key) {
                                        Some(band) => filter.update(|f| f.distance = band),
                                        None => leptos::logging::warn!("Unknown distance band: {}", key),
                                    }
                                }
                            >
                                {DistanceBand::ALL
                                    .into_iter()
                                    .map(|band| view! {
                                        <option
                                            value=band.key()
                                            selected=move || filter.with(|f| f.distance == band)
                                        >
                                            {band.label()}
                                        </option>
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                    </div>

                    <div class="form-group">
                        <label>"Amenities"</label>
                        <div class="chip-row">
                            {Amenity::ALL
                                .into_iter()
                                .map(|amenity| view! {
                                    <button
                                        type="button"
                                        class=move || chip_class(filter.with(|f| f.is_amenity_selected(amenity)))
                                        on:click=move |_| filter.update(|f| f.toggle_amenity(amenity))
                                    >
                                        {amenity.name()}
                                    </button>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || !filter.with(|f| f.is_empty())>
                <button type="button" class="link-button" on:click=move |_| clear_filters()>
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "chip chip--selected"
    } else {
        "chip"
    }
}

use crate::components::{ErrorView, LoadingView, Navbar, SearchFilters, VenueCard};
use crate::server::fetch_catalog;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared_types::{Catalog, VenueFilter};

const HOME_STATS: [(&str, &str, &str); 3] = [
    ("👥", "Active Users", "50K+"),
    ("🏆", "Venues", "500+"),
    ("📈", "Bookings", "10K+"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let filter = RwSignal::new(VenueFilter::new());
    let catalog = Resource::new(|| (), |_| fetch_catalog());

    view! {
        <div class="page home-page">
            <Navbar/>

            <section class="hero">
                <img class="hero__image" src="/assets/hero-sports.jpg" alt="Sports facilities"/>
                <div class="hero__overlay"></div>
                <div class="hero__content">
                    <h1 class="hero__title">"Book Your Game"</h1>
                    <p class="hero__subtitle">
                        "Discover and book the best sports facilities in your city"
                    </p>
                    <a href="#venues" class="hero__cta">"Start Exploring"</a>

                    <div class="hero__stats">
                        {HOME_STATS
                            .into_iter()
                            .map(|(icon, label, value)| view! {
                                <div class="stat-card">
                                    <div class="stat-card__icon">{icon}</div>
                                    <div class="stat-card__value">{value}</div>
                                    <div class="stat-card__label">{label}</div>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section class="page-section">
                <SearchFilters filter=filter/>
            </section>

            <section id="venues" class="page-section">
                <div class="section-header">
                    <h2>"Featured Venues"</h2>
                    <button
                        type="button"
                        class="link-button"
                        on:click=move |_| leptos::logging::log!("Full venue listing is not available yet")
                    >
                        "View All ›"
                    </button>
                </div>

                <Suspense fallback=move || view! { <LoadingView compact=true/> }>
                    {move || {
                        catalog.get().map(|result| match result {
                            Ok(data) => view! { <VenueList catalog=data filter=filter/> }.into_any(),
                            Err(e) => {
                                leptos::logging::error!("Failed to load venues: {}", e);
                                view! {
                                    <ErrorView
                                        message=Some("We couldn't load venues right now.".to_string())
                                        on_retry=Callback::new(move |_| catalog.refetch())
                                    />
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="page-section">
                <h2>"Quick Actions"</h2>
                <div class="quick-actions">
                    <div
                        class="quick-action quick-action--primary"
                        on:click=move |_| navigate("/tournaments", Default::default())
                    >
                        <div class="quick-action__title">"Tournaments"</div>
                        <div class="quick-action__subtitle">"Join competitions"</div>
                    </div>
                    <div
                        class="quick-action quick-action--secondary"
                        on:click=move |_| leptos::logging::log!("Partner matching is not available yet")
                    >
                        <div class="quick-action__title">"Find Partner"</div>
                        <div class="quick-action__subtitle">"Connect with players"</div>
                    </div>
                </div>
            </section>

            <div class="tabbar-spacer"></div>
        </div>
    }
}

#[component]
fn VenueList(catalog: Catalog, filter: RwSignal<VenueFilter>) -> impl IntoView {
    let Catalog {
        dates,
        time_slots,
        venues,
        ..
    } = catalog;

    view! {
        <div class="venue-list">
            {move || {
                let shown = filter.with(|f| {
                    f.apply(&venues).into_iter().cloned().collect::<Vec<_>>()
                });

                if shown.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>"No venues match your filters."</p>
                            <p class="empty-state__hint">"Try another sport or widen the distance."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    shown
                        .into_iter()
                        .map(|venue| view! {
                            <VenueCard venue=venue dates=dates.clone() slots=time_slots.clone()/>
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }
            }}
        </div>
    }
}

use crate::components::{ErrorView, LoadingView, Navbar, RequireUser};
use crate::server::fetch_catalog;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared_types::booking::{past, upcoming};
use shared_types::{BookingRecord, BookingStats};
use thaw::*;

const PKR: &str = "PKR ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookingsTab {
    Upcoming,
    Past,
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    view! {
        <div class="page bookings-page">
            <Navbar/>
            <RequireUser>
                <BookingsContent/>
            </RequireUser>
        </div>
    }
}

#[component]
fn BookingsContent() -> impl IntoView {
    let catalog = Resource::new(|| (), |_| fetch_catalog());
    let search = RwSignal::new(String::new());
    let tab = RwSignal::new(BookingsTab::Upcoming);

    view! {
        <main class="page-main">
            <div class="page-header">
                <h1>"My Bookings"</h1>
                <div class="search-row">
                    <Input placeholder="Search bookings..." value=search/>
                </div>
            </div>

            <div class="tab-list">
                <Button
                    appearance=Signal::derive(move || tab_appearance(tab.get() == BookingsTab::Upcoming))
                    on_click=move |_| tab.set(BookingsTab::Upcoming)
                >
                    "Upcoming"
                </Button>
                <Button
                    appearance=Signal::derive(move || tab_appearance(tab.get() == BookingsTab::Past))
                    on_click=move |_| tab.set(BookingsTab::Past)
                >
                    "Past"
                </Button>
            </div>

            <Suspense fallback=move || view! { <LoadingView message="Loading your bookings...".to_string()/> }>
                {move || {
                    catalog.get().map(|result| match result {
                        Ok(data) => {
                            let bookings = StoredValue::new(data.bookings);
                            view! {
                                <div class="booking-list">
                                    {move || {
                                        let query = search.get();
                                        let current = tab.get();
                                        let rows: Vec<BookingRecord> = bookings.with_value(|all| {
                                            let picked = match current {
                                                BookingsTab::Upcoming => upcoming(all, &query),
                                                BookingsTab::Past => past(all, &query),
                                            };
                                            picked.into_iter().cloned().collect()
                                        });

                                        if rows.is_empty() {
                                            view! { <EmptyBookings tab=current/> }.into_any()
                                        } else {
                                            rows.into_iter()
                                                .map(|booking| view! { <BookingCard booking=booking/> })
                                                .collect::<Vec<_>>()
                                                .into_any()
                                        }
                                    }}
                                </div>
                                {bookings.with_value(|all| view! {
                                    <MonthStats stats=BookingStats::from_records(all)/>
                                })}
                            }
                                .into_any()
                        }
                        Err(e) => {
                            leptos::logging::error!("Failed to load bookings: {}", e);
                            view! {
                                <ErrorView
                                    message=Some("We couldn't load your bookings.".to_string())
                                    on_retry=Callback::new(move |_| catalog.refetch())
                                />
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </main>
        <div class="tabbar-spacer"></div>
    }
}

fn tab_appearance(active: bool) -> ButtonAppearance {
    if active {
        ButtonAppearance::Primary
    } else {
        ButtonAppearance::Subtle
    }
}

#[component]
fn BookingCard(booking: BookingRecord) -> impl IntoView {
    let actions = booking.actions();
    let booking_id = booking.id.clone();

    view! {
        <div class="booking-card">
            <div class="booking-card__media">
                <img src=booking.image.clone() alt=booking.venue.clone()/>
                <span class=booking.status.badge_class()>{booking.status.label()}</span>
            </div>
            <div class="booking-card__body">
                <div class="booking-card__header">
                    <div>
                        <h3>{booking.venue.clone()}</h3>
                        <span class="badge badge--outline">{booking.sport.name()}</span>
                    </div>
                    <div class="booking-card__price">
                        <div class="booking-card__amount">{booking.price.format_with(PKR)}</div>
                        <div class="booking-card__players">{format!("{} players", booking.players)}</div>
                    </div>
                </div>
                <div class="booking-card__details">
                    <div>"📅 " {booking.date_label.clone()}</div>
                    <div>"🕒 " {booking.time_label.clone()}</div>
                    <div class="booking-card__location">"📍 " {booking.location.clone()}</div>
                </div>
                {(!actions.is_empty()).then(|| view! {
                    <div class="booking-card__actions">
                        {actions
                            .into_iter()
                            .map(|action| {
                                let booking_id = booking_id.clone();
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        size=ButtonSize::Small
                                        on_click=move |_| leptos::logging::log!(
                                            "{} requested for booking {}",
                                            action.label(),
                                            booking_id
                                        )
                                    >
                                        {action.label()}
                                    </Button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn EmptyBookings(tab: BookingsTab) -> impl IntoView {
    let navigate = use_navigate();
    let (title, hint) = match tab {
        BookingsTab::Upcoming => ("No upcoming bookings", "Ready to play? Book your next game now!"),
        BookingsTab::Past => ("No past bookings", "Games you've played will show up here."),
    };

    view! {
        <div class="empty-state">
            <div class="empty-state__icon">"📅"</div>
            <h3>{title}</h3>
            <p class="empty-state__hint">{hint}</p>
            {(tab == BookingsTab::Upcoming).then(|| view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigate("/", Default::default())
                >
                    "Explore Venues"
                </Button>
            })}
        </div>
    }
}

#[component]
fn MonthStats(stats: BookingStats) -> impl IntoView {
    view! {
        <div class="month-stats">
            <h2>"This Month"</h2>
            <div class="stat-grid">
                <div class="stat-card">
                    <div class="stat-card__value stat-card__value--primary">{stats.games_played}</div>
                    <div class="stat-card__label">"Games Played"</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__value stat-card__value--secondary">
                        {stats.total_spent.format_with(PKR)}
                    </div>
                    <div class="stat-card__label">"Total Spent"</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__value stat-card__value--accent">
                        {stats.average_rating_label()}
                    </div>
                    <div class="stat-card__label">"Avg Rating"</div>
                </div>
            </div>
        </div>
    }
}

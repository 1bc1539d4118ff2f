use crate::components::{ErrorView, LoadingView, Navbar};
use crate::server::fetch_catalog;
use crate::utils::auth::{use_auth_session, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::{BookingRecord, BookingStats};
use thaw::*;

const RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Achievement {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    earned: bool,
}

fn achievements(stats: &BookingStats) -> Vec<Achievement> {
    vec![
        Achievement {
            icon: "🏆",
            title: "First Booking",
            description: "Completed your first booking",
            earned: stats.games_played >= 1,
        },
        Achievement {
            icon: "⭐",
            title: "Loyal Player",
            description: "Made 10+ bookings",
            earned: stats.total >= 10,
        },
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_auth_session();
    let catalog = Resource::new(|| (), |_| fetch_catalog());

    view! {
        <div class="page profile-page">
            <Navbar/>
            <main class="page-main">
                <div class="profile-header">
                    {move || match session.current_user() {
                        Some(user) => view! {
                            <div class="profile-avatar">{user.initials()}</div>
                            <h1>{user.display_name.clone()}</h1>
                            <p class="profile-subtitle">{user.email.clone()}</p>
                            <span class="badge badge--primary">"🏆 Premium Player"</span>
                        }
                            .into_any(),
                        None => view! {
                            <div class="profile-avatar">"?"</div>
                            <h1>"Guest Player"</h1>
                            <p class="profile-subtitle">"Sign in to keep track of your games"</p>
                            <A href=LOGIN_PATH attr:class="navbar__link navbar__link--cta">"Login"</A>
                        }
                            .into_any(),
                    }}
                </div>

                <Suspense fallback=move || view! { <LoadingView compact=true/> }>
                    {move || {
                        catalog.get().map(|result| match result {
                            Ok(data) => view! { <ProfileActivity bookings=data.bookings/> }.into_any(),
                            Err(e) => {
                                leptos::logging::error!("Failed to load profile activity: {}", e);
                                view! { <ErrorView message=None/> }.into_any()
                            }
                        })
                    }}
                </Suspense>

                <section class="page-section">
                    <h2>"Quick Actions"</h2>
                    <div class="action-list">
                        {[("⚙", "Account Settings"), ("💳", "Payment Methods"), ("🔔", "Notifications")]
                            .into_iter()
                            .map(|(icon, label)| view! {
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    class="action-list__item"
                                    on_click=move |_| leptos::logging::log!("{} is not available yet", label)
                                >
                                    {format!("{}  {}", icon, label)}
                                </Button>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </main>
            <div class="tabbar-spacer"></div>
        </div>
    }
}

#[component]
fn ProfileActivity(bookings: Vec<BookingRecord>) -> impl IntoView {
    let stats = BookingStats::from_records(&bookings);
    let earned = achievements(&stats);
    let recent: Vec<BookingRecord> = bookings.into_iter().take(RECENT_LIMIT).collect();

    view! {
        <section class="page-section">
            <h2>"Your Stats"</h2>
            <div class="stat-grid">
                <div class="stat-card">
                    <div class="stat-card__icon">"📅"</div>
                    <div class="stat-card__value">{stats.total}</div>
                    <div class="stat-card__label">"Bookings"</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__icon">"⭐"</div>
                    <div class="stat-card__value">{stats.average_rating_label()}</div>
                    <div class="stat-card__label">"Average Rating"</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__icon">"🏆"</div>
                    <div class="stat-card__value">{stats.sports_played}</div>
                    <div class="stat-card__label">"Sports Played"</div>
                </div>
            </div>
        </section>

        <section class="page-section">
            <div class="section-header">
                <h2>"Recent Bookings"</h2>
                <A href="/bookings" attr:class="link-button">"View All"</A>
            </div>
            <div class="recent-list">
                {recent
                    .into_iter()
                    .map(|booking| view! {
                        <div class="recent-booking">
                            <div class="recent-booking__header">
                                <h3>{booking.venue.clone()}</h3>
                                <span class=booking.status.badge_class()>{booking.status.label()}</span>
                            </div>
                            <div class="recent-booking__meta">
                                <span>
                                    <strong>{booking.sport.name()}</strong>
                                    {format!(" • {}, {}", booking.date_label, booking.time_label)}
                                </span>
                                <span class="recent-booking__price">{booking.price.format_with("PKR ")}</span>
                            </div>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page-section">
            <h2>"Achievements"</h2>
            <div class="achievement-list">
                {earned
                    .into_iter()
                    .map(|achievement| view! {
                        <div class=if achievement.earned { "achievement" } else { "achievement achievement--locked" }>
                            <div class="achievement__icon">{achievement.icon}</div>
                            <div>
                                <h3>{achievement.title}</h3>
                                <p>{achievement.description}</p>
                            </div>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

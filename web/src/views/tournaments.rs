use crate::components::{ErrorView, LoadingView, Navbar, RequireUser};
use crate::server::fetch_catalog;
use leptos::prelude::*;
use shared_types::tournament::category_counts;
use shared_types::{Catalog, Tournament, TournamentRegistration};
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TournamentsTab {
    Upcoming,
    Registered,
}

#[component]
pub fn TournamentsPage() -> impl IntoView {
    view! {
        <div class="page tournaments-page">
            <Navbar/>
            <RequireUser>
                <TournamentsContent/>
            </RequireUser>
        </div>
    }
}

#[component]
fn TournamentsContent() -> impl IntoView {
    let catalog = Resource::new(|| (), |_| fetch_catalog());
    let tab = RwSignal::new(TournamentsTab::Upcoming);

    view! {
        <main class="page-main">
            <div class="page-header">
                <h1>"Tournaments"</h1>
                <p class="page-subtitle">"Compete with players across the city"</p>
            </div>

            <div class="featured-banner">
                <div class="featured-banner__icon">"🏆"</div>
                <h2>"Championship Series"</h2>
                <p>"Join the biggest sports tournament of the year"</p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| leptos::logging::log!("Championship details are not available yet")
                >
                    "View Details"
                </Button>
            </div>

            <div class="tab-list">
                <Button
                    appearance=Signal::derive(move || {
                        if tab.get() == TournamentsTab::Upcoming {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        }
                    })
                    on_click=move |_| tab.set(TournamentsTab::Upcoming)
                >
                    "Upcoming"
                </Button>
                <Button
                    appearance=Signal::derive(move || {
                        if tab.get() == TournamentsTab::Registered {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        }
                    })
                    on_click=move |_| tab.set(TournamentsTab::Registered)
                >
                    "My Tournaments"
                </Button>
            </div>

            <Suspense fallback=move || view! { <LoadingView message="Loading tournaments...".to_string()/> }>
                {move || {
                    catalog.get().map(|result| match result {
                        Ok(data) => view! { <TournamentListings catalog=data tab=tab/> }.into_any(),
                        Err(e) => {
                            leptos::logging::error!("Failed to load tournaments: {}", e);
                            view! {
                                <ErrorView
                                    message=Some("We couldn't load tournaments.".to_string())
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

#[component]
fn TournamentListings(catalog: Catalog, tab: RwSignal<TournamentsTab>) -> impl IntoView {
    let categories = category_counts(&catalog.tournaments);
    let Catalog {
        tournaments,
        registrations,
        ..
    } = catalog;

    view! {
        <div class="tournament-list">
            {move || match tab.get() {
                TournamentsTab::Upcoming => tournaments
                    .iter()
                    .cloned()
                    .map(|tournament| view! { <TournamentCard tournament=tournament/> })
                    .collect::<Vec<_>>()
                    .into_any(),
                TournamentsTab::Registered if registrations.is_empty() => view! {
                    <div class="empty-state">
                        <p>"You haven't entered any tournaments yet."</p>
                    </div>
                }
                    .into_any(),
                TournamentsTab::Registered => registrations
                    .iter()
                    .cloned()
                    .map(|registration| view! { <RegistrationCard registration=registration/> })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>

        <section class="page-section">
            <h2>"Popular Categories"</h2>
            <div class="category-grid">
                {categories
                    .into_iter()
                    .map(|(sport, count)| view! {
                        <div class="category-card">
                            <div class="category-card__name">{sport.name()}</div>
                            <div class="category-card__count">{tournament_count_label(count)}</div>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn TournamentCard(tournament: Tournament) -> impl IntoView {
    let fill = format!("width: {}%", tournament.fill_percent());
    let can_register = tournament.can_register();
    let tournament_id = tournament.id.clone();

    view! {
        <div class="tournament-card">
            <div class="tournament-card__media">
                <img src=tournament.image.clone() alt=tournament.name.clone()/>
                <div class="tournament-card__badges">
                    <span class=tournament.status.badge_class()>{tournament.status.label()}</span>
                    <span class=tournament.difficulty.badge_class()>{tournament.difficulty.label()}</span>
                </div>
                <span class="tournament-card__sport badge badge--secondary">{tournament.sport.name()}</span>
                <div class="tournament-card__prize">
                    <div class="tournament-card__prize-label">"Prize Pool"</div>
                    <div class="tournament-card__prize-value">{tournament.prize.clone()}</div>
                </div>
            </div>

            <div class="tournament-card__body">
                <h3>{tournament.name.clone()}</h3>
                <div class="tournament-card__details">
                    <div class="tournament-card__row">
                        <span>"📅 " {tournament.date_label.clone()}</span>
                        <span>"🕒 " {tournament.time_label.clone()}</span>
                    </div>
                    <div>"📍 " {tournament.location.clone()}</div>
                    <div class="tournament-card__row">
                        <span>"👥 " {tournament.participants_label()}</span>
                        <span class="tournament-card__fee">{tournament.registration_fee.to_string()}</span>
                    </div>
                </div>

                <div class="progress">
                    <div class="progress__bar" style=fill></div>
                </div>

                <Button
                    class="tournament-card__register"
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_register)
                    on_click=move |_| leptos::logging::log!("Registration requested for tournament {}", tournament_id)
                >
                    "🏆 " {tournament.register_label()}
                </Button>
            </div>
        </div>
    }
}

#[component]
fn RegistrationCard(registration: TournamentRegistration) -> impl IntoView {
    view! {
        <div class="registration-card">
            <div class="registration-card__header">
                <h3>{registration.name.clone()}</h3>
                <span class=registration.status.badge_class()>{registration.status.label()}</span>
            </div>
            <div class="registration-card__meta">
                <span>
                    <strong>{registration.sport.name()}</strong>
                    {format!(" • {}", registration.date_label)}
                </span>
                {registration.position.clone().map(|position| view! {
                    <span class="registration-card__position">"⭐ " {position}</span>
                })}
            </div>
            {registration.prize_won.clone().map(|prize| view! {
                <div class="registration-card__prize">{format!("Won: {}", prize)}</div>
            })}
            {registration.registered_on.clone().map(|date| view! {
                <div class="registration-card__registered">{format!("Registered {}", date)}</div>
            })}
        </div>
    }
}

fn tournament_count_label(count: usize) -> String {
    match count {
        1 => "1 tournament".to_string(),
        n => format!("{} tournaments", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(tournament_count_label(0), "0 tournaments");
        assert_eq!(tournament_count_label(1), "1 tournament");
        assert_eq!(tournament_count_label(5), "5 tournaments");
    }
}

use crate::utils::auth::{use_auth_session, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use shared_types::NavTab;
use thaw::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_auth_session();
    let navigate = use_navigate();
    let location = use_location();
    let active_tab = RwSignal::new(NavTab::from_path(&location.pathname.get_untracked()));

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <A href="/" attr:class="navbar__brand">
                    <span class="navbar__logo-mark">"G"</span>
                    <span class="navbar__logo">"Game-On"</span>
                </A>

                {move || {
                    if session.is_signed_in() {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Subtle
                                class="navbar__signout"
                                on_click=move |_| session.sign_out()
                            >
                                "Sign out"
                            </Button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <A href=LOGIN_PATH attr:class="navbar__link navbar__link--cta">
                                "Login"
                            </A>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>

        <nav class="tabbar">
            <div class="tabbar__container">
                {NavTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let navigate = navigate.clone();
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if active_tab.get() == tab {
                                        "tabbar__item tabbar__item--active"
                                    } else {
                                        "tabbar__item"
                                    }
                                }
                                on:click=move |_| {
                                    active_tab.set(tab);
                                    navigate(tab.path(), Default::default());
                                }
                            >
                                <span class="tabbar__icon">{tab.icon()}</span>
                                <span class="tabbar__label">{tab.label()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </nav>
    }
}

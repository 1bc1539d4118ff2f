use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::utils::auth::provide_auth_session;
use crate::views::{
    auth::SignInPage, bookings::BookingsPage, home::HomePage, not_found::NotFoundPage,
    profile::ProfilePage, tournaments::TournamentsPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth_session();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/game_on.css"/>

        <Title text="Game-On"/>
        <Meta name="description" content="Discover and book sports venues and tournaments near you"/>

        <ConfigProvider>
            <Router>
                <main class="app">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("bookings") view=BookingsPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("tournaments") view=TournamentsPage/>
                        <Route path=StaticSegment("auth") view=SignInPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

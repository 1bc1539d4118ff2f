use crate::utils::auth::{login_redirect_url, use_auth_session};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn CheckingSessionState() -> impl IntoView {
    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-loading-title">"🔐 Checking your session..."</div>
            </div>
        </div>
    }
}

#[component]
pub fn SignInRedirectState() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get_untracked();
        let search = location.search.get_untracked();
        let return_to = if search.is_empty() {
            path
        } else {
            format!("{}?{}", path, search.trim_start_matches('?'))
        };
        navigate(&login_redirect_url(&return_to), Default::default());
    });

    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-denied-title">"Sign in required"</div>
                <div class="auth-guard-denied-subtitle">"Redirecting to login..."</div>
            </div>
        </div>
    }
}

/// Renders `children` only for a signed-in player; everyone else is sent to
/// the login page with a return path.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let session = use_auth_session();

    view! {
        <Show
            when=move || session.is_resolved()
            fallback=move || view! { <CheckingSessionState/> }
        >
            <Show
                when=move || session.is_signed_in()
                fallback=move || view! { <SignInRedirectState/> }
                clone:children
            >
                {children()}
            </Show>
        </Show>
    }
}

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found__code">"404"</div>
            <div class="not-found__card">
                <h1>"Out of Bounds"</h1>
                <p>"The page you're looking for doesn't exist or may have been moved."</p>

                <div class="not-found__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click={
                            let navigate = navigate.clone();
                            move |_| navigate("/", Default::default())
                        }
                    >
                        "🏠 Find a Court"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| navigate("/tournaments", Default::default())
                    >
                        "🏆 Tournaments"
                    </Button>
                </div>

                <button
                    type="button"
                    class="link-button"
                    on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            if let Ok(history) = window.history() {
                                let _ = history.back();
                            }
                        }
                    }
                >
                    "⬅ Go Back"
                </button>
            </div>
        </div>
    }
}

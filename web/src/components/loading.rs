use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(
    #[prop(optional, into)] message: Option<String>,
    /// Inline spinner for sections inside a page.
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let size = if compact { SpinnerSize::Small } else { SpinnerSize::Large };
    let class = if compact { "loading-container loading-container--compact" } else { "loading-container" };

    view! {
        <div class=class>
            <Spinner size=size />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Finding courts near you...".to_string())}
            </p>
        </div>
    }
}

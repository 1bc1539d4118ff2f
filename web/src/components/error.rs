use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ErrorView(
    message: Option<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-view">
            <MessageBar intent=MessageBarIntent::Error>
                {message.unwrap_or_else(|| "Something went wrong. Please try again.".to_string())}
            </MessageBar>
            {on_retry.map(|retry| view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| retry.run(())
                >
                    "Try again"
                </Button>
            })}
        </div>
    }
}

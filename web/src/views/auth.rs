use crate::utils::auth::{safe_redirect_target, use_auth_session};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use shared_types::Identity;
use thaw::*;

/// Stand-in sign-in. Any name and email are accepted.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_auth_session();
    let query_map = use_query_map();
    let navigate = use_navigate();

    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);

    let is_button_disabled = Memo::new(move |_| {
        display_name.with(|n| n.trim().is_empty()) || email.with(|e| e.trim().is_empty())
    });

    let submit_sign_in = move || {
        error_message.set(None);
        let identity = match build_identity(&display_name.get_untracked(), &email.get_untracked()) {
            Ok(identity) => identity,
            Err(message) => {
                error_message.set(Some(message.to_string()));
                return;
            }
        };

        leptos::logging::log!("Signed in as {}", identity.email);
        session.sign_in(identity);

        let target = safe_redirect_target(query_map.with_untracked(|q| q.get("redirect")));
        navigate(&target, Default::default());
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <div class="navbar__logo-mark">"G"</div>
                    <h1>"Welcome to Game-On"</h1>
                    <p>"Sign in to book courts and join tournaments"</p>
                </div>

                {move || {
                    error_message.get().map(|msg| view! {
                        <MessageBar intent=MessageBarIntent::Error>{msg}</MessageBar>
                    })
                }}

                <form on:submit={
                    let submit_sign_in = submit_sign_in.clone();
                    move |ev| {
                        ev.prevent_default();
                        submit_sign_in();
                    }
                }>
                    <div class="auth-form-group">
                        <label for="auth-name">"Name"</label>
                        <Input id="auth-name" placeholder="Your name" value=display_name/>
                    </div>
                    <div class="auth-form-group">
                        <label for="auth-email">"Email"</label>
                        <Input
                            id="auth-email"
                            placeholder="you@example.com"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>
                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::from(is_button_disabled)
                        class="auth-submit"
                    >
                        "Sign In"
                    </Button>
                </form>
            </div>
        </div>
    }
}

fn build_identity(display_name: &str, email: &str) -> Result<Identity, &'static str> {
    let display_name = display_name.trim();
    let email = email.trim().to_lowercase();
    if display_name.is_empty() {
        return Err("Please enter your name.");
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err("Please enter a valid email address.");
    }
    Ok(Identity {
        id: format!("player:{}", email),
        display_name: display_name.to_string(),
        email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_derived_from_trimmed_input() {
        let identity = build_identity("  Sara Ahmed ", " Sara@Example.com").unwrap();
        assert_eq!(identity.display_name, "Sara Ahmed");
        assert_eq!(identity.email, "sara@example.com");
        assert_eq!(identity.id, "player:sara@example.com");
    }

    #[test]
    fn rejects_blank_name_and_malformed_email() {
        assert!(build_identity("", "a@b.com").is_err());
        assert!(build_identity("Ali", "not-an-email").is_err());
        assert!(build_identity("Ali", "@b.com").is_err());
    }
}

use leptos::prelude::*;
use shared_types::Identity;

/// localStorage key holding the signed-in identity as JSON.
pub const SESSION_KEY: &str = "gameon_session";

pub const LOGIN_PATH: &str = "/auth";

/// Shared sign-in state, provided once at the app root.
#[derive(Debug, Clone, Copy)]
pub struct AuthSession {
    current_user: RwSignal<Option<Identity>>,
    // False until the stored session has been read on the client.
    resolved: RwSignal<bool>,
}

impl AuthSession {
    fn new() -> Self {
        Self {
            current_user: RwSignal::new(None),
            resolved: RwSignal::new(false),
        }
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.current_user.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.with(|user| user.is_some())
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get()
    }

    pub fn sign_in(&self, identity: Identity) {
        match serde_json::to_string(&identity) {
            Ok(raw) => storage::set(SESSION_KEY, &raw),
            Err(e) => leptos::logging::error!("Failed to persist session: {}", e),
        }
        self.current_user.set(Some(identity));
        self.resolved.set(true);
    }

    pub fn sign_out(&self) {
        storage::remove(SESSION_KEY);
        self.current_user.set(None);
    }
}

pub fn provide_auth_session() -> AuthSession {
    let session = AuthSession::new();

    // Effects only run in the browser, so SSR renders the unresolved state.
    Effect::new(move |_| {
        let stored = storage::get(SESSION_KEY).and_then(|raw| decode_identity(&raw));
        session.current_user.set(stored);
        session.resolved.set(true);
    });

    provide_context(session);
    session
}

pub fn use_auth_session() -> AuthSession {
    expect_context::<AuthSession>()
}

fn decode_identity(raw: &str) -> Option<Identity> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Identity>(raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            leptos::logging::warn!("Discarding unreadable stored session: {}", e);
            None
        }
    }
}

pub fn login_redirect_url(return_to: &str) -> String {
    format!("{}?redirect={}", LOGIN_PATH, urlencoding::encode(return_to))
}

/// Only same-origin paths are honoured as post-login destinations.
pub fn safe_redirect_target(redirect: Option<String>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/".to_string(),
    }
}

mod storage {
    #[cfg(feature = "hydrate")]
    mod local {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            pub fn getItem(key: &str) -> Option<String>;

            #[wasm_bindgen(js_namespace = localStorage)]
            pub fn setItem(key: &str, value: &str);

            #[wasm_bindgen(js_namespace = localStorage)]
            pub fn removeItem(key: &str);
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn get(key: &str) -> Option<String> {
        local::getItem(key)
    }

    #[cfg(feature = "hydrate")]
    pub fn set(key: &str, value: &str) {
        local::setItem(key, value);
    }

    #[cfg(feature = "hydrate")]
    pub fn remove(key: &str) {
        local::removeItem(key);
    }

    // No browser storage on the server.
    #[cfg(not(feature = "hydrate"))]
    pub fn get(_key: &str) -> Option<String> {
        None
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn set(_key: &str, _value: &str) {}

    #[cfg(not(feature = "hydrate"))]
    pub fn remove(_key: &str) {}
}

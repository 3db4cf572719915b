use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::user::User;

use super::session::{self, SessionState};
use super::{api, storage};

/// Owner of the single session instance. Cheap to copy into closures; all
/// mutation goes through the methods here.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::Unknown),
        }
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Resolve the stored token into a session, per the startup rules:
    /// no token means `Anonymous` without a network call; otherwise the
    /// profile fetch decides.
    pub async fn load_user(self) {
        match session::startup_state(storage::access_token().is_some()) {
            Some(resolved) => self.state.set(resolved),
            None => {
                let result = api::get_profile().await;
                if let Err(error) = &result {
                    log::warn!("profile fetch failed: {}", error);
                }
                self.state.set(session::after_profile_fetch(result));
            }
        }
    }

    /// Direct transition after login/registration; skips the redundant
    /// profile fetch.
    pub fn set_user(self, user: User) {
        self.state.set(SessionState::Authenticated(user));
    }

    /// Clear tokens and drop to `Anonymous`. Idempotent.
    pub fn logout(self) {
        storage::clear_tokens();
        self.state.set(SessionState::Anonymous);
    }

    /// Re-fetch the profile in the background (used after profile edits).
    pub fn refresh_user(self) {
        spawn_local(async move { self.load_user().await });
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionContext::new();

    // Restore the session from localStorage once on mount.
    Effect::new(move |_| {
        spawn_local(async move { session.load_user().await });
    });

    provide_context(session);

    children()
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}

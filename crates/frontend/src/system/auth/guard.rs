use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;
use super::session::SessionState;

/// Wrapper for pages that require a signed-in user.
/// Renders a loading shell until the session resolves, then either the
/// children or a redirect to the login entry point.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();

    view! {
        {move || match state.get() {
            SessionState::Unknown => {
                view! { <div class="page-loading">"Loading..."</div> }.into_any()
            }
            SessionState::Anonymous => view! { <Redirect path="/login" /> }.into_any(),
            SessionState::Authenticated(_) => children().into_any(),
        }}
    }
}

/// Wrapper for admin-only pages; signed-in non-admin users are sent back
/// home.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();

    view! {
        {move || match state.get() {
            SessionState::Unknown => {
                view! { <div class="page-loading">"Loading..."</div> }.into_any()
            }
            SessionState::Anonymous => view! { <Redirect path="/login" /> }.into_any(),
            SessionState::Authenticated(user) if !user.is_admin() => {
                view! { <Redirect path="/" /> }.into_any()
            }
            SessionState::Authenticated(_) => children().into_any(),
        }}
    }
}

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::use_session;

/// Top navigation bar. Links are role-aware: loans and profile for signed
/// in users, the admin panel for administrators only.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let navigate = use_navigate();

    let logout = move |_| {
        session.logout();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="/" class="navbar-brand">
                    "LibraryHub"
                </a>

                <div class="navbar-links">
                    <a href="/books">"Browse Books"</a>
                    <Show when=move || state.get().is_authenticated()>
                        <a href="/my-loans">"My Loans"</a>
                    </Show>
                    <Show when=move || state.get().is_admin()>
                        <a href="/admin">"Admin Panel"</a>
                    </Show>
                </div>

                <div class="navbar-session">
                    <Show
                        when=move || state.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/login">"Login"</a>
                                <a href="/register" class="btn-primary">
                                    "Register"
                                </a>
                            }
                        }
                    >
                        <a href="/profile" class="navbar-user">
                            {move || state.get().user().map(|u| u.full_name()).unwrap_or_default()}
                        </a>
                        <button class="btn-secondary" on:click=logout.clone()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

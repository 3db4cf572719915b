use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Session state is provided once, at the root; every view below reads
    // it through use_session().
    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}

use leptos::prelude::*;

use crate::system::auth::context::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let state = session.state();

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Welcome to LibraryHub"</h1>
                <p>
                    "Browse the catalog, borrow books online and keep track of "
                    "everything you have on loan."
                </p>
                <div class="hero-actions">
                    <a href="/books" class="btn-primary">
                        "Browse Books"
                    </a>
                    <Show when=move || !state.get().is_authenticated()>
                        <a href="/register" class="btn-secondary">
                            "Join for Free"
                        </a>
                    </Show>
                </div>
            </section>

            <section class="feature-grid">
                <div class="feature">
                    <h3>"Find your next read"</h3>
                    <p>"Search by title, author or ISBN and filter by category."</p>
                </div>
                <div class="feature">
                    <h3>"Borrow in one click"</h3>
                    <p>"See live availability and borrow any book with copies on the shelf."</p>
                </div>
                <div class="feature">
                    <h3>"Stay on schedule"</h3>
                    <p>"Track due dates, returns and overdue fines from your loans page."</p>
                </div>
            </section>
        </div>
    }
}

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <span class="footer-brand">"LibraryHub"</span>
                <span class="footer-note">
                    "Browse, borrow and manage your library books online."
                </span>
            </div>
        </footer>
    }
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::books::ui::admin::AdminPage;
use crate::domain::books::ui::list::BooksPage;
use crate::domain::loans::ui::list::MyLoansPage;
use crate::layout::footer::Footer;
use crate::layout::navbar::Navbar;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::register::RegisterPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="app-main">
                <Routes fallback=|| view! { <div class="page">"Page not found."</div> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/books") view=BooksPage />
                    <Route path=path!("/my-loans") view=MyLoansPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/admin") view=AdminPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::{api, context::use_session};
use crate::system::http::error::ApiError;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_value = username.get();
        let password_value = password.get();
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_value, password_value).await {
                Ok(_) => match api::get_profile().await {
                    Ok(user) => {
                        session.set_user(user);
                        navigate("/", Default::default());
                    }
                    Err(error) => {
                        set_error_message.set(Some(error.user_message()));
                        set_is_loading.set(false);
                    }
                },
                // a 401 here means the credentials were rejected, not that
                // a session expired
                Err(ApiError::Unauthorized) => {
                    set_error_message.set(Some("Invalid username or password.".to_string()));
                    set_is_loading.set(false);
                }
                Err(error) => {
                    set_error_message.set(Some(error.user_message()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h1>"LibraryHub"</h1>
                <h2>"Sign in to your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Your username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}

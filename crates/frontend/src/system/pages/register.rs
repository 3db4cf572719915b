use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::api;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Default)]
struct RegisterForm {
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    address: String,
    password: String,
    password2: String,
}

impl RegisterForm {
    /// Client-side validation. Failures are surfaced inline per field and
    /// never sent to the server.
    fn validate(&self) -> Vec<(&'static str, String)> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push(("username", "Username is required".to_string()));
        }
        if self.email.trim().is_empty() {
            errors.push(("email", "Email is required".to_string()));
        } else if !looks_like_email(self.email.trim()) {
            errors.push(("email", "Invalid email address".to_string()));
        }
        if self.first_name.trim().is_empty() {
            errors.push(("first_name", "First name is required".to_string()));
        }
        if self.last_name.trim().is_empty() {
            errors.push(("last_name", "Last name is required".to_string()));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            errors.push((
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }
        if self.password2 != self.password {
            errors.push(("password2", "Passwords do not match".to_string()));
        }
        errors
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password2: self.password2.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: optional(&self.phone_number),
            address: optional(&self.address),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn looks_like_email(value: &str) -> bool {
    match value.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let (field_errors, set_field_errors) = signal(Vec::<(&'static str, String)>::new());
    let (server_error, set_server_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let navigate = use_navigate();

    let error_for = move |field: &'static str| {
        field_errors
            .get()
            .into_iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = form.get();
        let errors = current.validate();
        if !errors.is_empty() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());
        set_server_error.set(None);
        set_is_loading.set(true);

        let request = current.to_request();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => navigate("/login", Default::default()),
                Err(error) => {
                    set_server_error.set(Some(error.user_message()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box auth-box-wide">
                <h1>"Create Account"</h1>
                <h2>"Join LibraryHub today"</h2>

                <Show when=move || server_error.get().is_some()>
                    <div class="error-message">
                        {move || server_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-grid">
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                type="text"
                                id="username"
                                placeholder="Choose a username"
                                prop:value=move || form.with(|f| f.username.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.username = event_target_value(&ev))
                                }
                                disabled=move || is_loading.get()
                            />
                            {move || {
                                error_for("username")
                                    .map(|message| {
                                        view! { <span class="field-error">{message}</span> }
                                    })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="your@email.com"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.email = event_target_value(&ev))
                                }
                                disabled=move || is_loading.get()
                            />
                            {move || {
                                error_for("email")
                                    .map(|message| {
                                        view! { <span class="field-error">{message}</span> }
                                    })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="first_name">"First Name"</label>
                            <input
                                type="text"
                                id="first_name"
                                placeholder="First name"
                                prop:value=move || form.with(|f| f.first_name.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.first_name = event_target_value(&ev))
                                }
                                disabled=move || is_loading.get()
                            />
                            {move || {
                                error_for("first_name")
                                    .map(|message| {
                                        view! { <span class="field-error">{message}</span> }
                                    })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="last_name">"Last Name"</label>
                            <input
                                type="text"
                                id="last_name"
                                placeholder="Last name"
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.last_name = event_target_value(&ev))
                                }
                                disabled=move || is_loading.get()
                            />
                            {move || {
                                error_for("last_name")
                                    .map(|message| {
                                        view! { <span class="field-error">{message}</span> }
                                    })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="phone_number">"Phone Number (optional)"</label>
                            <input
                                type="tel"
                                id="phone_number"
                                placeholder="Phone number"
                                prop:value=move || form.with(|f| f.phone_number.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.phone_number = event_target_value(&ev))
                                }
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="address">"Address (optional)"</label>
                            <input
                                type="text"
                                id="address"
                                placeholder="Address"
                                prop:value=move || form.with(|f| f.address.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.address = event_target_value(&ev))
                                }
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                placeholder="Create a password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.password = event_target_value(&ev))
                                }
                                disabled=move || is_loading.get()
                            />
                            {move || {
                                error_for("password")
                                    .map(|message| {
                                        view! { <span class="field-error">{message}</span> }
                                    })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="password2">"Confirm Password"</label>
                            <input
                                type="password"
                                id="password2"
                                placeholder="Confirm your password"
                                prop:value=move || form.with(|f| f.password2.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.password2 = event_target_value(&ev))
                                }
                                disabled=move || is_loading.get()
                            />
                            {move || {
                                error_for("password2")
                                    .map(|message| {
                                        view! { <span class="field-error">{message}</span> }
                                    })
                            }}
                        </div>
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> RegisterForm {
        RegisterForm {
            username: "reader".into(),
            email: "reader@example.com".into(),
            first_name: "Jo".into(),
            last_name: "March".into(),
            phone_number: String::new(),
            address: "  12 Orchard St  ".into(),
            password: "correct-horse".into(),
            password2: "correct-horse".into(),
        }
    }

    #[test]
    fn complete_form_passes_validation() {
        assert!(complete_form().validate().is_empty());
    }

    #[test]
    fn missing_required_fields_are_each_reported() {
        let form = RegisterForm::default();
        let errors = form.validate();
        let fields: Vec<&str> = errors.iter().map(|(field, _)| *field).collect();
        assert!(fields.contains(&"username"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"first_name"));
        assert!(fields.contains(&"last_name"));
        assert!(fields.contains(&"password"));
    }

    #[test]
    fn short_password_and_mismatch_are_rejected() {
        let mut form = complete_form();
        form.password = "short".into();
        form.password2 = "different".into();
        let fields: Vec<&str> = form.validate().iter().map(|(field, _)| *field).collect();
        assert!(fields.contains(&"password"));
        assert!(fields.contains(&"password2"));
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("missing-at.example.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("user@nodot"));
        assert!(!looks_like_email("user@.com"));
    }

    #[test]
    fn optional_fields_are_omitted_when_blank() {
        let request = complete_form().to_request();
        assert_eq!(request.phone_number, None);
        assert_eq!(request.address.as_deref(), Some("12 Orchard St"));
    }
}

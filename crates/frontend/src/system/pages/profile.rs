use contracts::domain::user::User;
use contracts::system::auth::UpdateProfileRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::date_utils::format_date;
use crate::system::auth::api;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAuth;

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfileContent />
        </RequireAuth>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let session = use_session();
    let state = session.state();

    // RequireAuth guarantees an authenticated session here; re-rendering
    // on user changes keeps the form prefill in sync after updates.
    view! {
        {move || {
            state
                .get()
                .user()
                .cloned()
                .map(|user| view! { <ProfileForms user=user /> })
        }}
    }
}

#[component]
fn ProfileForms(user: User) -> impl IntoView {
    let session = use_session();

    let username_text = user.username.clone();
    let role_text = if user.is_admin() { "Administrator" } else { "Member" };
    let joined_text = format_date(&user.date_joined);

    let (first_name, set_first_name) = signal(user.first_name.clone());
    let (last_name, set_last_name) = signal(user.last_name.clone());
    let (email, set_email) = signal(user.email.clone());
    let (phone_number, set_phone_number) = signal(user.phone_number.clone().unwrap_or_default());
    let (address, set_address) = signal(user.address.clone().unwrap_or_default());

    // (is_error, text)
    let (profile_notice, set_profile_notice) = signal(Option::<(bool, String)>::None);
    let (is_saving, set_is_saving) = signal(false);

    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (new_password2, set_new_password2) = signal(String::new());
    let (password_notice, set_password_notice) = signal(Option::<(bool, String)>::None);
    let (is_changing_password, set_is_changing_password) = signal(false);

    let on_submit_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_is_saving.set(true);
        set_profile_notice.set(None);

        let request = UpdateProfileRequest {
            first_name: Some(first_name.get()),
            last_name: Some(last_name.get()),
            email: Some(email.get()),
            phone_number: Some(phone_number.get()),
            address: Some(address.get()),
        };
        spawn_local(async move {
            match api::update_profile(&request).await {
                Ok(_) => {
                    session.refresh_user();
                    set_profile_notice
                        .set(Some((false, "Profile updated successfully.".to_string())));
                }
                Err(error) => set_profile_notice.set(Some((true, error.user_message()))),
            }
            set_is_saving.set(false);
        });
    };

    let on_submit_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let new_value = new_password.get();
        let confirm_value = new_password2.get();
        if new_value.len() < MIN_PASSWORD_LEN {
            set_password_notice.set(Some((
                true,
                format!("New password must be at least {} characters.", MIN_PASSWORD_LEN),
            )));
            return;
        }
        if new_value != confirm_value {
            set_password_notice.set(Some((true, "Passwords do not match.".to_string())));
            return;
        }

        set_is_changing_password.set(true);
        set_password_notice.set(None);

        let old_value = old_password.get();
        spawn_local(async move {
            match api::change_password(old_value, new_value, confirm_value).await {
                Ok(()) => {
                    set_old_password.set(String::new());
                    set_new_password.set(String::new());
                    set_new_password2.set(String::new());
                    set_password_notice
                        .set(Some((false, "Password changed successfully.".to_string())));
                }
                Err(error) => set_password_notice.set(Some((true, error.user_message()))),
            }
            set_is_changing_password.set(false);
        });
    };

    let notice_view = |notice: Option<(bool, String)>| {
        notice.map(|(is_error, text)| {
            let class = if is_error { "error-message" } else { "success-message" };
            view! { <div class=class>{text}</div> }
        })
    };

    view! {
        <div class="page profile-page">
            <h1>"My Profile"</h1>
            <p class="page-subtitle">"Manage your account information"</p>

            <div class="card">
                <h2>"Account"</h2>
                <dl class="account-info">
                    <dt>"Username"</dt>
                    <dd>{username_text}</dd>
                    <dt>"Role"</dt>
                    <dd>{role_text}</dd>
                    <dt>"Member since"</dt>
                    <dd>{joined_text}</dd>
                </dl>
            </div>

            <div class="card">
                <h2>"Profile Details"</h2>
                {move || notice_view(profile_notice.get())}
                <form on:submit=on_submit_profile>
                    <div class="form-grid">
                        <div class="form-group">
                            <label for="first_name">"First Name"</label>
                            <input
                                type="text"
                                id="first_name"
                                prop:value=move || first_name.get()
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_saving.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="last_name">"Last Name"</label>
                            <input
                                type="text"
                                id="last_name"
                                prop:value=move || last_name.get()
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_saving.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_saving.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="phone_number">"Phone Number"</label>
                            <input
                                type="tel"
                                id="phone_number"
                                prop:value=move || phone_number.get()
                                on:input=move |ev| set_phone_number.set(event_target_value(&ev))
                                disabled=move || is_saving.get()
                            />
                        </div>
                        <div class="form-group form-group-wide">
                            <label for="address">"Address"</label>
                            <input
                                type="text"
                                id="address"
                                prop:value=move || address.get()
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                                disabled=move || is_saving.get()
                            />
                        </div>
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </div>

            <div class="card">
                <h2>"Change Password"</h2>
                {move || notice_view(password_notice.get())}
                <form on:submit=on_submit_password>
                    <div class="form-group">
                        <label for="old_password">"Current Password"</label>
                        <input
                            type="password"
                            id="old_password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| set_old_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_changing_password.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="new_password">"New Password"</label>
                        <input
                            type="password"
                            id="new_password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_changing_password.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="new_password2">"Confirm New Password"</label>
                        <input
                            type="password"
                            id="new_password2"
                            prop:value=move || new_password2.get()
                            on:input=move |ev| set_new_password2.set(event_target_value(&ev))
                            required
                            disabled=move || is_changing_password.get()
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_changing_password.get()
                    >
                        {move || {
                            if is_changing_password.get() { "Changing..." } else { "Change Password" }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

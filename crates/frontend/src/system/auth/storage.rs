use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Get refresh token from localStorage
pub fn refresh_token() -> Option<String> {
    local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

/// Persist both tokens after a login
pub fn save_tokens(access: &str, refresh: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
    }
}

/// Persist a fresh access token; the refresh token is left unchanged
pub fn save_access_token(access: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
    }
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

/// Whether the stored access token is past its embedded expiry. A missing
/// or undecodable token counts as expired.
pub fn is_access_token_expired() -> bool {
    let now = (js_sys::Date::now() / 1000.0) as u64;
    match access_token() {
        Some(token) => contracts::system::auth::is_expired_at(&token, now),
        None => true,
    }
}

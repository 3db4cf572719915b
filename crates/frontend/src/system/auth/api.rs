use contracts::domain::user::User;
use contracts::system::auth::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, RegisterResponse, TokenPairResponse,
    UpdateProfileRequest,
};

use crate::system::http::client;
use crate::system::http::error::ApiError;

use super::storage;

/// Exchange credentials for a token pair and persist it.
pub async fn login(username: String, password: String) -> Result<TokenPairResponse, ApiError> {
    let request = LoginRequest { username, password };
    let tokens: TokenPairResponse = client::post("/auth/login/", &request).await?;
    storage::save_tokens(&tokens.access, &tokens.refresh);
    Ok(tokens)
}

/// Create a new account. The caller logs in separately afterwards.
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    client::post("/auth/register/", request).await
}

/// Fetch the signed-in user's profile
pub async fn get_profile() -> Result<User, ApiError> {
    client::get("/auth/profile/").await
}

/// Partial profile update; returns the server's view of the user
pub async fn update_profile(request: &UpdateProfileRequest) -> Result<User, ApiError> {
    client::patch("/auth/profile/", request).await
}

/// Change password
pub async fn change_password(
    old_password: String,
    new_password: String,
    new_password2: String,
) -> Result<(), ApiError> {
    let request = ChangePasswordRequest {
        old_password,
        new_password,
        new_password2,
    };
    client::post_no_content("/auth/change-password/", &request).await
}

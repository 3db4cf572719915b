//! HTTP gateway. Attaches the bearer token to every outbound request and
//! drives the single-shot 401 recovery protocol from
//! [`protocol`](super::protocol).

use contracts::system::auth::{RefreshRequest, RefreshResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

use super::error::ApiError;
use super::protocol::{RecoveryAction, UnauthorizedRecovery};

#[derive(Debug, Clone, Copy)]
enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Self::Get => Request::get(url),
            Self::Post => Request::post(url),
            Self::Patch => Request::patch(url),
            Self::Delete => Request::delete(url),
        }
    }
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    parse_json(send(HttpMethod::Get, path, None).await?).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = to_body(body)?;
    parse_json(send(HttpMethod::Post, path, Some(body)).await?).await
}

/// POST without a request body (e.g. the loan return action).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    parse_json(send(HttpMethod::Post, path, None).await?).await
}

/// POST that expects a bodyless success (204 No Content).
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let body = to_body(body)?;
    expect_success(send(HttpMethod::Post, path, Some(body)).await?).await
}

pub async fn patch<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let body = to_body(body)?;
    parse_json(send(HttpMethod::Patch, path, Some(body)).await?).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    expect_success(send(HttpMethod::Delete, path, None).await?).await
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|error| ApiError::Decode(error.to_string()))
}

/// Issue a request, running the recovery protocol on 401: at most one
/// refresh-and-resubmit per original request, then the response is
/// surfaced whatever it is.
async fn send(method: HttpMethod, path: &str, body: Option<Value>) -> Result<Response, ApiError> {
    let url = api_url(path);
    let mut recovery = UnauthorizedRecovery::new();
    loop {
        let response = attempt(method, &url, body.as_ref()).await?;
        if response.status() != 401 {
            return Ok(response);
        }
        match recovery.on_unauthorized(storage::refresh_token()) {
            RecoveryAction::Refresh(refresh) => match refresh_access_token(&refresh).await {
                Ok(access) => {
                    // the refresh token stays as it was; the loop resubmits
                    // the original request with the fresh access token
                    storage::save_access_token(&access);
                }
                Err(error) => {
                    log::warn!("token refresh failed: {}", error);
                    drop_session();
                    return Err(error);
                }
            },
            RecoveryAction::Surface => return Ok(response),
            RecoveryAction::ClearSession => {
                drop_session();
                return Err(ApiError::Unauthorized);
            }
        }
    }
}

/// One transport round-trip. The bearer token is attached unconditionally
/// when present; expiry is never pre-checked — the 401 is the trigger.
async fn attempt(
    method: HttpMethod,
    url: &str,
    body: Option<&Value>,
) -> Result<Response, ApiError> {
    let mut builder = method.builder(url);
    if let Some(token) = storage::access_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    let result = match body {
        Some(json) => {
            builder
                .json(json)
                .map_err(|error| ApiError::Decode(error.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    result.map_err(|error| ApiError::Network(error.to_string()))
}

/// Dedicated, non-intercepted token refresh call.
async fn refresh_access_token(refresh: &str) -> Result<String, ApiError> {
    let request = RefreshRequest {
        refresh: refresh.to_string(),
    };
    let response = Request::post(&api_url("/auth/token/refresh/"))
        .json(&request)
        .map_err(|error| ApiError::Decode(error.to_string()))?
        .send()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))?;
    let parsed: RefreshResponse = parse_json(response).await?;
    Ok(parsed.access)
}

/// Irrecoverable credential failure: clear both tokens and send the
/// client to the login entry point.
fn drop_session() {
    storage::clear_tokens();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(into_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|error| ApiError::Decode(error.to_string()))
}

async fn expect_success(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(into_error(response).await);
    }
    Ok(())
}

async fn into_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<Value>().await.ok();
    ApiError::from_status(status, body.as_ref())
}

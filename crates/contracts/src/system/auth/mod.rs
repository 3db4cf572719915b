use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::domain::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: User,
    pub message: String,
}

/// Partial profile update; absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub new_password2: String,
}

/// Claims carried in the access token payload. The client decodes the
/// payload segment without verifying the signature; validation is the
/// server's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    /// Expiry instant, UTC seconds.
    pub exp: u64,
    #[serde(default)]
    pub iat: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenDecodeError {
    #[error("token is not a three-segment JWT")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Base64,
    #[error("token payload is not a valid claims object")]
    Claims,
}

/// Decode the claims segment of a bearer token.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenDecodeError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => return Err(TokenDecodeError::Malformed),
    };
    if segments.next().is_some() {
        return Err(TokenDecodeError::Malformed);
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenDecodeError::Base64)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenDecodeError::Claims)
}

/// Whether `token` is expired at `now` (UTC seconds). A token that cannot
/// be decoded is reported expired.
pub fn is_expired_at(token: &str, now: u64) -> bool {
    match decode_claims(token) {
        Ok(claims) => now > claims.exp,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{}.{}.signature", header, body)
    }

    fn token_expiring_at(exp: u64) -> String {
        token_with_payload(&serde_json::json!({ "user_id": 7, "exp": exp }))
    }

    #[test]
    fn decodes_claims_from_well_formed_token() {
        let token = token_with_payload(&serde_json::json!({
            "user_id": 42,
            "username": "reader",
            "exp": 1_700_000_000u64,
            "iat": 1_699_999_000u64,
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username.as_deref(), Some("reader"));
        assert_eq!(claims.exp, 1_700_000_000);
        assert_eq!(claims.iat, Some(1_699_999_000));
    }

    #[test]
    fn tolerates_absent_optional_claims() {
        let token = token_with_payload(&serde_json::json!({ "user_id": 1, "exp": 10u64 }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.username, None);
        assert_eq!(claims.iat, None);
    }

    #[test]
    fn rejects_tokens_without_three_segments() {
        assert_eq!(decode_claims("not-a-token"), Err(TokenDecodeError::Malformed));
        assert_eq!(decode_claims("one.two"), Err(TokenDecodeError::Malformed));
        assert_eq!(
            decode_claims("a.b.c.d"),
            Err(TokenDecodeError::Malformed)
        );
    }

    #[test]
    fn rejects_payload_that_is_not_base64url() {
        assert_eq!(
            decode_claims("header.!!!.signature"),
            Err(TokenDecodeError::Base64)
        );
    }

    #[test]
    fn rejects_payload_without_expiry() {
        let token = token_with_payload(&serde_json::json!({ "user_id": 1 }));
        assert_eq!(decode_claims(&token), Err(TokenDecodeError::Claims));
    }

    #[test]
    fn not_expired_strictly_before_the_expiry_instant() {
        let token = token_expiring_at(1_000);
        assert!(!is_expired_at(&token, 999));
    }

    #[test]
    fn expired_strictly_after_the_expiry_instant() {
        let token = token_expiring_at(1_000);
        assert!(is_expired_at(&token, 1_001));
    }

    #[test]
    fn malformed_token_is_always_expired() {
        assert!(is_expired_at("garbage", 0));
        assert!(is_expired_at("", u64::MAX));
        assert!(is_expired_at("a.b.c", 0));
    }
}

//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{error::AppError, AppState};

/// Extractor for a caller authenticated via HTTP Basic credentials.
///
/// The accepted account comes from [`crate::config::AuthConfig`] carried in
/// the application state; there is no ambient credential store.
pub struct BasicUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for BasicUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let (username, password) = decode_basic_credentials(auth_header).ok_or_else(|| {
            AppError::Authentication("Invalid authorization header format".to_string())
        })?;

        let account = &state.config.auth;
        if username != account.username || password != account.password {
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        Ok(BasicUser(username))
    }
}

/// Parse an `Authorization: Basic` header value into its credential pair.
fn decode_basic_credentials(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_header() {
        // base64("admin:password")
        let parsed = decode_basic_credentials("Basic YWRtaW46cGFzc3dvcmQ=");
        assert_eq!(
            parsed,
            Some(("admin".to_string(), "password".to_string()))
        );
    }

    #[test]
    fn password_may_contain_colons() {
        let encoded = STANDARD.encode("admin:pa:ss");
        let parsed = decode_basic_credentials(&format!("Basic {}", encoded));
        assert_eq!(parsed, Some(("admin".to_string(), "pa:ss".to_string())));
    }

    #[test]
    fn rejects_non_basic_schemes() {
        assert_eq!(decode_basic_credentials("Bearer abcdef"), None);
    }

    #[test]
    fn rejects_invalid_base64() {
        assert_eq!(decode_basic_credentials("Basic ???"), None);
    }

    #[test]
    fn rejects_missing_separator() {
        let encoded = STANDARD.encode("admin");
        assert_eq!(decode_basic_credentials(&format!("Basic {}", encoded)), None);
    }
}

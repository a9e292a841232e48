//! Authentication against the Satchel One OAuth endpoint
//!
//! The API uses a plain password grant: username, password and school id
//! are exchanged for a bearer token, with the web client's application
//! credentials passed as query parameters.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::log_debug;

/// Shared HTTP client for unauthenticated calls (token exchange, public search)
pub(crate) static HTTP: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config::TIMEOUT_SECONDS))
        .build()
        .expect("failed to build HTTP client")
});

/// Token response from the OAuth endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Auth {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub user_id: Option<i64>,
    pub school_id: Option<i64>,
}

impl Auth {
    /// The token formatted as an `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Exchange a username/password for a bearer token.
///
/// A 401 from the token endpoint means the credentials (or school id) were
/// rejected and maps to [`ApiError::InvalidCredentials`].
pub async fn authenticate(username: &str, password: &str, school_id: i64) -> ApiResult<Auth> {
    let school_id_param = school_id.to_string();
    let form = [
        ("grant_type", "password"),
        ("username", username),
        ("password", password),
        ("school_id", school_id_param.as_str()),
    ];
    let params = [
        ("client_id", config::CLIENT_ID),
        ("client_secret", config::CLIENT_SECRET),
    ];

    log_debug!("[POST] token exchange for school_id={}", school_id);
    let response = HTTP
        .post(config::auth_token_url())
        .query(&params)
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::InvalidCredentials {
            username: username.to_string(),
            school_id,
        });
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::unexpected(status.as_u16(), body));
    }

    Ok(response.json().await?)
}

/// Check that a caller-supplied token carries the exact `Bearer ` prefix
pub(crate) fn validate_bearer(token: &str) -> ApiResult<()> {
    if !token.starts_with("Bearer ") {
        return Err(ApiError::InvalidAuth(
            "token must start with 'Bearer ' (with capitalization)".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_prefix_validation() {
        assert!(validate_bearer("Bearer abc123").is_ok());
        assert!(validate_bearer("bearer abc123").is_err());
        assert!(validate_bearer("abc123").is_err());
        assert!(validate_bearer("").is_err());
    }

    #[test]
    fn test_auth_bearer_formatting() {
        let auth: Auth = serde_json::from_str(
            r#"{"access_token": "tok", "token_type": "Bearer", "user_id": 12}"#,
        )
        .unwrap();
        assert_eq!(auth.bearer(), "Bearer tok");
        assert_eq!(auth.user_id, Some(12));
    }
}

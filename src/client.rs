//! Authenticated Satchel One API client

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONNECTION};
use reqwest::StatusCode;
use url::Url;

use crate::auth::{self, validate_bearer};
use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::log_debug;
use crate::models::{School, Student};

/// School and student records fetched once at login
#[derive(Debug, Clone)]
pub(crate) struct SessionCache {
    pub(crate) school: School,
    pub(crate) student: Student,
}

/// Client bound to one authenticated student session.
///
/// Construction fetches the current school and student so the cached
/// accessors ([`Client::school`], [`Client::student`]) never touch the
/// network. Use [`Client::refresh`] to re-fetch both.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base: String,
    pub user_id: i64,
    pub school_id: i64,
    pub(crate) cache: Option<SessionCache>,
}

impl Client {
    /// Log in with an existing bearer token.
    ///
    /// The token must carry the exact `Bearer ` prefix; this is checked
    /// before any network I/O.
    pub async fn login(token: &str, user_id: i64, school_id: i64) -> ApiResult<Self> {
        validate_bearer(token)?;

        let base = config::api_base();
        let base = Url::parse(&base)?.as_str().trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(config::ACCEPT_HEADER));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        let mut auth_value = HeaderValue::from_str(token)
            .map_err(|_| ApiError::InvalidAuth("token contains invalid characters".to_string()))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config::TIMEOUT_SECONDS))
            .build()?;

        let mut client = Self {
            http,
            base,
            user_id,
            school_id,
            cache: None,
        };

        log_debug!("Priming session cache for user_id={}", user_id);
        client.refresh().await?;
        Ok(client)
    }

    /// Exchange credentials for a token, then log in.
    ///
    /// The token response carries the user id; the passed `school_id` is
    /// used both for the grant and the session.
    pub async fn from_credentials(
        username: &str,
        password: &str,
        school_id: i64,
    ) -> ApiResult<Self> {
        let auth = auth::authenticate(username, password, school_id).await?;
        let user_id = auth.user_id.ok_or_else(|| {
            ApiError::InvalidAuth("token response did not include a user id".to_string())
        })?;
        Self::login(&auth.bearer(), user_id, school_id).await
    }

    /// Re-fetch the cached school and student records
    pub async fn refresh(&mut self) -> ApiResult<()> {
        let school = self.fetch_school().await?;
        let student = self.fetch_student(&Default::default()).await?;
        self.cache = Some(SessionCache { school, student });
        Ok(())
    }

    /// The student's school, as fetched at login
    pub fn school(&self) -> &School {
        &self.cache.as_ref().expect("cache primed at login").school
    }

    /// The authenticated student, as fetched at login
    pub fn student(&self) -> &Student {
        &self.cache.as_ref().expect("cache primed at login").student
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<reqwest::Response> {
        log_debug!("[GET] request: {} params={:?}", path, params);
        let response = self.http.get(self.url(path)).query(params).send().await?;
        Ok(response)
    }

    pub(crate) async fn put(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> ApiResult<reqwest::Response> {
        log_debug!("[PUT] request: {}", path);
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Ok(response)
    }

    pub(crate) async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> ApiResult<reqwest::Response> {
        log_debug!("[POST] request: {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Ok(response)
    }

    /// POST with no body and no Content-Type, for event-style endpoints
    pub(crate) async fn post_empty(&self, path: &str) -> ApiResult<reqwest::Response> {
        log_debug!("[POST] request: {}", path);
        let response = self.http.post(self.url(path)).send().await?;
        Ok(response)
    }

    /// Map non-2xx statuses to errors. 404 is not handled here: lookups
    /// check it first so they can report the missing resource.
    pub(crate) async fn expect_success(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<reqwest::Response> {
        let status = response.status();
        match status {
            _ if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(ApiError::InvalidAuth(format!(
                "request rejected for user_id={}",
                self.user_id
            ))),
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimit),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::unexpected(status.as_u16(), body))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_rejects_bad_prefix() {
        let result = Client::login("bearer lowercase", 1, 2).await;
        assert!(matches!(result, Err(ApiError::InvalidAuth(_))));

        let result = Client::login("token-without-prefix", 1, 2).await;
        assert!(matches!(result, Err(ApiError::InvalidAuth(_))));
    }

    #[test]
    fn test_url_joining() {
        let client = Client {
            http: reqwest::Client::new(),
            base: "https://api.satchelone.com/api".to_string(),
            user_id: 1,
            school_id: 2,
            cache: None,
        };
        assert_eq!(
            client.url("todos/55"),
            "https://api.satchelone.com/api/todos/55"
        );
    }

    #[test]
    fn test_post_empty_sends_no_body() {
        let client = Client {
            http: reqwest::Client::new(),
            base: "https://api.satchelone.com/api".to_string(),
            user_id: 1,
            school_id: 2,
            cache: None,
        };
        let request = client
            .http
            .post(client.url("icalendars/reset_calendar_token"))
            .build()
            .unwrap();
        assert!(request.body().is_none());
        assert!(!request
            .headers()
            .contains_key(reqwest::header::CONTENT_TYPE));
    }
}

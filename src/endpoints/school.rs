//! School endpoints, including the unauthenticated public search

use serde::Deserialize;
use serde_json::Value;

use crate::auth::HTTP;
use crate::client::Client;
use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::log_debug;
use crate::models::{PublicSchool, PublicSchoolSearch, School, Subject};

#[derive(Debug, Deserialize)]
struct SubjectsResponse {
    subjects: Vec<Subject>,
}

#[derive(Debug, Deserialize)]
struct SchoolSearchResponse {
    schools: Vec<PublicSchool>,
    #[serde(default)]
    meta: Option<SchoolSearchMeta>,
}

#[derive(Debug, Deserialize, Default)]
struct SchoolSearchMeta {
    count: Option<i64>,
    offset: Option<i64>,
    limit: Option<i64>,
}

impl Client {
    /// Fetch the student's school from the API.
    ///
    /// Issues two requests: the school record and its subject list. For
    /// the cached copy use [`Client::school`].
    pub async fn fetch_school(&self) -> ApiResult<School> {
        let params = [("include", "school".to_string())];
        let response = self
            .get(&format!("students/{}", self.user_id), &params)
            .await?;
        let response = self.expect_success(response).await?;
        let mut body: Value = response.json().await?;

        let school = body
            .get_mut("schools")
            .and_then(Value::as_array_mut)
            .and_then(|schools| schools.first_mut())
            .map(Value::take)
            .ok_or_else(|| ApiError::unexpected(200, "response missing 'schools'"))?;
        let mut school: School = serde_json::from_value(school)?;

        let params = [("school_id", self.school_id.to_string())];
        let response = self.get("subjects", &params).await?;
        let response = self.expect_success(response).await?;
        let body: SubjectsResponse = response.json().await?;
        school.subjects = body.subjects;

        Ok(school)
    }
}

// The search runs on the shared unauthenticated client, so the session
// headers are attached per request here.
fn search_request(filter: &str, limit: u32) -> reqwest::RequestBuilder {
    let params = [("filter", filter.to_string()), ("limit", limit.to_string())];
    HTTP.get(format!("{}/public/school_search", config::api_base()))
        .header(reqwest::header::ACCEPT, config::ACCEPT_HEADER)
        .header(reqwest::header::CONNECTION, "keep-alive")
        .query(&params)
}

/// Search public school records by name. No authentication required.
pub async fn get_public_schools(filter: &str, limit: u32) -> ApiResult<PublicSchoolSearch> {
    log_debug!("Public school search: filter={:?} limit={}", filter, limit);
    let response = search_request(filter, limit).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::unexpected(status.as_u16(), body));
    }

    let body: SchoolSearchResponse = response.json().await?;
    let meta = body.meta.unwrap_or_default();
    Ok(PublicSchoolSearch {
        schools: body.schools,
        count: meta.count,
        offset: meta.offset,
        limit: meta.limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_with_meta() {
        let json = r#"{
            "schools": [{"id": 1, "name": "Example High School", "subdomain": "examplehigh"}],
            "meta": {"count": 1, "offset": 0, "limit": 20}
        }"#;
        let body: SchoolSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.schools.len(), 1);
        assert_eq!(body.meta.unwrap().count, Some(1));
    }

    #[test]
    fn test_search_request_headers() {
        let request = search_request("Example", 20).build().unwrap();
        assert_eq!(
            request.headers()[reqwest::header::ACCEPT],
            config::ACCEPT_HEADER
        );
        assert_eq!(request.headers()[reqwest::header::CONNECTION], "keep-alive");
        assert!(request.url().query().unwrap().contains("filter=Example"));
    }

    #[test]
    fn test_search_response_without_meta() {
        let json = r#"{"schools": []}"#;
        let body: SchoolSearchResponse = serde_json::from_str(json).unwrap();
        assert!(body.schools.is_empty());
        assert!(body.meta.is_none());
    }
}

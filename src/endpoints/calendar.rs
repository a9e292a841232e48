//! Personal and school calendar endpoints

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::{PersonalCalendarTask, SchoolCalendarTask};

#[derive(Debug, Deserialize)]
struct PersonalCalendarResponse {
    personal_calendar_tasks: Vec<PersonalCalendarTask>,
}

#[derive(Debug, Deserialize)]
struct SchoolCalendarResponse {
    calendars: Vec<SchoolCalendarTask>,
}

impl Client {
    /// Get the student's personal calendar tasks for a date (today if `None`)
    pub async fn get_calendar(
        &self,
        date: Option<NaiveDate>,
    ) -> ApiResult<Vec<PersonalCalendarTask>> {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let params = [("date", date.format("%Y-%m-%d").to_string())];

        let response = self.get("personal_calendar_tasks", &params).await?;
        let response = self.expect_success(response).await?;
        let body: PersonalCalendarResponse = response.json().await?;
        Ok(body.personal_calendar_tasks)
    }

    /// Get the school-wide calendar for a date (today if `None`).
    /// The school's subdomain comes from the cached school record.
    pub async fn get_school_calendar(
        &self,
        date: Option<NaiveDate>,
    ) -> ApiResult<Vec<SchoolCalendarTask>> {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let params = [
            ("date", date.format("%Y-%m-%d").to_string()),
            ("subdomain", self.school().subdomain.clone()),
        ];

        let response = self.get("calendars", &params).await?;
        let response = self.expect_success(response).await?;
        let body: SchoolCalendarResponse = response.json().await?;
        Ok(body.calendars)
    }

    /// Invalidate the student's iCalendar feed token and refresh the
    /// session cache so the new token is visible.
    pub async fn reset_calendar_token(&mut self) -> ApiResult<()> {
        let response = self.post_empty("icalendars/reset_calendar_token").await?;
        self.expect_success(response).await?;
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_envelopes() {
        let json = r#"{"personal_calendar_tasks": [{"id": 1, "title": "Read chapter 4"}]}"#;
        let body: PersonalCalendarResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.personal_calendar_tasks[0].title, "Read chapter 4");

        let json = r#"{"calendars": [{"id": 2, "title": "Sports day"}]}"#;
        let body: SchoolCalendarResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.calendars[0].id, 2);
    }
}

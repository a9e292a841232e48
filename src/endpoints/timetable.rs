//! Timetable endpoint

use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::TimetableInterface;

/// The timetable API keys weeks by their Monday
fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

impl Client {
    /// Get the timetable for the week containing `date` (this week if `None`)
    pub async fn get_timetable(&self, date: Option<NaiveDate>) -> ApiResult<TimetableInterface> {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let week_start = monday_of(date);
        let params = [("requestDate", week_start.format("%Y-%m-%d").to_string())];

        let path = format!(
            "timetable/school/{}/student/{}",
            self.school_id, self.user_id
        );
        let response = self.get(&path, &params).await?;
        let response = self.expect_success(response).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monday_of_week() {
        let wednesday: NaiveDate = "2024-04-10".parse().unwrap();
        assert_eq!(monday_of(wednesday), "2024-04-08".parse().unwrap());

        let monday: NaiveDate = "2024-04-08".parse().unwrap();
        assert_eq!(monday_of(monday), monday);

        let sunday: NaiveDate = "2024-04-14".parse().unwrap();
        assert_eq!(monday_of(sunday), "2024-04-08".parse().unwrap());
    }

    #[test]
    fn test_monday_across_month_boundary() {
        let first: NaiveDate = "2024-05-01".parse().unwrap(); // a Wednesday
        assert_eq!(monday_of(first), "2024-04-29".parse().unwrap());
    }
}

//! Behaviour (praise) endpoints

use serde_json::Value;

use crate::client::Client;
use crate::error::{ApiError, ApiResult};
use crate::models::{Behaviour, PraiseSummary};

impl Client {
    /// Get the student's behaviour breakdown with a page of praise entries.
    ///
    /// Issues two requests: the breakdown report and the praise summary.
    pub async fn get_behaviour(&self, limit: u32, offset: u32) -> ApiResult<Behaviour> {
        let params = [
            ("student_id", self.user_id.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        let response = self
            .get("behaviour_breakdown_report_entries", &params)
            .await?;
        let response = self.expect_success(response).await?;
        let mut body: Value = response.json().await?;

        let kudos = body
            .get_mut("student_kudos")
            .map(Value::take)
            .ok_or_else(|| ApiError::unexpected(200, "response missing 'student_kudos'"))?;
        let mut behaviour: Behaviour = serde_json::from_value(kudos)?;

        let response = self
            .get(
                &format!("student_praise_summaries/{}", self.user_id),
                &[],
            )
            .await?;
        let response = self.expect_success(response).await?;
        let mut body: Value = response.json().await?;
        let summary = body
            .get_mut("student_praise_summary")
            .map(Value::take)
            .ok_or_else(|| {
                ApiError::unexpected(200, "response missing 'student_praise_summary'")
            })?;
        let summary: PraiseSummary = serde_json::from_value(summary)?;
        behaviour.student_praise_summary = Some(summary);

        Ok(behaviour)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Behaviour;

    #[test]
    fn test_kudos_envelope() {
        let json = r#"{
            "student_kudos": {
                "total_points": 17,
                "student_praises": [{"id": 4, "points": 1, "comment": "Helpful in class"}]
            }
        }"#;
        let mut body: serde_json::Value = serde_json::from_str(json).unwrap();
        let kudos = body.get_mut("student_kudos").unwrap().take();
        let behaviour: Behaviour = serde_json::from_value(kudos).unwrap();
        assert_eq!(behaviour.total_points, Some(17));
        assert_eq!(behaviour.student_praises.len(), 1);
        assert!(behaviour.student_praise_summary.is_none());
    }
}

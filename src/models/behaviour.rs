//! Behaviour (kudos/praise) models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Behaviour breakdown for the student: praise entries plus their summary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Behaviour {
    #[serde(default)]
    pub total_points: Option<i64>,
    #[serde(default)]
    pub positive_count: Option<i64>,
    #[serde(default)]
    pub negative_count: Option<i64>,
    #[serde(default)]
    pub student_praises: Vec<Praise>,
    pub student_praise_summary: Option<PraiseSummary>,
}

/// A single praise (or demerit) entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Praise {
    pub id: i64,
    pub comment: Option<String>,
    pub points: Option<i64>,
    pub kind: Option<String>,
    pub awarded_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Aggregated praise totals for the student
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PraiseSummary {
    pub student_id: Option<i64>,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub week_points: Option<i64>,
    #[serde(default)]
    pub year_points: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behaviour_deserialization() {
        let json = r#"{
            "total_points": 42,
            "student_praises": [
                {"id": 1, "comment": "Great effort", "points": 2}
            ],
            "student_praise_summary": {"student_id": 7, "total_points": 42}
        }"#;
        let behaviour: Behaviour = serde_json::from_str(json).unwrap();
        assert_eq!(behaviour.student_praises.len(), 1);
        assert_eq!(behaviour.student_praise_summary.unwrap().total_points, 42);
    }
}

//! Quiz, question and submission models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Quiz detail, including its questions once fetched
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub teacher_name: Option<String>,
    pub class_group_name: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub question_ids: Vec<i64>,
    #[serde(default)]
    pub submission_ids: Vec<i64>,
    #[serde(default)]
    pub max_attempts: u32,
    /// Populated from the quiz_questions endpoint, not part of the quiz payload
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Whether this quiz carries the detail needed for submission calls
    pub fn is_detailed(&self) -> bool {
        !self.submission_ids.is_empty()
    }

    /// Look up an embedded question by id
    pub fn question(&self, question_id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// A single quiz question
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub description: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
    pub image: Option<String>,
}

/// Submission state for a quiz
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizSubmission {
    pub id: i64,
    pub quiz_id: Option<i64>,
    pub student_id: Option<i64>,
    pub status: Option<String>,
    pub grade: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_detail_state() {
        let json = r#"{
            "id": 9,
            "title": "French vocab",
            "question_ids": [1, 2, 3],
            "submission_ids": [40],
            "max_attempts": 3
        }"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert!(quiz.is_detailed());
        assert_eq!(quiz.max_attempts, 3);
        assert!(quiz.questions.is_empty());

        let bare: Quiz = serde_json::from_str(r#"{"id": 9, "title": "French vocab"}"#).unwrap();
        assert!(!bare.is_detailed());
    }

    #[test]
    fn test_question_lookup() {
        let quiz = Quiz {
            id: 1,
            title: "t".to_string(),
            description: None,
            subject: None,
            teacher_name: None,
            class_group_name: None,
            issued_on: None,
            due_on: None,
            question_ids: vec![5],
            submission_ids: vec![],
            max_attempts: 1,
            questions: vec![Question {
                id: 5,
                description: "2+2?".to_string(),
                correct_answer: "4".to_string(),
                incorrect_answers: vec!["5".to_string()],
                image: None,
            }],
        };
        assert_eq!(quiz.question(5).unwrap().correct_answer, "4");
        assert!(quiz.question(6).is_none());
    }
}

//! Quiz endpoints: detail, submissions and answers

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::client::Client;
use crate::error::{ApiError, ApiResult};
use crate::log_debug;
use crate::models::{Question, Quiz, QuizSubmission, Task, TaskType};

#[derive(Debug, Deserialize)]
struct QuizQuestionsResponse {
    quiz_questions: Vec<Question>,
}

/// Pick the first open `attemptN` slot on a submission-question document.
///
/// A slot holding an object is a finished attempt; a null slot is open.
/// When `max_attempts` slots are already finished there is nothing left to
/// answer and the call errors.
fn find_open_attempt(question: &Value, max_attempts: u32, api_id: &str) -> ApiResult<String> {
    let doc = question
        .get("quiz_submission_question")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            ApiError::unexpected(200, "response missing 'quiz_submission_question' object")
        })?;

    let mut slots: Vec<u32> = doc
        .keys()
        .filter_map(|key| key.strip_prefix("attempt"))
        .filter_map(|n| n.parse().ok())
        .collect();
    slots.sort_unstable();

    let mut finished = 0u32;
    for slot in slots {
        let key = format!("attempt{}", slot);
        if doc[&key].is_null() {
            return Ok(key);
        }
        finished += 1;
        if finished == max_attempts {
            break;
        }
    }
    Err(ApiError::QuestionAlreadyComplete(api_id.to_string()))
}

impl Client {
    /// Get full quiz detail for a todo entry, including its questions.
    ///
    /// Issues two requests: one for the quiz, one for its question bank.
    pub async fn get_quiz(&self, task: &Task) -> ApiResult<Quiz> {
        let mut quiz: Quiz = self.fetch_detail(task, TaskType::Quiz).await?;

        let params: Vec<(&str, String)> = quiz
            .question_ids
            .iter()
            .map(|id| ("ids[]", id.to_string()))
            .collect();
        let response = self.get("quiz_questions", &params).await?;
        let response = self.expect_success(response).await?;
        let body: QuizQuestionsResponse = response.json().await?;
        quiz.questions = body.quiz_questions;
        Ok(quiz)
    }

    /// Get the submission record for a detailed quiz
    pub async fn get_quiz_submission(&self, quiz: &Quiz) -> ApiResult<QuizSubmission> {
        let submission_id = quiz
            .submission_ids
            .first()
            .ok_or(ApiError::TaskNotDetailed(quiz.id))?;

        let response = self
            .get(&format!("quiz_submissions/{}", submission_id), &[])
            .await?;
        let response = self.expect_success(response).await?;

        let mut body: Value = response.json().await?;
        let submission = body
            .get_mut("quiz_submission")
            .map(Value::take)
            .ok_or_else(|| ApiError::unexpected(200, "response missing 'quiz_submission'"))?;
        Ok(serde_json::from_value(submission)?)
    }

    /// Answer a quiz question and report whether the answer was correct.
    ///
    /// The API models each question as a document with numbered attempt
    /// slots. Answering is a two-step dance: PUT the opened slot with a
    /// start timestamp, then PUT the answer into it. `delay` inserts a
    /// pause between the two, mimicking time spent on the question.
    pub async fn submit_quiz_answer(
        &self,
        quiz: &Quiz,
        question_id: i64,
        answer: &str,
        delay: Option<Duration>,
    ) -> ApiResult<bool> {
        if !quiz.is_detailed() {
            return Err(ApiError::TaskNotDetailed(quiz.id));
        }

        let api_id = format!("{}-{}", quiz.id, question_id);
        let path = format!("quiz_submission_questions/{}", api_id);

        let response = self.get(&path, &[]).await?;
        let response = self.expect_success(response).await?;
        let mut question: Value = response.json().await?;

        let slot = find_open_attempt(&question, quiz.max_attempts, &api_id)?;
        log_debug!("Answering question {} in slot {}", api_id, slot);

        question["quiz_submission_question"][&slot] = serde_json::json!({
            "answer": null,
            "start": chrono::Utc::now().to_rfc3339(),
            "correct": false,
        });
        let response = self.put(&path, &question).await?;
        let response = self.expect_success(response).await?;
        let mut question: Value = response.json().await?;

        question["quiz_submission_question"][&slot] = serde_json::json!({
            "answer": answer,
        });

        if let Some(delay) = delay {
            log_debug!("Waiting {:?} before sending answer", delay);
            tokio::time::sleep(delay).await;
        }

        let response = self.put(&path, &question).await?;
        let response = self.expect_success(response).await?;
        let question: Value = response.json().await?;

        Ok(question["quiz_submission_question"][&slot]["correct"]
            .as_bool()
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_doc(slots: &[(&str, Value)]) -> Value {
        let mut doc = serde_json::Map::new();
        for (key, value) in slots {
            doc.insert(key.to_string(), value.clone());
        }
        serde_json::json!({ "quiz_submission_question": Value::Object(doc) })
    }

    #[test]
    fn test_first_slot_open() {
        let doc = question_doc(&[
            ("attempt0", Value::Null),
            ("attempt1", Value::Null),
            ("attempt2", Value::Null),
        ]);
        assert_eq!(find_open_attempt(&doc, 3, "1-1").unwrap(), "attempt0");
    }

    #[test]
    fn test_skips_finished_slots() {
        let doc = question_doc(&[
            ("attempt0", serde_json::json!({"answer": "4", "correct": true})),
            ("attempt1", Value::Null),
            ("attempt2", Value::Null),
        ]);
        assert_eq!(find_open_attempt(&doc, 3, "1-1").unwrap(), "attempt1");
    }

    #[test]
    fn test_all_attempts_used() {
        let doc = question_doc(&[
            ("attempt0", serde_json::json!({"correct": false})),
            ("attempt1", serde_json::json!({"correct": false})),
            ("attempt2", Value::Null),
        ]);
        let err = find_open_attempt(&doc, 2, "9-5").unwrap_err();
        assert!(matches!(err, ApiError::QuestionAlreadyComplete(id) if id == "9-5"));
    }

    #[test]
    fn test_unordered_slot_keys() {
        let doc = question_doc(&[
            ("attempt2", Value::Null),
            ("attempt0", serde_json::json!({"correct": true})),
            ("attempt1", Value::Null),
        ]);
        assert_eq!(find_open_attempt(&doc, 3, "1-1").unwrap(), "attempt1");
    }

    #[test]
    fn test_malformed_document() {
        let doc = serde_json::json!({ "unexpected": {} });
        assert!(find_open_attempt(&doc, 3, "1-1").is_err());
    }
}

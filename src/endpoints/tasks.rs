//! Class task detail, comment and event endpoints

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::Client;
use crate::error::{ApiError, ApiResult};
use crate::log_debug;
use crate::models::{
    Comment, CommentUser, Comments, DetailedClassTask, DetailedTask, Task, TaskType,
};

#[derive(Debug, Deserialize)]
struct CommentsResponse {
    comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
struct PostCommentResponse {
    #[serde(default)]
    users: Vec<CommentUser>,
    comment: Comment,
}

/// Detail payloads carry the class task id in `id`, but the follow-up
/// endpoints (quiz submissions, events, comments) key off the todo id.
/// Stamp the todo id over the payload before deserializing.
fn stamp_todo_id(detail: &mut serde_json::Value, task: &Task) {
    if let Some(obj) = detail.as_object_mut() {
        obj.insert("id".to_string(), serde_json::Value::from(task.id));
    }
}

impl Client {
    /// Fetch the detail object for `task`, unwrapping the per-type envelope.
    /// 404 means the task id (or type) does not resolve.
    pub(crate) async fn fetch_detail<T: DeserializeOwned>(
        &self,
        task: &Task,
        expected: TaskType,
    ) -> ApiResult<T> {
        if task.class_task_type != expected {
            return Err(ApiError::InvalidTask(format!(
                "task {} is {:?}, not {:?}",
                task.id, task.class_task_type, expected
            )));
        }

        let path = format!("{}/{}", expected.endpoint(), task.class_task_id);
        let response = self.get(&path, &[]).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::InvalidTask(format!(
                "{} {} not found",
                expected.envelope_key(),
                task.class_task_id
            )));
        }
        let response = self.expect_success(response).await?;

        let mut body: serde_json::Value = response.json().await?;
        let mut detail = body
            .get_mut(expected.envelope_key())
            .map(serde_json::Value::take)
            .ok_or_else(|| {
                ApiError::InvalidTask(format!(
                    "response missing '{}' object",
                    expected.envelope_key()
                ))
            })?;
        stamp_todo_id(&mut detail, task);
        Ok(serde_json::from_value(detail)?)
    }

    /// Get full homework detail for a todo entry
    pub async fn get_task(&self, task: &Task) -> ApiResult<DetailedTask> {
        self.fetch_detail(task, TaskType::Homework).await
    }

    /// Get full detail for a todo entry, dispatching on its task type
    pub async fn get_detailed_task(&self, task: &Task) -> ApiResult<DetailedClassTask> {
        log_debug!(
            "Resolving detail for task {} ({:?})",
            task.id,
            task.class_task_type
        );
        match task.class_task_type {
            TaskType::Homework => Ok(DetailedClassTask::Homework(self.get_task(task).await?)),
            TaskType::Quiz => Ok(DetailedClassTask::Quiz(self.get_quiz(task).await?)),
            TaskType::ClassTest => Ok(DetailedClassTask::ClassTest(
                self.fetch_detail(task, TaskType::ClassTest).await?,
            )),
            TaskType::Classwork => Ok(DetailedClassTask::Classwork(
                self.fetch_detail(task, TaskType::Classwork).await?,
            )),
            TaskType::FlexibleTask => Ok(DetailedClassTask::FlexibleTask(
                self.fetch_detail(task, TaskType::FlexibleTask).await?,
            )),
        }
    }

    /// Get the comment thread for a class task
    pub async fn get_task_comments(&self, task_id: i64) -> ApiResult<Vec<Comment>> {
        let params = [
            ("commentable_id", task_id.to_string()),
            ("commentable_type", "ClassTask".to_string()),
        ];
        let response = self.get("comments", &params).await?;
        let response = self.expect_success(response).await?;
        let body: CommentsResponse = response.json().await?;
        Ok(body.comments)
    }

    /// Post a comment on a class task
    pub async fn post_comment(
        &self,
        message: &str,
        task: &Task,
        skip_profanity_check: bool,
    ) -> ApiResult<Comments> {
        let body = serde_json::json!({
            "comment": {
                "message": message,
                "created_at": null,
                "skip_profanity_check": skip_profanity_check,
                "user_id": null,
                "user_type": null,
                "attachment_ids": [],
                "commentable_id": task.id,
                "commentable_type": task.class_task_type.eventable_type(),
            }
        });

        let response = self.post("comments", &body).await?;
        let response = self.expect_success(response).await?;
        let body: PostCommentResponse = response.json().await?;
        Ok(Comments {
            users: body.users,
            comments: vec![body.comment],
        })
    }

    /// Record a "viewed" event for a task. Returns whether the API
    /// acknowledged the event with a body.
    pub async fn view_task(&self, task_id: i64, task_type: TaskType) -> ApiResult<bool> {
        let body = serde_json::json!({
            "event": {
                "event_type": "viewed",
                "eventable_type": task_type.eventable_type(),
                "eventable_id": task_id,
            }
        });

        let response = self.post("events", &body).await?;
        let response = self.expect_success(response).await?;
        let text = response.text().await?;
        Ok(!text.is_empty())
    }
}

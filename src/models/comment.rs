//! Comment models for class tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment posted against a class task
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Comment {
    pub id: i64,
    pub message: String,
    pub user_id: Option<i64>,
    pub user_type: Option<String>,
    pub commentable_id: Option<i64>,
    pub commentable_type: Option<String>,
    #[serde(default)]
    pub attachment_ids: Vec<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub commentable: Option<CommentableTask>,
}

/// Minimal user record embedded in comment responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommentUser {
    pub id: i64,
    pub forename: Option<String>,
    pub surname: Option<String>,
    #[serde(rename = "user_type")]
    pub user_type: Option<String>,
}

/// The task a comment was attached to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommentableTask {
    pub id: i64,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub task_type: Option<String>,
}

/// Comment thread: the comments plus the users they reference
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Comments {
    #[serde(default)]
    pub users: Vec<CommentUser>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Comments {
    /// Resolve the author of a comment from the embedded user list
    pub fn author_of(&self, comment: &Comment) -> Option<&CommentUser> {
        self.users.iter().find(|u| Some(u.id) == comment.user_id)
    }
}

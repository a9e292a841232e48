//! Todo-list endpoints

use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;

use crate::client::Client;
use crate::config;
use crate::error::ApiResult;
use crate::models::Todos;

/// Filters for the todos endpoint.
///
/// With no dates set the window defaults to today through three weeks from
/// today. `completed: None` returns both complete and incomplete tasks.
#[derive(Debug, Clone)]
pub struct TodoQuery {
    pub add_dateless: bool,
    pub completed: Option<bool>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl Default for TodoQuery {
    fn default() -> Self {
        Self {
            add_dateless: true,
            completed: None,
            from: None,
            to: None,
        }
    }
}

impl TodoQuery {
    fn params(&self, today: NaiveDate) -> Vec<(&'static str, String)> {
        let from = self.from.unwrap_or(today);
        let to = self
            .to
            .unwrap_or(today + Duration::weeks(config::TODO_WINDOW_WEEKS));

        let mut params = vec![
            ("add_dateless", self.add_dateless.to_string()),
            ("from", from.format("%Y-%m-%d").to_string()),
            ("to", to.format("%Y-%m-%d").to_string()),
        ];
        if let Some(completed) = self.completed {
            params.push(("completed", completed.to_string()));
        }
        params
    }
}

#[derive(Debug, Deserialize)]
struct TodosResponse {
    todos: Vec<crate::models::Task>,
}

impl Client {
    /// Get the student's todo list
    pub async fn get_todos(&self, query: &TodoQuery) -> ApiResult<Todos> {
        let params = query.params(Utc::now().date_naive());
        let response = self.get("todos", &params).await?;
        let response = self.expect_success(response).await?;
        let body: TodosResponse = response.json().await?;
        Ok(Todos::from(body.todos))
    }

    /// Mark a todo entry complete (or incomplete)
    pub async fn complete_task(&self, task_id: i64, state: bool) -> ApiResult<()> {
        let body = serde_json::json!({ "todo": { "completed": state } });
        let response = self.put(&format!("todos/{}", task_id), &body).await?;
        self.expect_success(response).await?;
        Ok(())
    }
}

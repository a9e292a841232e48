//! Calendar task models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::task::TaskType;

/// An entry from the student's personal calendar
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersonalCalendarTask {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub class_task_type: Option<TaskType>,
    pub issued_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

/// An entry from the school-wide calendar
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchoolCalendarTask {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub class_group_name: Option<String>,
    pub teacher_name: Option<String>,
    pub class_task_type: Option<TaskType>,
    pub issued_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
}

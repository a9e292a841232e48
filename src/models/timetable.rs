//! Timetable models
//!
//! The timetable endpoint predates the rest of the API and uses camelCase
//! field names throughout; every struct here carries a `rename_all`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level timetable response for a requested week
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableInterface {
    pub weeks: Vec<Timetable>,
    pub request_date: Option<NaiveDate>,
}

impl TimetableInterface {
    /// The requested week, when present
    pub fn week(&self) -> Option<&Timetable> {
        self.weeks.first()
    }
}

/// One week of the timetable
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    #[serde(default)]
    pub days: Vec<TimetableDay>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A single day's lessons
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableDay {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub lessons: Vec<TimetableLesson>,
}

/// A scheduled lesson
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableLesson {
    pub class_group: TimetableClassGroup,
    pub period: TimetablePeriod,
    pub teacher: Option<TimetableTeacher>,
    pub room: Option<String>,
    #[serde(default)]
    pub due_class_tasks: Vec<TimetableHomework>,
}

/// Class group as embedded in a lesson
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableClassGroup {
    pub id: i64,
    pub name: String,
    pub subject: Option<String>,
}

/// Teaching period slot
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetablePeriod {
    pub id: Option<i64>,
    pub number: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Teacher as embedded in a lesson
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableTeacher {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub forename: Option<String>,
    pub surname: Option<String>,
}

/// Homework due in a lesson
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableHomework {
    pub id: i64,
    pub title: Option<String>,
    pub class_task_type: Option<String>,
    pub due_on: Option<NaiveDate>,
}

//! User, student, parent and employee models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic user record from the users endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub title: Option<String>,
    pub forename: String,
    pub surname: String,
    pub email: Option<String>,
    #[serde(rename = "user_type")]
    pub user_type: Option<String>,
    pub school_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

/// A school employee (teacher or staff)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Employee {
    pub id: i64,
    pub title: Option<String>,
    pub forename: String,
    pub surname: String,
    pub school_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        match &self.title {
            Some(title) => format!("{} {} {}", title, self.forename, self.surname),
            None => format!("{} {}", self.forename, self.surname),
        }
    }
}

/// The authenticated student, with private info and class memberships merged in
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Student {
    pub id: i64,
    pub forename: String,
    pub surname: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub school_id: Option<i64>,
    pub year: Option<String>,
    #[serde(default)]
    pub parent_ids: Vec<i64>,
    pub calendar_token: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    /// Populated from the class_groups endpoint, not part of the student payload
    #[serde(default)]
    pub classes: Vec<ClassGroup>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

/// A class group the student belongs to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassGroup {
    pub id: i64,
    pub name: String,
    pub class_year: Option<String>,
    pub subject: Option<String>,
    #[serde(default)]
    pub teacher_ids: Vec<i64>,
    #[serde(default)]
    pub student_ids: Vec<i64>,
}

/// A parent linked to the student
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Parent {
    pub id: i64,
    pub title: Option<String>,
    pub forename: String,
    pub surname: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Parent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_full_name() {
        let employee: Employee = serde_json::from_str(
            r#"{"id": 1, "title": "Mr", "forename": "David", "surname": "Jones"}"#,
        )
        .unwrap();
        assert_eq!(employee.full_name(), "Mr David Jones");

        let untitled: Employee =
            serde_json::from_str(r#"{"id": 2, "forename": "Jane", "surname": "Doe"}"#).unwrap();
        assert_eq!(untitled.full_name(), "Jane Doe");
    }

    #[test]
    fn test_student_defaults() {
        let student: Student = serde_json::from_str(
            r#"{"id": 7, "forename": "Sam", "surname": "Smith", "parent_ids": [3, 4]}"#,
        )
        .unwrap();
        assert_eq!(student.parent_ids, vec![3, 4]);
        assert!(student.classes.is_empty());
        assert_eq!(student.full_name(), "Sam Smith");
    }
}

//! Task and todo models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::quiz::Quiz;

/// Kind of class task, as reported in the `class_task_type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    #[serde(alias = "Homework")]
    Homework,
    #[serde(alias = "Quiz")]
    Quiz,
    #[serde(alias = "ClassTest")]
    ClassTest,
    #[serde(alias = "Classwork")]
    Classwork,
    #[serde(alias = "FlexibleTask")]
    FlexibleTask,
}

impl TaskType {
    /// API path segment for the detail endpoint of this task type
    pub fn endpoint(self) -> &'static str {
        match self {
            TaskType::Homework => "homeworks",
            TaskType::Quiz => "quizzes",
            TaskType::ClassTest => "class_tests",
            TaskType::Classwork => "classworks",
            TaskType::FlexibleTask => "flexible_tasks",
        }
    }

    /// JSON key wrapping the object in a detail response
    pub fn envelope_key(self) -> &'static str {
        match self {
            TaskType::Homework => "homework",
            TaskType::Quiz => "quiz",
            TaskType::ClassTest => "class_test",
            TaskType::Classwork => "classwork",
            TaskType::FlexibleTask => "flexible_task",
        }
    }

    /// Value used for `commentable_type` / `eventable_type` fields
    pub fn eventable_type(self) -> &'static str {
        match self {
            TaskType::Homework => "Homework",
            TaskType::Quiz => "Quiz",
            TaskType::ClassTest => "ClassTest",
            TaskType::Classwork => "Classwork",
            TaskType::FlexibleTask => "FlexibleTask",
        }
    }
}

/// A todo-list entry referencing a class task
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Task {
    pub id: i64,
    pub class_task_id: i64,
    pub class_task_type: TaskType,
    #[serde(rename = "class_task_title")]
    pub title: String,
    pub subject: Option<String>,
    pub teacher_name: Option<String>,
    pub class_group_name: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

/// The todo list returned by the todos endpoint
#[derive(Debug, Clone, Default)]
pub struct Todos {
    pub tasks: Vec<Task>,
}

impl Todos {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Tasks not yet marked complete
    pub fn incomplete(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    /// Tasks due on or before the given date (dateless tasks excluded)
    pub fn due_by(&self, date: NaiveDate) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |t| t.due_on.is_some_and(|d| d <= date))
    }
}

impl From<Vec<Task>> for Todos {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl IntoIterator for Todos {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

/// Full homework detail from the homeworks endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetailedTask {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub teacher_name: Option<String>,
    pub class_group_name: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub attachment_ids: Vec<i64>,
    #[serde(default)]
    pub submission_ids: Vec<i64>,
    pub web_links: Option<Vec<String>>,
    pub duration: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Class test detail (no fields beyond the common task shape)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassTest {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub teacher_name: Option<String>,
    pub class_group_name: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub attachment_ids: Vec<i64>,
    #[serde(default)]
    pub completed: bool,
}

/// Classwork detail
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Classwork {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub teacher_name: Option<String>,
    pub class_group_name: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub attachment_ids: Vec<i64>,
    #[serde(default)]
    pub completed: bool,
}

/// Flexible task detail
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlexibleTask {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub teacher_name: Option<String>,
    pub class_group_name: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub attachment_ids: Vec<i64>,
    #[serde(default)]
    pub completed: bool,
}

/// Detail object for any task type, dispatched on `Task::class_task_type`
#[derive(Debug, Clone)]
pub enum DetailedClassTask {
    Homework(DetailedTask),
    Quiz(Quiz),
    ClassTest(ClassTest),
    Classwork(Classwork),
    FlexibleTask(FlexibleTask),
}

impl DetailedClassTask {
    pub fn task_type(&self) -> TaskType {
        match self {
            DetailedClassTask::Homework(_) => TaskType::Homework,
            DetailedClassTask::Quiz(_) => TaskType::Quiz,
            DetailedClassTask::ClassTest(_) => TaskType::ClassTest,
            DetailedClassTask::Classwork(_) => TaskType::Classwork,
            DetailedClassTask::FlexibleTask(_) => TaskType::FlexibleTask,
        }
    }

    pub fn as_quiz(&self) -> Option<&Quiz> {
        match self {
            DetailedClassTask::Quiz(quiz) => Some(quiz),
            _ => None,
        }
    }

    pub fn as_homework(&self) -> Option<&DetailedTask> {
        match self {
            DetailedClassTask::Homework(homework) => Some(homework),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_endpoints() {
        assert_eq!(TaskType::Homework.endpoint(), "homeworks");
        assert_eq!(TaskType::Quiz.endpoint(), "quizzes");
        assert_eq!(TaskType::ClassTest.endpoint(), "class_tests");
        assert_eq!(TaskType::Classwork.endpoint(), "classworks");
        assert_eq!(TaskType::FlexibleTask.endpoint(), "flexible_tasks");
    }

    #[test]
    fn test_task_type_envelope_keys() {
        assert_eq!(TaskType::Quiz.envelope_key(), "quiz");
        assert_eq!(TaskType::ClassTest.envelope_key(), "class_test");
    }

    #[test]
    fn test_task_deserialization() {
        let json = r#"{
            "id": 101,
            "class_task_id": 555,
            "class_task_type": "homework",
            "class_task_title": "Algebra worksheet",
            "subject": "Maths",
            "teacher_name": "Mr Jones",
            "class_group_name": "10A/Ma1",
            "issued_on": "2024-03-01",
            "due_on": "2024-03-08",
            "completed": false
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.class_task_id, 555);
        assert_eq!(task.class_task_type, TaskType::Homework);
        assert_eq!(task.title, "Algebra worksheet");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_type_capitalized_alias() {
        let task_type: TaskType = serde_json::from_str("\"ClassTest\"").unwrap();
        assert_eq!(task_type, TaskType::ClassTest);
    }

    #[test]
    fn test_todos_filters() {
        let make = |id, due: Option<&str>, completed| Task {
            id,
            class_task_id: id * 10,
            class_task_type: TaskType::Homework,
            title: format!("task {}", id),
            subject: None,
            teacher_name: None,
            class_group_name: None,
            issued_on: None,
            due_on: due.map(|d| d.parse().unwrap()),
            completed,
        };

        let todos = Todos::from(vec![
            make(1, Some("2024-03-04"), false),
            make(2, Some("2024-03-20"), true),
            make(3, None, false),
        ]);

        assert_eq!(todos.len(), 3);
        assert_eq!(todos.incomplete().count(), 2);
        let cutoff: NaiveDate = "2024-03-10".parse().unwrap();
        let due: Vec<_> = todos.due_by(cutoff).map(|t| t.id).collect();
        assert_eq!(due, vec![1]);
    }
}

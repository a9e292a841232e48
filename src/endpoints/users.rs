//! User, employee, student and parent endpoints

use serde::Deserialize;
use serde_json::Value;

use crate::client::Client;
use crate::error::{ApiError, ApiResult};
use crate::models::{ClassGroup, Employee, Parent, Student, User};

/// Extra sections to request with the student record
#[derive(Debug, Clone)]
pub struct StudentInclude {
    pub user_private_info: bool,
    pub school: bool,
    pub package: bool,
    pub premium_features: bool,
}

impl Default for StudentInclude {
    fn default() -> Self {
        Self {
            user_private_info: true,
            school: false,
            package: false,
            premium_features: false,
        }
    }
}

impl StudentInclude {
    fn as_param(&self) -> String {
        let mut include = String::new();
        if self.user_private_info {
            include.push_str("user_private_info,");
        }
        if self.school {
            include.push_str("school,");
        }
        if self.package {
            include.push_str("package,");
        }
        if self.premium_features {
            include.push_str("premium_features,");
        }
        include
    }
}

#[derive(Debug, Deserialize)]
struct EmployeesResponse {
    users: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
struct ClassGroupsResponse {
    class_groups: Vec<ClassGroup>,
}

#[derive(Debug, Deserialize)]
struct ParentsResponse {
    parents: Vec<Parent>,
}

/// Fold a `user_private_infos` record into the student object. Private
/// info wins on conflict, except `id`, which stays the student's own
/// (the private record carries its own row id).
fn merge_private_info(student: &mut Value, private: &mut Value) {
    if let (Some(target), Some(source)) = (student.as_object_mut(), private.as_object_mut()) {
        for (key, value) in std::mem::take(source) {
            if key != "id" {
                target.insert(key, value);
            }
        }
    }
}

impl Client {
    /// Get a user record by id
    pub async fn get_user(&self, user_id: i64) -> ApiResult<User> {
        let response = self.get(&format!("users/{}", user_id), &[]).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::InvalidUser(user_id.to_string()));
        }
        let response = self.expect_success(response).await?;

        let mut body: Value = response.json().await?;
        let user = body
            .get_mut("user")
            .map(Value::take)
            .ok_or_else(|| ApiError::unexpected(200, "response missing 'user'"))?;
        Ok(serde_json::from_value(user)?)
    }

    /// Get an employee record by id.
    ///
    /// Some ids listed in `School::employee_ids` have no account behind
    /// them; those return [`ApiError::InvalidUser`].
    pub async fn get_employee(&self, employee_id: i64) -> ApiResult<Employee> {
        let response = self.get(&format!("users/{}", employee_id), &[]).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::InvalidUser(format!(
                "employee {} not found",
                employee_id
            )));
        }
        let response = self.expect_success(response).await?;

        let mut body: Value = response.json().await?;
        let user = body
            .get_mut("user")
            .map(Value::take)
            .ok_or_else(|| ApiError::unexpected(200, "response missing 'user'"))?;
        Ok(serde_json::from_value(user)?)
    }

    /// Get multiple employee records in one request
    pub async fn get_employees(&self, employee_ids: &[i64]) -> ApiResult<Vec<Employee>> {
        let params: Vec<(&str, String)> = employee_ids
            .iter()
            .map(|id| ("ids[]", id.to_string()))
            .collect();
        let response = self.get("users", &params).await?;
        let response = self.expect_success(response).await?;
        let body: EmployeesResponse = response.json().await?;
        Ok(body.users)
    }

    /// Fetch the authenticated student from the API.
    ///
    /// Issues two requests: the student record (with its private info
    /// merged in) and the student's class groups. For the cached copy use
    /// [`Client::student`].
    pub async fn fetch_student(&self, include: &StudentInclude) -> ApiResult<Student> {
        let params = [("include", include.as_param())];
        let response = self
            .get(&format!("students/{}", self.user_id), &params)
            .await?;
        let response = self.expect_success(response).await?;
        let mut body: Value = response.json().await?;

        let mut student = body
            .get_mut("student")
            .map(Value::take)
            .ok_or_else(|| ApiError::unexpected(200, "response missing 'student'"))?;

        // The private info section arrives as a sibling array
        if let Some(private) = body
            .get_mut("user_private_infos")
            .and_then(Value::as_array_mut)
            .and_then(|infos| infos.first_mut())
        {
            merge_private_info(&mut student, private);
        }

        let mut student: Student = serde_json::from_value(student)?;

        let params = [("student_ids[]", self.user_id.to_string())];
        let response = self.get("class_groups", &params).await?;
        let response = self.expect_success(response).await?;
        let body: ClassGroupsResponse = response.json().await?;
        student.classes = body.class_groups;

        Ok(student)
    }

    /// Get the parents linked to the authenticated student
    pub async fn get_parents(&self) -> ApiResult<Vec<Parent>> {
        let params: Vec<(&str, String)> = self
            .student()
            .parent_ids
            .iter()
            .map(|id| ("ids[]", id.to_string()))
            .collect();
        let response = self.get("parents", &params).await?;
        let response = self.expect_success(response).await?;
        let body: ParentsResponse = response.json().await?;
        Ok(body.parents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_param_default() {
        assert_eq!(StudentInclude::default().as_param(), "user_private_info,");
    }

    #[test]
    fn test_include_param_all_sections() {
        let include = StudentInclude {
            user_private_info: true,
            school: true,
            package: true,
            premium_features: true,
        };
        assert_eq!(
            include.as_param(),
            "user_private_info,school,package,premium_features,"
        );
    }

    #[test]
    fn test_private_info_wins_on_conflict() {
        let mut student = serde_json::json!({"id": 7, "forename": "Samantha", "surname": "Smith"});
        let mut private =
            serde_json::json!({"id": 9001, "email": "sam@example.com", "forename": "Sam"});

        merge_private_info(&mut student, &mut private);

        let student: Student = serde_json::from_value(student).unwrap();
        assert_eq!(student.id, 7);
        assert_eq!(student.forename, "Sam");
        assert_eq!(student.email.as_deref(), Some("sam@example.com"));
    }
}

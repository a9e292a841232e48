//! School, subject and public school-search models

use serde::{Deserialize, Serialize};

/// A school record, as returned alongside the authenticated student
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
    pub address: Option<String>,
    pub town: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    #[serde(default)]
    pub employee_ids: Vec<i64>,
    /// Populated from the subjects endpoint, not part of the school payload
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// A subject taught at the school
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// A school entry from the public (unauthenticated) school search
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicSchool {
    pub id: i64,
    pub name: String,
    pub subdomain: Option<String>,
    pub address: Option<String>,
    pub town: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
}

/// Public school-search results with paging metadata
#[derive(Debug, Clone, Deserialize)]
pub struct PublicSchoolSearch {
    pub schools: Vec<PublicSchool>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_deserialization() {
        let json = r#"{
            "id": 333,
            "name": "Example High School",
            "subdomain": "examplehigh",
            "town": "Exampleton",
            "employee_ids": [10, 11, 12]
        }"#;
        let school: School = serde_json::from_str(json).unwrap();
        assert_eq!(school.subdomain, "examplehigh");
        assert_eq!(school.employee_ids.len(), 3);
        assert!(school.subjects.is_empty());
    }
}

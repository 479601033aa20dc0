//! 内存后端的种子数据

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DashboardError, Result};
use crate::models::{
    classes::entities::ClassWithRelations, courses::entities::Course, users::entities::User,
};
use crate::utils::validate::validate_email;

const BUILTIN_FIXTURES: &str = include_str!("fixtures.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub classes: Vec<ClassWithRelations>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Fixtures {
    /// 内置示例数据
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_FIXTURES)
    }

    /// 从 JSON 文件加载
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            DashboardError::file_operation(format!(
                "Failed to read fixtures from {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let fixtures: Fixtures = serde_json::from_str(raw)?;
        fixtures.validate()?;
        Ok(fixtures)
    }

    /// 检查 ID 唯一性和引用完整性
    pub fn validate(&self) -> Result<()> {
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id) {
                return Err(DashboardError::validation(format!(
                    "Duplicate user id {} in fixtures",
                    user.id
                )));
            }
            validate_email(&user.email).map_err(|e| {
                DashboardError::validation(format!("User {}: {e}", user.id))
            })?;
        }

        let is_role = |id: i64, teacher: bool| {
            self.users
                .iter()
                .any(|u| u.id == id && u.role.is_teacher() == teacher)
        };

        let mut course_ids = HashSet::new();
        for course in &self.courses {
            if !course_ids.insert(course.id) {
                return Err(DashboardError::validation(format!(
                    "Duplicate course id {} in fixtures",
                    course.id
                )));
            }
            // 新课程 ID 从最大种子 ID 之后分配
            if course.id == i64::MAX {
                return Err(DashboardError::validation(format!(
                    "Course id {} leaves no room for new courses",
                    course.id
                )));
            }
            if !is_role(course.teacher_id, true) {
                return Err(DashboardError::validation(format!(
                    "Course {} is owned by unknown teacher {}",
                    course.id, course.teacher_id
                )));
            }
        }

        let mut class_ids = HashSet::new();
        for class in &self.classes {
            if !class_ids.insert(class.id()) {
                return Err(DashboardError::validation(format!(
                    "Duplicate class id {} in fixtures",
                    class.id()
                )));
            }
            if !is_role(class.teacher_id(), true) {
                return Err(DashboardError::validation(format!(
                    "Class {} is owned by unknown teacher {}",
                    class.id(),
                    class.teacher_id()
                )));
            }
            if let Some(student_id) = class.student_ids.iter().find(|id| !is_role(**id, false)) {
                return Err(DashboardError::validation(format!(
                    "Class {} enrolls unknown student {student_id}",
                    class.id()
                )));
            }
            if let Some(course_id) = class.course_ids.iter().find(|id| !course_ids.contains(*id)) {
                return Err(DashboardError::validation(format!(
                    "Class {} references unknown course {course_id}",
                    class.id()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fixtures_are_valid() {
        let fixtures = Fixtures::builtin().unwrap();
        assert!(!fixtures.users.is_empty());
        assert!(fixtures.classes.iter().any(|c| c.teacher_id() == 1));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"{
            "users": [
                { "id": 1, "email": "a@school.edu", "name": "A", "role": "teacher" },
                { "id": 1, "email": "b@school.edu", "name": "B", "role": "student" }
            ]
        }"#;
        let err = Fixtures::from_json(raw).unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("Duplicate user id 1"));
    }

    #[test]
    fn test_bad_email_rejected() {
        let raw = r#"{ "users": [ { "id": 1, "email": "nope", "name": "A", "role": "teacher" } ] }"#;
        assert!(Fixtures::from_json(raw).is_err());
    }

    #[test]
    fn test_dangling_course_reference_rejected() {
        let raw = r#"{
            "users": [ { "id": 1, "email": "a@school.edu", "name": "A", "role": "teacher" } ],
            "classes": [ { "id": 1, "name": "Art", "section": "A", "teacher_id": 1, "course_ids": [9] } ]
        }"#;
        let err = Fixtures::from_json(raw).unwrap_err();
        assert!(err.message().contains("unknown course 9"));
    }

    #[test]
    fn test_max_course_id_rejected() {
        let raw = format!(
            r#"{{
                "users": [ {{ "id": 1, "email": "a@school.edu", "name": "A", "role": "teacher" }} ],
                "courses": [ {{ "id": {}, "title": "Art", "description": "", "date": "2024-09-01",
                    "total_marks": 10, "difficulty": "easy", "teacher_id": 1 }} ]
            }}"#,
            i64::MAX
        );
        let err = Fixtures::from_json(&raw).unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("leaves no room"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = Fixtures::from_json("{").unwrap_err();
        assert_eq!(err.code(), "E009");
    }
}

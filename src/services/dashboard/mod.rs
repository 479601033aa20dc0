//! 仪表盘视图
//!
//! 按用户的角色标志加载对应数据：教师看到自己负责的班级和课程，学生看到所在班级。

use tracing::debug;

use crate::errors::Result;
use crate::models::{dashboard::responses::Dashboard, users::entities::UserRole};
use crate::services::AssignmentStore;

pub async fn load_dashboard(store: &mut AssignmentStore, user_id: i64) -> Result<Dashboard> {
    let user = store.get_user(user_id).await?;

    let dashboard = match user.role {
        UserRole::Teacher => {
            let classes = store.list_classes_for_teacher(user.id).await?;
            let courses = store.list_courses_for_teacher(user.id).await?;
            let classes = store.resolve_class_details(classes).await?;
            Dashboard::Teacher {
                user,
                classes,
                courses,
            }
        }
        UserRole::Student => {
            let classes = store.list_classes_for_student(user.id).await?;
            let classes = store.resolve_class_details(classes).await?;
            Dashboard::Student { user, classes }
        }
    };

    debug!(
        "Dashboard loaded for user {} with {} class(es)",
        dashboard.user().id,
        dashboard.classes().len()
    );
    Ok(dashboard)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::errors::DashboardError;
    use crate::storage::MemoryStorage;
    use crate::utils::validate::CourseLimits;

    fn store() -> AssignmentStore {
        let storage = MemoryStorage::with_builtin_fixtures().unwrap();
        AssignmentStore::new(Arc::new(storage), CourseLimits::default())
    }

    #[tokio::test]
    async fn test_teacher_dashboard() {
        let mut store = store();
        let dashboard = load_dashboard(&mut store, 1).await.unwrap();
        let Dashboard::Teacher {
            classes, courses, ..
        } = dashboard
        else {
            panic!("expected teacher dashboard");
        };
        assert_eq!(classes.len(), 2);
        assert_eq!(courses.len(), 3);
        assert_eq!(classes[0].courses[0].title, "Geometry");
    }

    #[tokio::test]
    async fn test_student_dashboard() {
        let mut store = store();
        let dashboard = load_dashboard(&mut store, 5).await.unwrap();
        assert!(matches!(dashboard, Dashboard::Student { .. }));
        let ids: Vec<i64> = dashboard.classes().iter().map(|c| c.class.id()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let mut store = store();
        let err = load_dashboard(&mut store, 404).await.unwrap_err();
        assert!(matches!(err, DashboardError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_serializes_with_role_tag() {
        let mut store = store();
        let dashboard = load_dashboard(&mut store, 3).await.unwrap();
        let value = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(value["role"], "student");
        assert_eq!(value["user"]["name"], "Lin Chen");
    }
}

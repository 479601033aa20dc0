use tracing::info;

use super::classes::require_class;
use crate::errors::{DashboardError, Result};
use crate::models::classes::{entities::ClassWithRelations, responses::CourseSetUpdate};
use crate::storage::Storage;

pub(super) async fn assign(
    storage: &dyn Storage,
    class_id: i64,
    course_id: i64,
) -> Result<ClassWithRelations> {
    let class = require_class(storage, class_id).await?;
    if storage.get_course_by_id(course_id).await?.is_none() {
        return Err(DashboardError::not_found(format!(
            "Course {course_id} not found"
        )));
    }

    let duplicate = || {
        DashboardError::duplicate_assignment(format!(
            "Course {course_id} is already assigned to class {class_id}"
        ))
    };
    if class.has_course(course_id) {
        return Err(duplicate());
    }

    // 存储层在同一步内检查并插入，以它的结果为准
    match storage.add_class_course(class_id, course_id).await? {
        CourseSetUpdate::Updated(updated) => {
            info!("Course {} assigned to class {}", course_id, class_id);
            Ok(updated)
        }
        CourseSetUpdate::Unchanged => Err(duplicate()),
        CourseSetUpdate::ClassNotFound => Err(DashboardError::not_found(format!(
            "Class {class_id} not found"
        ))),
    }
}

pub(super) async fn unassign(
    storage: &dyn Storage,
    class_id: i64,
    course_id: i64,
) -> Result<ClassWithRelations> {
    let class = require_class(storage, class_id).await?;

    let not_assigned = || {
        DashboardError::not_assigned(format!(
            "Course {course_id} is not assigned to class {class_id}"
        ))
    };
    if !class.has_course(course_id) {
        return Err(not_assigned());
    }

    match storage.remove_class_course(class_id, course_id).await? {
        CourseSetUpdate::Updated(updated) => {
            info!("Course {} unassigned from class {}", course_id, class_id);
            Ok(updated)
        }
        CourseSetUpdate::Unchanged => Err(not_assigned()),
        CourseSetUpdate::ClassNotFound => Err(DashboardError::not_found(format!(
            "Class {class_id} not found"
        ))),
    }
}

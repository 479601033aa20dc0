use std::collections::HashMap;

use tracing::debug;

use crate::errors::{DashboardError, Result};
use crate::models::{
    classes::{entities::ClassWithRelations, requests::ClassListQuery, responses::ClassDetail},
    courses::requests::CourseListQuery,
    users::entities::User,
};
use crate::storage::Storage;

pub(super) async fn get_user(storage: &dyn Storage, user_id: i64) -> Result<User> {
    storage
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| DashboardError::not_found(format!("User {user_id} not found")))
}

pub(super) async fn require_class(
    storage: &dyn Storage,
    class_id: i64,
) -> Result<ClassWithRelations> {
    storage
        .get_class_by_id(class_id)
        .await?
        .ok_or_else(|| DashboardError::not_found(format!("Class {class_id} not found")))
}

pub(super) async fn list_for_teacher(
    storage: &dyn Storage,
    teacher_id: i64,
) -> Result<Vec<ClassWithRelations>> {
    let classes = storage
        .list_classes(ClassListQuery::for_teacher(teacher_id))
        .await?;
    debug!("Teacher {} has {} class(es)", teacher_id, classes.len());
    Ok(classes)
}

pub(super) async fn list_for_student(
    storage: &dyn Storage,
    student_id: i64,
) -> Result<Vec<ClassWithRelations>> {
    let classes = storage
        .list_classes(ClassListQuery::for_student(student_id))
        .await?;
    debug!("Student {} is enrolled in {} class(es)", student_id, classes.len());
    Ok(classes)
}

pub(super) async fn get_detail(storage: &dyn Storage, class_id: i64) -> Result<ClassDetail> {
    let class = require_class(storage, class_id).await?;
    let mut details = resolve_details(storage, vec![class]).await?;
    details
        .pop()
        .ok_or_else(|| DashboardError::unknown_failure("Class detail resolution returned nothing"))
}

/// 为班级解析已分配课程，找不到的课程 ID 会被跳过
pub(super) async fn resolve_details(
    storage: &dyn Storage,
    classes: Vec<ClassWithRelations>,
) -> Result<Vec<ClassDetail>> {
    if classes.is_empty() {
        return Ok(Vec::new());
    }

    let courses: HashMap<i64, _> = storage
        .list_courses(CourseListQuery::default())
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    Ok(classes
        .into_iter()
        .map(|class| {
            let resolved = class
                .course_ids
                .iter()
                .filter_map(|id| courses.get(id).cloned())
                .collect();
            ClassDetail {
                class,
                courses: resolved,
            }
        })
        .collect())
}

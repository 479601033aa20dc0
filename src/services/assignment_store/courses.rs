use tracing::{debug, info};

use crate::errors::{DashboardError, Result};
use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
    users::entities::User,
};
use crate::storage::Storage;
use crate::utils::validate::{CourseLimits, validate_create_course, validate_update_course};

pub(super) async fn list_for_teacher(storage: &dyn Storage, teacher_id: i64) -> Result<Vec<Course>> {
    let courses = storage
        .list_courses(CourseListQuery {
            teacher_id: Some(teacher_id),
        })
        .await?;
    debug!("Teacher {} owns {} course(s)", teacher_id, courses.len());
    Ok(courses)
}

pub(super) async fn create(
    storage: &dyn Storage,
    limits: &CourseLimits,
    actor: &User,
    mut course_data: CreateCourseRequest,
) -> Result<Course> {
    require_teacher(actor, "create a course")?;

    // 教师只能为自己创建课程
    match course_data.teacher_id {
        Some(teacher_id) if teacher_id != actor.id => {
            return Err(DashboardError::not_owner(
                "You do not have permission to create a course for another teacher",
            ));
        }
        _ => course_data.teacher_id = Some(actor.id),
    }

    validate_create_course(&course_data, limits).map_err(DashboardError::validation)?;

    let course = storage.create_course(course_data).await?;
    info!("Course {} ({}) created by {}", course.id, course.title, actor.id);
    Ok(course)
}

pub(super) async fn update(
    storage: &dyn Storage,
    limits: &CourseLimits,
    actor: &User,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> Result<Course> {
    require_teacher(actor, "update this course")?;
    let course = require_course(storage, course_id).await?;
    check_owner(actor, &course, "update")?;

    validate_update_course(&update_data, limits).map_err(DashboardError::validation)?;

    let updated = storage
        .update_course(course_id, update_data)
        .await?
        .ok_or_else(|| DashboardError::not_found(format!("Course {course_id} not found")))?;
    info!("Course {} updated by {}", course_id, actor.id);
    Ok(updated)
}

pub(super) async fn delete(storage: &dyn Storage, actor: &User, course_id: i64) -> Result<()> {
    require_teacher(actor, "delete this course")?;
    let course = require_course(storage, course_id).await?;
    check_owner(actor, &course, "delete")?;

    if !storage.delete_course(course_id).await? {
        return Err(DashboardError::not_found(format!(
            "Course {course_id} not found"
        )));
    }
    info!("Course {} deleted by {}", course_id, actor.id);
    Ok(())
}

async fn require_course(storage: &dyn Storage, course_id: i64) -> Result<Course> {
    storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| DashboardError::not_found(format!("Course {course_id} not found")))
}

/// 角色校验：只有教师可以管理课程
fn require_teacher(actor: &User, action: &str) -> Result<()> {
    if actor.role.is_teacher() {
        Ok(())
    } else {
        Err(DashboardError::not_owner(format!(
            "You do not have permission to {action}"
        )))
    }
}

fn check_owner(actor: &User, course: &Course, action: &str) -> Result<()> {
    if course.teacher_id != actor.id {
        return Err(DashboardError::not_owner(format!(
            "You do not have permission to {action} another teacher's course"
        )));
    }
    Ok(())
}

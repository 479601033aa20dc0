use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 课程字段限制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseLimits {
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub max_total_marks: u32,
}

impl Default for CourseLimits {
    fn default() -> Self {
        Self {
            max_title_length: 100,
            max_description_length: 1000,
            max_total_marks: 1000,
        }
    }
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_course_title(title: &str, limits: &CourseLimits) -> Result<(), String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Course title must not be empty".to_string());
    }
    // 按字符计数，而不是字节
    if title.chars().count() > limits.max_title_length {
        return Err(format!(
            "Course title must be at most {} characters",
            limits.max_title_length
        ));
    }
    Ok(())
}

pub fn validate_course_description(description: &str, limits: &CourseLimits) -> Result<(), String> {
    if description.chars().count() > limits.max_description_length {
        return Err(format!(
            "Course description must be at most {} characters",
            limits.max_description_length
        ));
    }
    Ok(())
}

pub fn validate_total_marks(total_marks: u32, limits: &CourseLimits) -> Result<(), String> {
    if total_marks == 0 {
        return Err("Total marks must be a positive integer".to_string());
    }
    if total_marks > limits.max_total_marks {
        return Err(format!(
            "Total marks must be at most {}",
            limits.max_total_marks
        ));
    }
    Ok(())
}

/// 校验创建课程请求，返回第一个错误
pub fn validate_create_course(req: &CreateCourseRequest, limits: &CourseLimits) -> Result<(), String> {
    validate_course_title(&req.title, limits)?;
    validate_course_description(&req.description, limits)?;
    validate_total_marks(req.total_marks, limits)?;
    Ok(())
}

/// 校验更新课程请求，只检查给出的字段
pub fn validate_update_course(req: &UpdateCourseRequest, limits: &CourseLimits) -> Result<(), String> {
    if req.is_empty() {
        return Err("Update request contains no fields".to_string());
    }
    if let Some(title) = &req.title {
        validate_course_title(title, limits)?;
    }
    if let Some(description) = &req.description {
        validate_course_description(description, limits)?;
    }
    if let Some(total_marks) = req.total_marks {
        validate_total_marks(total_marks, limits)?;
    }
    Ok(())
}

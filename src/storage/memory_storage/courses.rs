//! 课程存储操作

use super::MemoryStorage;
use crate::errors::{DashboardError, Result};
use crate::models::courses::{
    entities::Course,
    requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
};

impl MemoryStorage {
    /// 通过 ID 获取课程
    pub(crate) fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        Ok(self.courses.get(&course_id).map(|entry| entry.value().clone()))
    }

    /// 列出课程
    pub(crate) fn list_courses_impl(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = self
            .courses
            .iter()
            .filter(|entry| {
                query
                    .teacher_id
                    .is_none_or(|id| entry.value().teacher_id == id)
            })
            .map(|entry| entry.value().clone())
            .collect();
        courses.sort_by_key(|c| c.id);
        Ok(courses)
    }

    /// 创建课程
    pub(crate) fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        // teacher_id 必须由服务层确保已设置
        let teacher_id = req.teacher_id.ok_or_else(|| {
            DashboardError::unknown_failure("teacher_id must be set before calling create_course")
        })?;

        let course = Course {
            id: self.allocate_course_id()?,
            title: req.title.trim().to_string(),
            description: req.description,
            date: req.date,
            total_marks: req.total_marks,
            difficulty: req.difficulty,
            teacher_id,
        };

        self.courses.insert(course.id, course.clone());
        Ok(course)
    }

    /// 更新课程信息
    pub(crate) fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let Some(mut entry) = self.courses.get_mut(&course_id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            entry.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            entry.description = description;
        }
        if let Some(date) = update.date {
            entry.date = date;
        }
        if let Some(total_marks) = update.total_marks {
            entry.total_marks = total_marks;
        }
        if let Some(difficulty) = update.difficulty {
            entry.difficulty = difficulty;
        }

        Ok(Some(entry.value().clone()))
    }

    /// 删除课程，并从所有班级的课程集合中移除
    pub(crate) fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        if self.courses.remove(&course_id).is_none() {
            return Ok(false);
        }
        for mut class in self.classes.iter_mut() {
            class.course_ids.remove(&course_id);
        }
        Ok(true)
    }
}

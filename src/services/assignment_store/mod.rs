//! 课程-班级分配状态
//!
//! `AssignmentStore` 持有当前会话的班级和课程集合，以及加载状态和最近一次错误。
//! 每个会话创建一个实例，由唯一的调用方独占使用。
//!
//! 每个操作在等待存储调用前置位加载标志，完成后清除；失败时记录错误信息并把错误原样返回。
//! 调用方放弃一个进行中的请求时加载标志保持置位，超时由调用方自行处理。

mod assignments;
mod classes;
mod courses;

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::warn;

use crate::errors::Result;
use crate::models::{
    classes::{entities::ClassWithRelations, responses::ClassDetail},
    courses::{
        entities::Course,
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
    users::entities::User,
};
use crate::storage::Storage;
use crate::utils::validate::CourseLimits;

pub struct AssignmentStore {
    storage: Arc<dyn Storage>,
    limits: CourseLimits,
    classes: Vec<ClassWithRelations>,
    courses: Vec<Course>,
    // 当前课程集合所属的教师
    course_scope: Option<i64>,
    loading: bool,
    last_error: Option<String>,
}

impl AssignmentStore {
    pub fn new(storage: Arc<dyn Storage>, limits: CourseLimits) -> Self {
        Self {
            storage,
            limits,
            classes: Vec::new(),
            courses: Vec::new(),
            course_scope: None,
            loading: false,
            last_error: None,
        }
    }

    /// 最近一次列出的班级
    pub fn classes(&self) -> &[ClassWithRelations] {
        &self.classes
    }

    /// 最近一次列出的课程
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn limits(&self) -> &CourseLimits {
        &self.limits
    }

    /// 清空会话状态，存储后端不受影响
    pub fn reset(&mut self) {
        self.classes.clear();
        self.courses.clear();
        self.course_scope = None;
        self.loading = false;
        self.last_error = None;
    }

    fn begin(&mut self) {
        self.loading = true;
    }

    fn finish<T>(&mut self, result: Result<T>) -> Result<T> {
        self.loading = false;
        match &result {
            Ok(_) => self.last_error = None,
            Err(e) => {
                warn!("{}", e);
                self.last_error = Some(e.to_string());
            }
        }
        result
    }

    // 用缓存中的同 ID 班级替换为新值
    fn patch_cached_class(&mut self, updated: &ClassWithRelations) {
        if let Some(slot) = self.classes.iter_mut().find(|c| c.id() == updated.id()) {
            *slot = updated.clone();
        }
    }

    // 获取用户信息
    pub async fn get_user(&mut self, user_id: i64) -> Result<User> {
        self.begin();
        let result = classes::get_user(self.storage.as_ref(), user_id).await;
        self.finish(result)
    }

    // 获取教师负责的班级列表
    pub async fn list_classes_for_teacher(
        &mut self,
        teacher_id: i64,
    ) -> Result<Vec<ClassWithRelations>> {
        self.begin();
        let result = classes::list_for_teacher(self.storage.as_ref(), teacher_id).await;
        let classes = self.finish(result)?;
        self.classes = classes.clone();
        Ok(classes)
    }

    // 获取学生所在的班级列表
    pub async fn list_classes_for_student(
        &mut self,
        student_id: i64,
    ) -> Result<Vec<ClassWithRelations>> {
        self.begin();
        let result = classes::list_for_student(self.storage.as_ref(), student_id).await;
        let classes = self.finish(result)?;
        self.classes = classes.clone();
        Ok(classes)
    }

    // 获取班级详情
    pub async fn get_class_detail(&mut self, class_id: i64) -> Result<ClassDetail> {
        self.begin();
        let result = classes::get_detail(self.storage.as_ref(), class_id).await;
        self.finish(result)
    }

    // 为一组班级解析课程
    pub async fn resolve_class_details(
        &mut self,
        classes: Vec<ClassWithRelations>,
    ) -> Result<Vec<ClassDetail>> {
        self.begin();
        let result = classes::resolve_details(self.storage.as_ref(), classes).await;
        self.finish(result)
    }

    // 获取教师的课程列表
    pub async fn list_courses_for_teacher(&mut self, teacher_id: i64) -> Result<Vec<Course>> {
        self.begin();
        let result = courses::list_for_teacher(self.storage.as_ref(), teacher_id).await;
        let courses = self.finish(result)?;
        self.courses = courses.clone();
        self.course_scope = Some(teacher_id);
        Ok(courses)
    }

    /// 把课程分配给班级，返回班级更新后的课程集合
    pub async fn assign(&mut self, class_id: i64, course_id: i64) -> Result<BTreeSet<i64>> {
        self.begin();
        let result = assignments::assign(self.storage.as_ref(), class_id, course_id).await;
        let class = self.finish(result)?;
        self.patch_cached_class(&class);
        Ok(class.course_ids)
    }

    /// 取消分配，返回班级更新后的课程集合
    pub async fn unassign(&mut self, class_id: i64, course_id: i64) -> Result<BTreeSet<i64>> {
        self.begin();
        let result = assignments::unassign(self.storage.as_ref(), class_id, course_id).await;
        let class = self.finish(result)?;
        self.patch_cached_class(&class);
        Ok(class.course_ids)
    }

    // 创建课程
    pub async fn create_course(
        &mut self,
        actor: &User,
        course_data: CreateCourseRequest,
    ) -> Result<Course> {
        self.begin();
        let result =
            courses::create(self.storage.as_ref(), &self.limits, actor, course_data).await;
        let course = self.finish(result)?;
        if self.course_scope == Some(course.teacher_id) {
            self.courses.push(course.clone());
        }
        Ok(course)
    }

    // 更新课程
    pub async fn update_course(
        &mut self,
        actor: &User,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> Result<Course> {
        self.begin();
        let result = courses::update(
            self.storage.as_ref(),
            &self.limits,
            actor,
            course_id,
            update_data,
        )
        .await;
        let course = self.finish(result)?;
        if let Some(slot) = self.courses.iter_mut().find(|c| c.id == course.id) {
            *slot = course.clone();
        }
        Ok(course)
    }

    // 删除课程
    pub async fn delete_course(&mut self, actor: &User, course_id: i64) -> Result<()> {
        self.begin();
        let result = courses::delete(self.storage.as_ref(), actor, course_id).await;
        self.finish(result)?;
        self.courses.retain(|c| c.id != course_id);
        for class in &mut self.classes {
            class.course_ids.remove(&course_id);
        }
        Ok(())
    }
}

//! 内存存储实现
//!
//! 以种子数据初始化，可选地在每次调用前模拟网络延迟。

mod classes;
mod courses;
mod fixtures;
mod users;

pub use fixtures::Fixtures;

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::errors::{DashboardError, Result};
use crate::models::{
    classes::{
        entities::ClassWithRelations, requests::ClassListQuery, responses::CourseSetUpdate,
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
    users::entities::User,
};
use crate::storage::Storage;
use async_trait::async_trait;

/// 内存存储实现
pub struct MemoryStorage {
    pub(crate) users: DashMap<i64, User>,
    pub(crate) classes: DashMap<i64, ClassWithRelations>,
    pub(crate) courses: DashMap<i64, Course>,
    // 最近分配的课程 ID
    last_course_id: AtomicI64,
    seed: Fixtures,
    delay: Duration,
}

impl MemoryStorage {
    pub const NAME: &'static str = "memory";

    pub fn new(seed: Fixtures) -> Self {
        let storage = Self {
            users: DashMap::new(),
            classes: DashMap::new(),
            courses: DashMap::new(),
            last_course_id: AtomicI64::new(0),
            seed,
            delay: Duration::ZERO,
        };
        storage.reset();
        storage
    }

    /// 使用内置种子数据
    pub fn with_builtin_fixtures() -> Result<Self> {
        Ok(Self::new(Fixtures::builtin()?))
    }

    /// 设置每次调用前的模拟延迟
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        let seed = match config.fixtures_path.as_deref() {
            Some(path) if !path.is_empty() => {
                info!("Loading fixtures from {}", path);
                Fixtures::from_file(path).await?
            }
            _ => Fixtures::builtin()?,
        };

        let storage =
            Self::new(seed).with_delay(Duration::from_millis(config.simulated_delay_ms));

        info!(
            "Memory storage initialized: {} users, {} classes, {} courses",
            storage.users.len(),
            storage.classes.len(),
            storage.courses.len()
        );
        Ok(storage)
    }

    /// 恢复到种子数据
    pub fn reset(&self) {
        self.users.clear();
        self.classes.clear();
        self.courses.clear();

        for user in &self.seed.users {
            self.users.insert(user.id, user.clone());
        }
        for class in &self.seed.classes {
            self.classes.insert(class.id(), class.clone());
        }
        for course in &self.seed.courses {
            self.courses.insert(course.id, course.clone());
        }

        let last_id = self.seed.courses.iter().map(|c| c.id).max().unwrap_or(0);
        self.last_course_id.store(last_id, Ordering::SeqCst);
        debug!("Memory storage reset to seed data");
    }

    pub(crate) fn allocate_course_id(&self) -> Result<i64> {
        self.last_course_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|last| last + 1)
            .map_err(|_| DashboardError::unknown_failure("Course id space exhausted"))
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    // 用户模块
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.simulate_latency().await;
        self.get_user_by_id_impl(id)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.simulate_latency().await;
        self.list_users_impl()
    }

    // 班级模块
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<ClassWithRelations>> {
        self.simulate_latency().await;
        self.get_class_by_id_impl(class_id)
    }

    async fn list_classes(&self, query: ClassListQuery) -> Result<Vec<ClassWithRelations>> {
        self.simulate_latency().await;
        self.list_classes_impl(query)
    }

    async fn add_class_course(&self, class_id: i64, course_id: i64) -> Result<CourseSetUpdate> {
        self.simulate_latency().await;
        self.add_class_course_impl(class_id, course_id)
    }

    async fn remove_class_course(
        &self,
        class_id: i64,
        course_id: i64,
    ) -> Result<CourseSetUpdate> {
        self.simulate_latency().await;
        self.remove_class_course_impl(class_id, course_id)
    }

    // 课程模块
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.simulate_latency().await;
        self.get_course_by_id_impl(course_id)
    }

    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        self.simulate_latency().await;
        self.list_courses_impl(query)
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.simulate_latency().await;
        self.create_course_impl(course)
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.simulate_latency().await;
        self.update_course_impl(course_id, update)
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.simulate_latency().await;
        self.delete_course_impl(course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let storage = MemoryStorage::with_builtin_fixtures().unwrap();
        assert!(storage.delete_course(5).await.unwrap());
        assert!(storage.get_course_by_id(5).await.unwrap().is_none());

        storage.reset();
        assert!(storage.get_course_by_id(5).await.unwrap().is_some());
    }

    #[test]
    fn test_exhausted_course_ids_fail_without_panicking() {
        let storage = MemoryStorage::new(Fixtures::default());
        storage.last_course_id.store(i64::MAX, Ordering::SeqCst);
        let err = storage.allocate_course_id().unwrap_err();
        assert_eq!(err.code(), "E006");
        assert_eq!(storage.last_course_id.load(Ordering::SeqCst), i64::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_delay() {
        let storage = MemoryStorage::with_builtin_fixtures()
            .unwrap()
            .with_delay(Duration::from_millis(250));
        let started = tokio::time::Instant::now();
        storage.list_users().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}

use std::sync::Arc;

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

pub mod memory_storage;

pub use memory_storage::{Fixtures, MemoryStorage};

/// 数据访问接口
///
/// 后端可能返回一般性失败（`UnknownFailure`），调用方原样向上传递。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self) -> Result<Vec<User>>;

    /// 班级管理方法
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<ClassWithRelations>>;
    // 列出班级
    async fn list_classes(&self, query: ClassListQuery) -> Result<Vec<ClassWithRelations>>;
    // 把课程加入班级的课程集合，检查和修改在同一步内完成
    async fn add_class_course(&self, class_id: i64, course_id: i64) -> Result<CourseSetUpdate>;
    // 把课程移出班级的课程集合
    async fn remove_class_course(&self, class_id: i64, course_id: i64)
    -> Result<CourseSetUpdate>;

    /// 课程管理方法
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>>;
    // 创建课程，teacher_id 必须已设置
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 更新课程信息
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程，同时从所有班级中移除
    async fn delete_course(&self, course_id: i64) -> Result<bool>;
}

/// 按配置创建存储后端
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn Storage>> {
    match config.backend.as_str() {
        MemoryStorage::NAME => {
            let storage = MemoryStorage::from_config(config).await?;
            Ok(Arc::new(storage))
        }
        other => Err(DashboardError::storage_plugin_not_found(format!(
            "Storage backend '{other}' is not available (supported: {})",
            MemoryStorage::NAME
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_backend() {
        let config = StorageConfig {
            backend: "postgres".into(),
            ..Default::default()
        };
        let err = create_storage(&config).await.err().unwrap();
        assert_eq!(err.code(), "E008");
    }

    #[tokio::test]
    async fn test_memory_backend() {
        let storage = create_storage(&StorageConfig::default()).await.unwrap();
        assert!(!storage.list_users().await.unwrap().is_empty());
    }
}

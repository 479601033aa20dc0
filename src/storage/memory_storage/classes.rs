//! 班级存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::classes::{
    entities::ClassWithRelations, requests::ClassListQuery, responses::CourseSetUpdate,
};

impl MemoryStorage {
    /// 通过 ID 获取班级
    pub(crate) fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<ClassWithRelations>> {
        Ok(self.classes.get(&class_id).map(|entry| entry.value().clone()))
    }

    /// 列出班级
    pub(crate) fn list_classes_impl(&self, query: ClassListQuery) -> Result<Vec<ClassWithRelations>> {
        let mut classes: Vec<ClassWithRelations> = self
            .classes
            .iter()
            .filter(|entry| {
                let class = entry.value();
                // 教师筛选
                query.teacher_id.is_none_or(|id| class.teacher_id() == id)
                    // 学生筛选
                    && query.student_id.is_none_or(|id| class.has_student(id))
            })
            .map(|entry| entry.value().clone())
            .collect();
        classes.sort_by_key(|c| c.id());
        Ok(classes)
    }

    /// 加入课程，持有条目锁期间完成检查和插入
    pub(crate) fn add_class_course_impl(
        &self,
        class_id: i64,
        course_id: i64,
    ) -> Result<CourseSetUpdate> {
        let Some(mut entry) = self.classes.get_mut(&class_id) else {
            return Ok(CourseSetUpdate::ClassNotFound);
        };
        if !entry.course_ids.insert(course_id) {
            return Ok(CourseSetUpdate::Unchanged);
        }
        Ok(CourseSetUpdate::Updated(entry.value().clone()))
    }

    /// 移除课程
    pub(crate) fn remove_class_course_impl(
        &self,
        class_id: i64,
        course_id: i64,
    ) -> Result<CourseSetUpdate> {
        let Some(mut entry) = self.classes.get_mut(&class_id) else {
            return Ok(CourseSetUpdate::ClassNotFound);
        };
        if !entry.course_ids.remove(&course_id) {
            return Ok(CourseSetUpdate::Unchanged);
        }
        Ok(CourseSetUpdate::Updated(entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> MemoryStorage {
        MemoryStorage::with_builtin_fixtures().unwrap()
    }

    #[test]
    fn test_list_by_teacher() {
        let classes = storage()
            .list_classes_impl(ClassListQuery::for_teacher(1))
            .unwrap();
        let ids: Vec<i64> = classes.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_list_by_student() {
        let classes = storage()
            .list_classes_impl(ClassListQuery::for_student(5))
            .unwrap();
        let ids: Vec<i64> = classes.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_list_without_filter_returns_all() {
        let classes = storage().list_classes_impl(ClassListQuery::default()).unwrap();
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn test_add_course_to_missing_class() {
        let update = storage().add_class_course_impl(99, 1).unwrap();
        assert_eq!(update, CourseSetUpdate::ClassNotFound);
    }

    #[test]
    fn test_add_course_once() {
        let storage = storage();
        let CourseSetUpdate::Updated(class) = storage.add_class_course_impl(1, 5).unwrap() else {
            panic!("expected course set to change");
        };
        assert!(class.has_course(5));
        assert_eq!(
            storage.add_class_course_impl(1, 5).unwrap(),
            CourseSetUpdate::Unchanged
        );
    }

    #[test]
    fn test_remove_absent_course() {
        let storage = storage();
        assert_eq!(
            storage.remove_class_course_impl(1, 5).unwrap(),
            CourseSetUpdate::Unchanged
        );
        assert!(matches!(
            storage.remove_class_course_impl(1, 3).unwrap(),
            CourseSetUpdate::Updated(class) if class.course_ids.is_empty()
        ));
    }
}

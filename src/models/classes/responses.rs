use super::entities::ClassWithRelations;
use crate::models::courses::entities::Course;
use serde::Serialize;
use ts_rs::TS;

// 班级详情：班级及其已分配课程
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: ClassWithRelations,
    pub courses: Vec<Course>,
}

/// 班级课程集合的单项变更结果
#[derive(Debug, Clone, PartialEq)]
pub enum CourseSetUpdate {
    // 集合已变更，附带变更后的班级
    Updated(ClassWithRelations),
    // 课程已在（或不在）集合中，未做修改
    Unchanged,
    ClassNotFound,
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 班级分组，例如 "A"
    pub section: String,
    // 教师ID
    pub teacher_id: i64,
}

/// 带关联关系的班级
///
/// 学生和课程集合总是存在，没有成员时为空集合。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassWithRelations {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    #[serde(default)]
    pub student_ids: BTreeSet<i64>,
    #[serde(default)]
    pub course_ids: BTreeSet<i64>,
}

impl ClassWithRelations {
    pub fn new(class: Class) -> Self {
        Self {
            class,
            student_ids: BTreeSet::new(),
            course_ids: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.class.id
    }

    pub fn teacher_id(&self) -> i64 {
        self.class.teacher_id
    }

    pub fn has_student(&self, student_id: i64) -> bool {
        self.student_ids.contains(&student_id)
    }

    pub fn has_course(&self, course_id: i64) -> bool {
        self.course_ids.contains(&course_id)
    }
}

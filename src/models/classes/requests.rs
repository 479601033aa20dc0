use serde::Deserialize;
use ts_rs::TS;

// 班级列表查询参数（用于存储层）
//
// 两个条件同时给出时取交集，都为空时返回全部班级。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListQuery {
    pub teacher_id: Option<i64>,
    pub student_id: Option<i64>,
}

impl ClassListQuery {
    pub fn for_teacher(teacher_id: i64) -> Self {
        Self {
            teacher_id: Some(teacher_id),
            student_id: None,
        }
    }

    pub fn for_student(student_id: i64) -> Self {
        Self {
            teacher_id: None,
            student_id: Some(student_id),
        }
    }
}

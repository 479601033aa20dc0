use super::entities::Difficulty;
use serde::Deserialize;
use ts_rs::TS;

// 创建课程请求
//
// # teacher_id 字段说明
// - 可选字段，不填写则使用当前操作教师的 ID
// - 如果填写，必须等于当前操作教师的 ID
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub teacher_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: chrono::NaiveDate,
    pub total_marks: u32,
    pub difficulty: Difficulty,
}

// 更新课程请求，未给出的字段保持不变
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<chrono::NaiveDate>,
    pub total_marks: Option<u32>,
    pub difficulty: Option<Difficulty>,
}

impl UpdateCourseRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.total_marks.is_none()
            && self.difficulty.is_none()
    }
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListQuery {
    pub teacher_id: Option<i64>,
}

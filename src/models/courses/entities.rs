use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程难度
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Advanced,
}

impl Difficulty {
    pub const EASY: &'static str = "easy";
    pub const MEDIUM: &'static str = "medium";
    pub const HARD: &'static str = "hard";
    pub const ADVANCED: &'static str = "advanced";

    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Advanced,
        ]
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid difficulty: '{s}'. supported values: easy, medium, hard, advanced"
            ))
        })
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => Difficulty::EASY,
            Difficulty::Medium => Difficulty::MEDIUM,
            Difficulty::Hard => Difficulty::HARD,
            Difficulty::Advanced => Difficulty::ADVANCED,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Difficulty::EASY => Ok(Difficulty::Easy),
            Difficulty::MEDIUM => Ok(Difficulty::Medium),
            Difficulty::HARD => Ok(Difficulty::Hard),
            Difficulty::ADVANCED => Ok(Difficulty::Advanced),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程标题
    pub title: String,
    // 课程描述
    pub description: String,
    // 开课日期
    pub date: chrono::NaiveDate,
    // 总分
    pub total_marks: u32,
    // 难度
    pub difficulty: Difficulty,
    // 所属教师ID
    pub teacher_id: i64,
}

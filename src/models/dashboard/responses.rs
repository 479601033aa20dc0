use crate::models::classes::responses::ClassDetail;
use crate::models::courses::entities::Course;
use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

// 仪表盘视图，按用户角色区分
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "role", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub enum Dashboard {
    Teacher {
        user: User,
        classes: Vec<ClassDetail>,
        courses: Vec<Course>,
    },
    Student {
        user: User,
        classes: Vec<ClassDetail>,
    },
}

impl Dashboard {
    pub fn user(&self) -> &User {
        match self {
            Dashboard::Teacher { user, .. } | Dashboard::Student { user, .. } => user,
        }
    }

    pub fn classes(&self) -> &[ClassDetail] {
        match self {
            Dashboard::Teacher { classes, .. } | Dashboard::Student { classes, .. } => classes,
        }
    }
}

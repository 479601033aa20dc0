//! Course Dashboard - 教师/学生课程班级管理
//!
//! 课程与班级的分配状态，以及支撑仪表盘的数据访问层。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（分配状态、仪表盘）
//! - `storage`: 数据存储层（内存实现）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

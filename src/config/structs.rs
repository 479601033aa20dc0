use serde::{Deserialize, Serialize};

use crate::utils::validate::CourseLimits;

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub validation: ValidationConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "Course Dashboard".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: String,                // 存储后端名称
    pub fixtures_path: Option<String>,  // 种子数据文件，为空时使用内置数据
    pub simulated_delay_ms: u64,        // 每次调用前的模拟延迟 (毫秒)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            fixtures_path: None,
            simulated_delay_ms: 0,
        }
    }
}

/// 会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub user_id: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { user_id: 1 }
    }
}

/// 课程字段校验配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub max_total_marks: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let limits = CourseLimits::default();
        Self {
            max_title_length: limits.max_title_length,
            max_description_length: limits.max_description_length,
            max_total_marks: limits.max_total_marks,
        }
    }
}

impl From<&ValidationConfig> for CourseLimits {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            max_title_length: config.max_title_length,
            max_description_length: config.max_description_length,
            max_total_marks: config.max_total_marks,
        }
    }
}

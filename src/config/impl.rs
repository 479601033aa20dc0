use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;
use crate::utils::validate::CourseLimits;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("DASHBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option(
                "storage.fixtures_path",
                std::env::var("DASHBOARD_FIXTURES").ok(),
            )?
            .set_override_option("session.user_id", std::env::var("DASHBOARD_USER_ID").ok())?;

        let app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.check()?;
        Ok(app_config)
    }

    /// 检查配置取值
    fn check(&self) -> Result<(), ConfigError> {
        if self.validation.max_title_length == 0 {
            return Err(ConfigError::Message(
                "validation.max_title_length must be positive".to_string(),
            ));
        }
        if self.validation.max_total_marks == 0 {
            return Err(ConfigError::Message(
                "validation.max_total_marks must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 课程字段限制
    pub fn course_limits(&self) -> CourseLimits {
        CourseLimits::from(&self.validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize_from_empty_source() {
        let config: AppConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.storage.backend, "memory");
        assert_eq!(config.session.user_id, 1);
        assert!(config.is_development());
        assert_eq!(config.course_limits(), CourseLimits::default());
    }

    #[test]
    fn test_overrides_apply() {
        let config: AppConfig = Config::builder()
            .set_override("validation.max_title_length", 20)
            .unwrap()
            .set_override("app.environment", "production")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert!(config.is_production());
        assert_eq!(config.course_limits().max_title_length, 20);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_zero_title_length_rejected() {
        let mut config = AppConfig::default();
        config.validation.max_title_length = 0;
        assert!(config.check().is_err());
    }
}

//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_dashboard_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum DashboardError {
            $($variant(String),)*
        }

        impl DashboardError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(DashboardError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(DashboardError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(DashboardError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl DashboardError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        DashboardError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_dashboard_errors! {
    NotFound("E001", "Resource Not Found"),
    DuplicateAssignment("E002", "Duplicate Assignment"),
    NotAssigned("E003", "Not Assigned"),
    NotOwner("E004", "Not Owner"),
    Validation("E005", "Validation Error"),
    UnknownFailure("E006", "Unknown Failure"),
    Configuration("E007", "Configuration Error"),
    StoragePluginNotFound("E008", "Storage Plugin Not Found"),
    Serialization("E009", "Serialization Error"),
    FileOperation("E010", "File Operation Error"),
}

impl DashboardError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DashboardError {}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for DashboardError {
    fn from(err: config::ConfigError) -> Self {
        DashboardError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

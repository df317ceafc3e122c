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
macro_rules! define_sams_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SamsError {
            $($variant(String),)*
        }

        impl SamsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SamsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SamsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SamsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SamsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SamsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_sams_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    TransactionFailed("E004", "Transaction Failed"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Conflict("E007", "Resource Conflict"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
}

impl SamsError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否由存储层唯一约束触发
    ///
    /// 选课表与考勤表的唯一索引是并发写入时的最终裁决，
    /// 服务层的存在性预检查只是优化。
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, SamsError::DatabaseOperation(msg) | SamsError::TransactionFailed(msg)
            if msg.contains("UNIQUE constraint failed")
                || msg.contains("duplicate key value")
                || msg.contains("Duplicate entry"))
    }

    /// 是否由存储层外键约束触发
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, SamsError::DatabaseOperation(msg) | SamsError::TransactionFailed(msg)
            if msg.contains("FOREIGN KEY constraint failed")
                || msg.contains("foreign key constraint"))
    }
}

impl fmt::Display for SamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SamsError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SamsError {
    fn from(err: sea_orm::DbErr) -> Self {
        SamsError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SamsError {
    fn from(err: std::io::Error) -> Self {
        SamsError::DatabaseConnection(err.to_string())
    }
}

impl From<serde_json::Error> for SamsError {
    fn from(err: serde_json::Error) -> Self {
        SamsError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SamsError {
    fn from(err: chrono::ParseError) -> Self {
        SamsError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SamsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SamsError::database_config("test").code(), "E001");
        assert_eq!(SamsError::validation("test").code(), "E005");
        assert_eq!(SamsError::conflict("test").code(), "E007");
        assert_eq!(SamsError::authentication("test").code(), "E010");
    }

    #[test]
    fn test_error_message() {
        let err = SamsError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = SamsError::not_found("Class 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Class 42"));
    }

    #[test]
    fn test_unique_violation_detection() {
        let err = SamsError::database_operation(
            "UNIQUE constraint failed: enrollments.student_id, enrollments.class_id",
        );
        assert!(err.is_unique_violation());
        assert!(!err.is_foreign_key_violation());

        let err = SamsError::transaction_failed("FOREIGN KEY constraint failed");
        assert!(err.is_foreign_key_violation());
        assert!(!err.is_unique_violation());
    }
}

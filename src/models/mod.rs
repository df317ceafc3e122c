//! 业务数据模型
//!
//! 按领域划分：每个子模块包含 entities / requests / responses。

pub mod common;

pub mod attendance;
pub mod auth;
pub mod classes;
pub mod enrollments;
pub mod events;
pub mod lessons;
pub mod notes;
pub mod performance;
pub mod students;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间，用于健康检查与启动耗时统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

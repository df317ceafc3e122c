use crate::models::users::entities::UserRole;
use serde::Deserialize;

// 创建用户请求（内部使用，由学生创建等流程组装）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

use serde::Deserialize;

// 创建学生请求：同时创建用户账号与学生档案
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<String>,
    pub grade: String,
    pub student_number: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

// 更新学生请求，所有字段可选
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub grade: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

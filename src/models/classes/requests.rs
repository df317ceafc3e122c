use serde::Deserialize;

// 创建班级请求
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub code: String,
    pub grade: String,
    pub teacher_id: i64,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub description: Option<String>,
}

// 更新班级请求，所有字段可选
#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub teacher_id: Option<i64>,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

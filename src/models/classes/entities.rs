use serde::{Deserialize, Serialize};

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub grade: String,
    pub teacher_id: i64,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

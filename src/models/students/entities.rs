use serde::{Deserialize, Serialize};

// 学生实体（关联一个用户账号）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub student_number: String,
    pub grade: String,
    pub enrollment_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

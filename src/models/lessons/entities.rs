use serde::{Deserialize, Serialize};

// 课程实体：某班级的一节课
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub title: String,
    pub subject: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i32,
    pub lesson_type: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub materials: Option<String>,
    pub homework: Option<String>,
    pub is_completed: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

use serde::Deserialize;

// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateLessonRequest {
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
}

// 更新课程请求
#[derive(Debug, Deserialize)]
pub struct UpdateLessonRequest {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub duration_minutes: Option<i32>,
    pub lesson_type: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub materials: Option<String>,
    pub homework: Option<String>,
    pub is_completed: Option<bool>,
}

// 课程查询条件
#[derive(Debug, Deserialize)]
pub struct LessonQuery {
    pub class_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub is_completed: Option<bool>,
}

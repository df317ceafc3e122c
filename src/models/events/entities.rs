use serde::{Deserialize, Serialize};

// 校历事件实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_date: chrono::NaiveDate,
    pub event_time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
    pub is_all_day: bool,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

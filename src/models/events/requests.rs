use serde::Deserialize;

// 创建校历事件请求，created_by 取自认证主体
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub event_date: chrono::NaiveDate,
    pub event_time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
    pub is_all_day: Option<bool>,
}

// 校历事件查询条件，闭区间日期过滤
#[derive(Debug, Deserialize)]
pub struct EventQuery {
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

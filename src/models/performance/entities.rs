use serde::{Deserialize, Serialize};

// 学业表现记录，mastery_level 取值 1-5
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceResult {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub mastery_level: i32,
    pub grade: Option<String>,
    pub assessment_type: Option<String>,
    pub max_score: Option<f64>,
    pub achieved_score: Option<f64>,
    pub assessment_date: chrono::DateTime<chrono::Utc>,
}

use serde::Deserialize;

// 录入学业表现请求
#[derive(Debug, Deserialize)]
pub struct AddPerformanceRequest {
    pub student_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub mastery_level: i32,
    pub grade: Option<String>,
    pub assessment_type: Option<String>,
    pub max_score: Option<f64>,
    pub achieved_score: Option<f64>,
}

impl AddPerformanceRequest {
    /// mastery_level 必须在 1-5 之间
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.mastery_level) {
            return Err("mastery_level must be between 1 and 5".to_string());
        }
        Ok(())
    }
}

// 学业表现查询条件
#[derive(Debug, Deserialize)]
pub struct PerformanceQuery {
    pub student_id: Option<i64>,
    pub class_id: Option<i64>,
    pub subject: Option<String>,
}

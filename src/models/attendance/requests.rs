use serde::Deserialize;

use super::entities::AttendanceStatus;

// 单条考勤记录条目
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

// 批量考勤提交请求：同一班级同一天的一批学生考勤
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    pub class_id: i64,
    pub date: chrono::NaiveDate,
    pub records: Vec<AttendanceEntry>,
}

impl MarkAttendanceRequest {
    /// 事务开始前的边界校验，不合法的请求不进入存储层
    pub fn validate(&self) -> Result<(), String> {
        if self.class_id <= 0 {
            return Err("class_id must be a positive integer".to_string());
        }
        if self.records.is_empty() {
            return Err("records must not be empty".to_string());
        }
        if let Some(entry) = self.records.iter().find(|r| r.student_id <= 0) {
            return Err(format!(
                "invalid student_id in records: {}",
                entry.student_id
            ));
        }
        Ok(())
    }
}

// 考勤查询条件，各过滤项之间为 AND 关系
// 日期区间为闭区间，start 与 end 相同即查询单日
#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    pub class_id: Option<i64>,
    pub student_id: Option<i64>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request(records: Vec<AttendanceEntry>) -> MarkAttendanceRequest {
        MarkAttendanceRequest {
            class_id: 1,
            date: chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            records,
        }
    }

    #[test]
    fn test_empty_records_rejected() {
        let req = base_request(vec![]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_valid_request_passes() {
        let req = base_request(vec![AttendanceEntry {
            student_id: 7,
            status: AttendanceStatus::Present,
            notes: None,
        }]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_non_positive_student_id_rejected() {
        let req = base_request(vec![AttendanceEntry {
            student_id: 0,
            status: AttendanceStatus::Absent,
            notes: None,
        }]);
        assert!(req.validate().is_err());
    }
}

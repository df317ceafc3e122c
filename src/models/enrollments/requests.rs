use serde::Deserialize;

// 选课请求（班级 ID 来自路径）
#[derive(Debug, Deserialize)]
pub struct EnrollStudentRequest {
    pub student_id: i64,
}

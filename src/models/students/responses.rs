use serde::Serialize;

use crate::models::students::entities::Student;

// 学生详情：档案 + 账号信息拍平后的视图
#[derive(Debug, Serialize)]
pub struct StudentView {
    pub id: i64,
    pub student_number: String,
    pub grade: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub enrollment_date: chrono::DateTime<chrono::Utc>,
}

impl StudentView {
    pub fn from_parts(student: Student, user: crate::models::users::entities::User) -> Self {
        Self {
            id: student.id,
            student_number: student.student_number,
            grade: student.grade,
            email: user.email,
            first_name: user.profile.first_name,
            last_name: user.profile.last_name,
            phone: user.profile.phone,
            avatar_url: user.profile.avatar_url,
            is_active: user.is_active,
            enrollment_date: student.enrollment_date,
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rand::Rng;
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

/// 未指定学号时按年份加随机序号生成
fn generate_student_number() -> String {
    let year = chrono::Utc::now().format("%Y");
    let serial: u32 = rand::rng().random_range(100_000..1_000_000);
    format!("S{year}{serial}")
}

/// 未指定密码时生成随机初始密码
fn generate_initial_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";
    let mut rng = rand::rng();
    (0..12)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if student_data.first_name.trim().is_empty() || student_data.last_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "first_name and last_name are required",
        )));
    }
    if let Err(e) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParams, e)));
    }
    if let Some(ref password) = student_data.password
        && let Err(e) = validate_password_simple(password)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParams, e)));
    }

    let password = student_data
        .password
        .clone()
        .unwrap_or_else(generate_initial_password);
    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreationFailed,
                    "Failed to process password",
                )),
            );
        }
    };

    let student_number = student_data
        .student_number
        .clone()
        .unwrap_or_else(generate_student_number);

    // 学号兼作登录用户名
    let user = CreateUserRequest {
        username: student_number.clone(),
        email: student_data.email,
        password: password_hash,
        role: UserRole::Student,
        first_name: Some(student_data.first_name),
        last_name: Some(student_data.last_name),
        phone: student_data.phone,
        address: student_data.address,
    };

    match storage
        .create_student(user, student_number, student_data.grade)
        .await
    {
        Ok(student) => {
            info!("Student {} created successfully", student.student_number);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "Email or student number already exists"),
        )),
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreationFailed,
                    format!("Student creation failed: {e}"),
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn enroll_student(
    service: &EnrollmentService,
    request: &HttpRequest,
    class_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级与学生都必须存在
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to check class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check class",
                )),
            );
        }
    }

    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to check student {}: {}", student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check student",
                )),
            );
        }
    }

    // 重复选课预检查，给出友好错误
    match storage.get_enrollment(student_id, class_id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "Student is already enrolled in this class",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check enrollment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check enrollment",
                )),
            );
        }
    }

    match storage.enroll_student(student_id, class_id).await {
        Ok(enrollment) => {
            info!("Student {} enrolled in class {}", student_id, class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "Student enrolled")))
        }
        // 并发选课时唯一索引兜底，与预检查命中同样报 409
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "Student is already enrolled in this class",
            ),
        )),
        Err(e) => {
            error!(
                "Enrollment failed for student {} in class {}: {}",
                student_id, class_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentFailed,
                    format!("Enrollment failed: {e}"),
                )),
            )
        }
    }
}

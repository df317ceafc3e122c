use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn unenroll_student(
    service: &EnrollmentService,
    request: &HttpRequest,
    class_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.unenroll_student(student_id, class_id).await {
        Ok(true) => {
            info!("Student {} unenrolled from class {}", student_id, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Student unenrolled")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => {
            error!(
                "Failed to unenroll student {} from class {}: {}",
                student_id, class_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to unenroll student",
                )),
            )
        }
    }
}

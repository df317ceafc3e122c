use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_class_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级不存在与空名册要区分开
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

    match storage.list_class_enrollments(class_id).await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollments, "OK"))),
        Err(e) => {
            error!("Failed to list enrollments for class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list enrollments",
                )),
            )
        }
    }
}

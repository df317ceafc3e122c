use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::PerformanceService;
use crate::models::performance::requests::AddPerformanceRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn add_performance(
    service: &PerformanceService,
    request: &HttpRequest,
    req: AddPerformanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(e) = req.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParams, e)));
    }

    // 学生与班级都必须存在
    match storage.get_student_by_id(req.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to check student {}: {}", req.student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check student",
                )),
            );
        }
    }

    match storage.get_class_by_id(req.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to check class {}: {}", req.class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check class",
                )),
            );
        }
    }

    match storage.add_performance(req).await {
        Ok(result) => {
            info!(
                "Performance recorded for student {} in class {}",
                result.student_id, result.class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(result, "Performance recorded")))
        }
        Err(e) => {
            error!("Failed to record performance: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::PerformanceOperationFailed,
                    format!("Failed to record performance: {e}"),
                )),
            )
        }
    }
}

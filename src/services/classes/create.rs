use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if class_data.name.trim().is_empty() || class_data.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "name and code are required",
        )));
    }

    // 班级代码唯一性预检查
    match storage.get_class_by_code(&class_data.code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ClassCodeExists,
                "Class code already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check class code: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check class code",
                )),
            );
        }
    }

    // 授课教师必须存在且为教师角色
    match storage.get_user_by_id(class_data.teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidTeacher,
                "teacher_id does not refer to a teacher account",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::InvalidTeacher,
                "Teacher not found",
            )));
        }
        Err(e) => {
            error!("Failed to check teacher: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check teacher",
                )),
            );
        }
    }

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} ({}) created", class.name, class.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(class, "Class created")))
        }
        // 并发创建时唯一索引兜底
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::ClassCodeExists, "Class code already exists"),
        )),
        Err(e) => {
            error!("Class creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassOperationFailed,
                    format!("Class creation failed: {e}"),
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 变更授课教师时校验目标账号
    if let Some(teacher_id) = update_data.teacher_id {
        match storage.get_user_by_id(teacher_id).await {
            Ok(Some(user)) if user.role == UserRole::Teacher => {}
            Ok(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidTeacher,
                    "teacher_id does not refer to a teacher account",
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
    }

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => {
            info!("Class {} updated", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            error!("Failed to update class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassOperationFailed,
                    "Failed to update class",
                )),
            )
        }
    }
}

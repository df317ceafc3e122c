use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LessonService;
use crate::models::lessons::requests::CreateLessonRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_lesson(
    service: &LessonService,
    request: &HttpRequest,
    lesson_data: CreateLessonRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if lesson_data.title.trim().is_empty() || lesson_data.subject.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "title and subject are required",
        )));
    }
    if lesson_data.duration_minutes <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "duration_minutes must be positive",
        )));
    }

    // 班级必须存在
    match storage.get_class_by_id(lesson_data.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to check class {}: {}", lesson_data.class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check class",
                )),
            );
        }
    }

    // 授课教师必须存在且为教师角色
    match storage.get_user_by_id(lesson_data.teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidTeacher,
                "teacher_id does not refer to a teacher account",
            )));
        }
        Err(e) => {
            error!("Failed to check teacher {}: {}", lesson_data.teacher_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check teacher",
                )),
            );
        }
    }

    match storage.create_lesson(lesson_data).await {
        Ok(lesson) => {
            info!("Lesson {} created for class {}", lesson.id, lesson.class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(lesson, "Lesson created")))
        }
        Err(e) => {
            error!("Lesson creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::LessonOperationFailed,
                    format!("Lesson creation failed: {e}"),
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LessonService;
use crate::models::lessons::requests::UpdateLessonRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_lesson(
    service: &LessonService,
    request: &HttpRequest,
    lesson_id: i64,
    update_data: UpdateLessonRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_lesson(lesson_id, update_data).await {
        Ok(Some(lesson)) => {
            info!("Lesson {} updated", lesson_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(lesson, "Lesson updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LessonNotFound,
            "Lesson not found",
        ))),
        Err(e) => {
            error!("Failed to update lesson {}: {}", lesson_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::LessonOperationFailed,
                    "Failed to update lesson",
                )),
            )
        }
    }
}

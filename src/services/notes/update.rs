use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::NoteService;
use crate::middlewares::RequireJWT;
use crate::models::notes::requests::UpdateNoteRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_note(
    service: &NoteService,
    request: &HttpRequest,
    note_id: i64,
    update_data: UpdateNoteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    // 只允许操作自己的便签,不存在与不属于自己统一返回 404
    match storage.update_note(user_id, note_id, update_data).await {
        Ok(Some(note)) => {
            info!("Note {} updated by user {}", note_id, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(note, "Note updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NoteNotFound,
            "Note not found",
        ))),
        Err(e) => {
            error!("Failed to update note {} for user {}: {}", note_id, user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::NoteOperationFailed,
                    "Failed to update note",
                )),
            )
        }
    }
}

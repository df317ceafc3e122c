use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::NoteService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_note(
    service: &NoteService,
    request: &HttpRequest,
    note_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    match storage.delete_note(user_id, note_id).await {
        Ok(true) => {
            info!("Note {} deleted by user {}", note_id, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Note deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NoteNotFound,
            "Note not found",
        ))),
        Err(e) => {
            error!("Failed to delete note {} for user {}: {}", note_id, user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::NoteOperationFailed,
                    "Failed to delete note",
                )),
            )
        }
    }
}

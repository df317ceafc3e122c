use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::NoteService;
use crate::middlewares::RequireJWT;
use crate::models::notes::requests::CreateNoteRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_note(
    service: &NoteService,
    request: &HttpRequest,
    note_data: CreateNoteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if note_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "title is required",
        )));
    }

    match storage.create_note(user_id, note_data).await {
        Ok(note) => {
            info!("Note {} created by user {}", note.id, user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(note, "Note created")))
        }
        Err(e) => {
            error!("Note creation failed for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::NoteOperationFailed,
                    "Note creation failed",
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NoteService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_notes(service: &NoteService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    match storage.list_notes(user_id).await {
        Ok(notes) => Ok(HttpResponse::Ok().json(ApiResponse::success(notes, "OK"))),
        Err(e) => {
            error!("Failed to list notes for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::NoteOperationFailed,
                    "Failed to list notes",
                )),
            )
        }
    }
}

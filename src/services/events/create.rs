use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EventService;
use crate::middlewares::RequireJWT;
use crate::models::events::requests::CreateEventRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_event(
    service: &EventService,
    request: &HttpRequest,
    event_data: CreateEventRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(created_by) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if event_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "title is required",
        )));
    }

    match storage.create_event(event_data, created_by).await {
        Ok(event) => {
            info!("Event {} created by user {}", event.id, created_by);
            Ok(HttpResponse::Created().json(ApiResponse::success(event, "Event created")))
        }
        Err(e) => {
            error!("Event creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EventOperationFailed,
                    format!("Event creation failed: {e}"),
                )),
            )
        }
    }
}

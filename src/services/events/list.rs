use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EventService;
use crate::models::events::requests::EventQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_events(
    service: &EventService,
    request: &HttpRequest,
    query: EventQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        if start > end {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidParams,
                "start_date must not be after end_date",
            )));
        }
    }

    match storage.list_events(query).await {
        Ok(events) => Ok(HttpResponse::Ok().json(ApiResponse::success(events, "OK"))),
        Err(e) => {
            error!("Failed to list events: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EventOperationFailed,
                    "Failed to list events",
                )),
            )
        }
    }
}

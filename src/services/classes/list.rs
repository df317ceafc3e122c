use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "OK"))),
        Err(e) => {
            error!("Failed to list classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PerformanceService;
use crate::models::performance::requests::PerformanceQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_performance(
    service: &PerformanceService,
    request: &HttpRequest,
    query: PerformanceQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_performance(query).await {
        Ok(results) => Ok(HttpResponse::Ok().json(ApiResponse::success(results, "OK"))),
        Err(e) => {
            error!("Failed to list performance records: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::PerformanceOperationFailed,
                    "Failed to list performance records",
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::attendance::requests::AttendanceQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn query_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    query: AttendanceQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 区间两端都给出时必须有序
    if let (Some(start), Some(end)) = (query.start_date, query.end_date)
        && start > end
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "start_date must not be after end_date",
        )));
    }

    match storage.query_attendance(query).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(records, "OK"))),
        Err(e) => {
            error!("Attendance query failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceQueryFailed,
                    "Attendance query failed",
                )),
            )
        }
    }
}

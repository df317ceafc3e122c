use crate::models::{ApiResponse, ErrorCode};
use actix_web::{HttpRequest, HttpResponse, error::InternalError};

/// JSON 请求体解析失败时返回统一响应结构
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = format!("Invalid JSON payload: {err}");
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_empty(ErrorCode::InvalidParams, message));
    InternalError::from_response(err, response).into()
}

/// Query 参数解析失败时返回统一响应结构
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = format!("Invalid query parameters: {err}");
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_empty(ErrorCode::InvalidParams, message));
    InternalError::from_response(err, response).into()
}

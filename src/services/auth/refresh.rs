use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, auth::responses::RefreshResponse};
use crate::utils::jwt::JwtUtils;

pub async fn handle_refresh(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Missing refresh token",
        )));
    };

    match JwtUtils::refresh_access_token(&refresh_token) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
            },
            "Token refreshed",
        ))),
        Err(e) => {
            tracing::info!("Refresh token validation failed: {}", e);
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Invalid or expired refresh token",
            )))
        }
    }
}

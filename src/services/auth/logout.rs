use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

pub async fn handle_logout(_request: &HttpRequest) -> ActixResult<HttpResponse> {
    // 清除 refresh token cookie 即完成注销
    let empty_cookie = JwtUtils::create_empty_refresh_token_cookie();
    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(ApiResponse::<()>::success_empty("Logged out")))
}

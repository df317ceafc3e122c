use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    request: &HttpRequest,
    login_request: LoginRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    // 1. 根据用户名或邮箱获取用户信息
    match storage
        .get_user_by_username_or_email(&login_request.username)
        .await
    {
        Ok(Some(user)) => {
            // 2. 验证密码与账号状态
            if !verify_password(&login_request.password, &user.password_hash) {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Username or password is incorrect",
                )));
            }
            if !user.is_active {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Account is disabled",
                )));
            }

            // 3. 更新最后登录时间
            let _ = storage.update_last_login(user.id).await;

            // 4. 生成令牌对
            match JwtUtils::generate_token_pair(user.id, &user.role.to_string()) {
                Ok(token_pair) => {
                    tracing::info!("User {} logged in successfully", user.username);

                    let response = LoginResponse {
                        access_token: token_pair.access_token,
                        expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                        user,
                        created_at: chrono::Utc::now(),
                    };

                    // 5. refresh token 写入 HttpOnly Cookie
                    let refresh_cookie =
                        JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                    Ok(HttpResponse::Ok()
                        .cookie(refresh_cookie)
                        .json(ApiResponse::success(response, "Login successful")))
                }
                Err(e) => {
                    tracing::error!("Failed to generate JWT token: {}", e);
                    Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Login failed, unable to generate token",
                        )),
                    )
                }
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}

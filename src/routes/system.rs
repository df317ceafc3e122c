use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::json;

use crate::config::AppConfig;
use crate::models::{ApiResponse, AppStartTime};

// 健康检查,不要求认证,供探活与部署脚本使用
pub async fn health(start_time: web::Data<AppStartTime>) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let uptime = chrono::Utc::now()
        .signed_duration_since(start_time.start_datetime)
        .num_seconds();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        json!({
            "status": "ok",
            "system": config.app.system_name,
            "environment": config.app.environment,
            "started_at": start_time.start_datetime,
            "uptime_seconds": uptime,
        }),
        "OK",
    )))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/health", web::get().to(health));
}

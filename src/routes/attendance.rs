use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, Operation};
use crate::models::attendance::requests::{AttendanceQuery, MarkAttendanceRequest};
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn mark_attendance(
    req: HttpRequest,
    batch: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(&req, batch.into_inner())
        .await
}

pub async fn query_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .query_attendance(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(query_attendance)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::QueryAttendance,
                            )),
                    )
                    .route(
                        web::post()
                            .to(mark_attendance)
                            // 批量点名,仅教师和管理员
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::MarkAttendance,
                            )),
                    ),
            ),
    );
}

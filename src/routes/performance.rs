use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, Operation};
use crate::models::performance::requests::{AddPerformanceRequest, PerformanceQuery};
use crate::services::PerformanceService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 PerformanceService 实例
static PERFORMANCE_SERVICE: Lazy<PerformanceService> = Lazy::new(PerformanceService::new_lazy);

pub async fn add_performance(
    req: HttpRequest,
    performance_data: web::Json<AddPerformanceRequest>,
) -> ActixResult<HttpResponse> {
    PERFORMANCE_SERVICE
        .add_performance(&req, performance_data.into_inner())
        .await
}

pub async fn list_student_performance(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<PerformanceQuery>,
) -> ActixResult<HttpResponse> {
    let mut query = query.into_inner();
    query.student_id = Some(student_id.0);
    PERFORMANCE_SERVICE.list_performance(&req, query).await
}

// 配置路由
pub fn configure_performance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/performance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(add_performance)
                        .wrap(middlewares::RequireRole::for_operation(
                            Operation::AddPerformance,
                        )),
                ),
            )
            .service(
                web::resource("/student/{student_id}").route(
                    web::get()
                        .to(list_student_performance)
                        .wrap(middlewares::RequireRole::for_operation(
                            Operation::ListPerformance,
                        )),
                ),
            ),
    );
}

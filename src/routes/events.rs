use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, Operation};
use crate::models::events::requests::{CreateEventRequest, EventQuery};
use crate::services::EventService;
use crate::utils::SafeEventIdI64;

// 懒加载的全局 EventService 实例
static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);

pub async fn create_event(
    req: HttpRequest,
    event_data: web::Json<CreateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.create_event(&req, event_data.into_inner()).await
}

pub async fn list_events(
    req: HttpRequest,
    query: web::Query<EventQuery>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_events(&req, query.into_inner()).await
}

pub async fn delete_event(req: HttpRequest, event_id: SafeEventIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.delete_event(&req, event_id.0).await
}

// 配置路由
pub fn configure_events_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/events")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_events)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::ListEvents,
                            )),
                    )
                    .route(
                        web::post()
                            .to(create_event)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::CreateEvent,
                            )),
                    ),
            )
            .service(
                web::resource("/{event_id}").route(
                    web::delete()
                        .to(delete_event)
                        .wrap(middlewares::RequireRole::for_operation(
                            Operation::DeleteEvent,
                        )),
                ),
            ),
    );
}

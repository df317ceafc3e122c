use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, Operation};
use crate::models::lessons::requests::{CreateLessonRequest, LessonQuery, UpdateLessonRequest};
use crate::services::LessonService;
use crate::utils::SafeLessonIdI64;

// 懒加载的全局 LessonService 实例
static LESSON_SERVICE: Lazy<LessonService> = Lazy::new(LessonService::new_lazy);

pub async fn create_lesson(
    req: HttpRequest,
    lesson_data: web::Json<CreateLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .create_lesson(&req, lesson_data.into_inner())
        .await
}

pub async fn list_lessons(
    req: HttpRequest,
    query: web::Query<LessonQuery>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.list_lessons(&req, query.into_inner()).await
}

pub async fn update_lesson(
    req: HttpRequest,
    lesson_id: SafeLessonIdI64,
    update_data: web::Json<UpdateLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .update_lesson(&req, lesson_id.0, update_data.into_inner())
        .await
}

pub async fn delete_lesson(
    req: HttpRequest,
    lesson_id: SafeLessonIdI64,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.delete_lesson(&req, lesson_id.0).await
}

// 配置路由
pub fn configure_lessons_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lessons")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_lessons)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::ListLessons,
                            )),
                    )
                    .route(
                        web::post()
                            .to(create_lesson)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::CreateLesson,
                            )),
                    ),
            )
            .service(
                web::resource("/{lesson_id}")
                    .route(
                        web::put()
                            .to(update_lesson)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::UpdateLesson,
                            )),
                    )
                    .route(
                        web::delete()
                            .to(delete_lesson)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::DeleteLesson,
                            )),
                    ),
            ),
    );
}

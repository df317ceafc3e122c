use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, Operation};
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::models::enrollments::requests::EnrollStudentRequest;
use crate::services::{ClassService, EnrollmentService};
use crate::utils::{SafeClassIdI64, SafeStudentIdI64};

// 懒加载的全局服务实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn get_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.0).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

pub async fn enroll_student(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    enroll_data: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .enroll_student(&req, class_id.0, enroll_data.into_inner().student_id)
        .await
}

pub async fn unenroll_student(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .unenroll_student(&req, class_id.0, student_id.0)
        .await
}

pub async fn list_class_enrollments(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_class_enrollments(&req, class_id.0)
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_classes)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::ListClasses,
                            )),
                    )
                    .route(
                        web::post()
                            .to(create_class)
                            // 仅管理员可开班
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::CreateClass,
                            )),
                    ),
            )
            .service(
                web::resource("/{class_id}/enroll").route(
                    web::post()
                        .to(enroll_student)
                        .wrap(middlewares::RequireRole::for_operation(
                            Operation::EnrollStudent,
                        )),
                ),
            )
            .service(
                web::resource("/{class_id}/enrollments").route(
                    web::get()
                        .to(list_class_enrollments)
                        .wrap(middlewares::RequireRole::for_operation(
                            Operation::ListEnrollments,
                        )),
                ),
            )
            .service(
                web::resource("/{class_id}/students/{student_id}").route(
                    web::delete()
                        .to(unenroll_student)
                        .wrap(middlewares::RequireRole::for_operation(
                            Operation::UnenrollStudent,
                        )),
                ),
            )
            .service(
                web::resource("/{class_id}")
                    .route(
                        web::get()
                            .to(get_class)
                            .wrap(middlewares::RequireRole::for_operation(Operation::GetClass)),
                    )
                    .route(
                        web::put()
                            .to(update_class)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::UpdateClass,
                            )),
                    )
                    .route(
                        web::delete()
                            .to(delete_class)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::DeleteClass,
                            )),
                    ),
            ),
    );
}

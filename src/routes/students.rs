use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, Operation};
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::services::StudentService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, student_id.0).await
}

pub async fn list_student_enrollments(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_student_enrollments(&req, student_id.0)
        .await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.0, update_data.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, student_id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_students)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::ListStudents,
                            )),
                    )
                    .route(
                        web::post()
                            .to(create_student)
                            // 仅管理员可建档
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::CreateStudent,
                            )),
                    ),
            )
            .service(
                web::resource("/{student_id}/enrollments").route(
                    web::get()
                        .to(list_student_enrollments)
                        .wrap(middlewares::RequireRole::for_operation(
                            Operation::ListEnrollments,
                        )),
                ),
            )
            .service(
                web::resource("/{student_id}")
                    .route(
                        web::get()
                            .to(get_student)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::GetStudent,
                            )),
                    )
                    .route(
                        web::put()
                            .to(update_student)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::UpdateStudent,
                            )),
                    )
                    .route(
                        web::delete()
                            .to(delete_student)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::DeleteStudent,
                            )),
                    ),
            ),
    );
}

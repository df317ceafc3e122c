/*!
 * 基于角色的访问控制中间件
 *
 * 必须在 RequireJWT 中间件之后使用。角色要求不在路由处写死，
 * 而是按操作名查询 policy 模块中的策略表。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/attendance")
 *     .wrap(RequireRole::for_operation(Operation::MarkAttendance))
 *     .wrap(RequireJWT)
 *     .route("", web::post().to(mark_attendance))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::middlewares::policy::{self, Operation, PolicyDecision};
use crate::middlewares::require_jwt::AuthSubject;
use crate::models::ErrorCode;

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    operation: Operation,
}

impl RequireRole {
    /// 创建按策略表保护指定操作的中间件
    pub fn for_operation(operation: Operation) -> Self {
        Self { operation }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            operation: self.operation,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    operation: Operation,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let operation = self.operation;

        Box::pin(async move {
            let subject = req.extensions().get::<AuthSubject>().copied();

            match subject {
                Some(subject) => match policy::check(operation, subject.role) {
                    PolicyDecision::Allowed => {
                        let res = srv.call(req).await?.map_into_left_body();
                        Ok(res)
                    }
                    PolicyDecision::Forbidden => {
                        info!(
                            "Access denied for user {} (role: {}) on {:?}",
                            subject.id, subject.role, operation
                        );
                        Ok(req.into_response(
                            create_error_response(
                                StatusCode::FORBIDDEN,
                                ErrorCode::PermissionDenied,
                                "Access denied.",
                            )
                            .map_into_right_body(),
                        ))
                    }
                },
                None => {
                    info!(
                        "Role check failed: No auth subject found in request. Make sure RequireJWT middleware is applied first."
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Authentication required",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

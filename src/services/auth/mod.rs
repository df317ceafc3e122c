pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auth::requests::LoginRequest;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 用户登录
    pub async fn login(
        &self,
        request: &HttpRequest,
        login_request: LoginRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, request, login_request).await
    }

    // 刷新 Access Token
    pub async fn refresh(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        refresh::handle_refresh(request).await
    }

    // 当前登录用户信息
    pub async fn me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        me::handle_me(self, request).await
    }

    // 注销
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(request).await
    }
}

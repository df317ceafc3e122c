pub mod add;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::performance::requests::{AddPerformanceRequest, PerformanceQuery};
use crate::storage::Storage;

pub struct PerformanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl PerformanceService {
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

    // 录入学业表现
    pub async fn add_performance(
        &self,
        request: &HttpRequest,
        req: AddPerformanceRequest,
    ) -> ActixResult<HttpResponse> {
        add::add_performance(self, request, req).await
    }

    // 按条件查询学业表现
    pub async fn list_performance(
        &self,
        request: &HttpRequest,
        query: PerformanceQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_performance(self, request, query).await
    }
}

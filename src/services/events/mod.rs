pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::events::requests::{CreateEventRequest, EventQuery};
use crate::storage::Storage;

pub struct EventService {
    storage: Option<Arc<dyn Storage>>,
}

impl EventService {
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

    // 创建校历事件
    pub async fn create_event(
        &self,
        request: &HttpRequest,
        event_data: CreateEventRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_event(self, request, event_data).await
    }

    // 按日期范围列出事件
    pub async fn list_events(
        &self,
        request: &HttpRequest,
        query: EventQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_events(self, request, query).await
    }

    // 删除事件
    pub async fn delete_event(
        &self,
        request: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_event(self, request, event_id).await
    }
}

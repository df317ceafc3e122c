pub mod mark;
pub mod query;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{AttendanceQuery, MarkAttendanceRequest};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 批量提交考勤
    pub async fn mark_attendance(
        &self,
        request: &HttpRequest,
        batch: MarkAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, request, batch).await
    }

    // 按条件查询考勤记录
    pub async fn query_attendance(
        &self,
        request: &HttpRequest,
        query: AttendanceQuery,
    ) -> ActixResult<HttpResponse> {
        query::query_attendance(self, request, query).await
    }
}

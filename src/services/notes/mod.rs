pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notes::requests::{CreateNoteRequest, UpdateNoteRequest};
use crate::storage::Storage;

pub struct NoteService {
    storage: Option<Arc<dyn Storage>>,
}

impl NoteService {
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

    // 创建便签
    pub async fn create_note(
        &self,
        request: &HttpRequest,
        note_data: CreateNoteRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_note(self, request, note_data).await
    }

    // 列出当前用户的便签
    pub async fn list_notes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_notes(self, request).await
    }

    // 更新便签
    pub async fn update_note(
        &self,
        request: &HttpRequest,
        note_id: i64,
        update_data: UpdateNoteRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_note(self, request, note_id, update_data).await
    }

    // 删除便签
    pub async fn delete_note(
        &self,
        request: &HttpRequest,
        note_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_note(self, request, note_id).await
    }
}

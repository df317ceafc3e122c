pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lessons::requests::{CreateLessonRequest, LessonQuery, UpdateLessonRequest};
use crate::storage::Storage;

pub struct LessonService {
    storage: Option<Arc<dyn Storage>>,
}

impl LessonService {
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

    // 创建课程
    pub async fn create_lesson(
        &self,
        request: &HttpRequest,
        lesson_data: CreateLessonRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_lesson(self, request, lesson_data).await
    }

    // 按条件列出课程
    pub async fn list_lessons(
        &self,
        request: &HttpRequest,
        query: LessonQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_lessons(self, request, query).await
    }

    // 更新课程
    pub async fn update_lesson(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
        update_data: UpdateLessonRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_lesson(self, request, lesson_id, update_data).await
    }

    // 删除课程
    pub async fn delete_lesson(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_lesson(self, request, lesson_id).await
    }
}

pub mod enroll;
pub mod list;
pub mod unenroll;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 学生选入班级
    pub async fn enroll_student(
        &self,
        request: &HttpRequest,
        class_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_student(self, request, class_id, student_id).await
    }

    // 学生退出班级
    pub async fn unenroll_student(
        &self,
        request: &HttpRequest,
        class_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        unenroll::unenroll_student(self, request, class_id, student_id).await
    }

    // 列出班级的选课记录
    pub async fn list_class_enrollments(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_class_enrollments(self, request, class_id).await
    }
}

use crate::models::{ApiResponse, ErrorCode};
use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use std::future::{Ready, ready};

/// 定义路径参数安全提取器：参数非法时直接返回 400，不进入处理函数
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let result = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0)
                    .map($name)
                    .ok_or_else(|| {
                        let body = serde_json::to_string(&ApiResponse::<()>::error_empty(
                            ErrorCode::InvalidParams,
                            format!("Invalid path parameter: {}", $param),
                        ))
                        .unwrap_or_default();
                        ErrorBadRequest(body)
                    });
                ready(result)
            }
        }
    };
}

define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeLessonIdI64, "lesson_id");
define_safe_i64_extractor!(SafeEventIdI64, "event_id");
define_safe_i64_extractor!(SafeNoteIdI64, "note_id");

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;
use tracing::{error, info};

use super::AttendanceService;
use crate::models::attendance::requests::MarkAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};

#[derive(Debug, Serialize)]
pub struct MarkAttendanceResponse {
    pub marked: u64,
}

pub async fn mark_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    batch: MarkAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 边界校验：不合法的批次不进入事务
    if let Err(e) = batch.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParams, e)));
    }

    // 班级必须存在
    match storage.get_class_by_id(batch.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to check class {}: {}", batch.class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check class",
                )),
            );
        }
    }

    let class_id = batch.class_id;
    let date = batch.date;

    match storage.mark_attendance_batch(batch).await {
        Ok(marked) => {
            info!(
                "Attendance marked for class {} on {}: {} records",
                class_id, date, marked
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MarkAttendanceResponse { marked },
                "Attendance marked",
            )))
        }
        // 批次内引用了不存在的学生，整批已回滚
        Err(e) if e.is_foreign_key_violation() => {
            error!(
                "Attendance batch for class {} on {} referenced an unknown student: {}",
                class_id, date, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceMarkFailed,
                    "Batch references an unknown student; no records were written",
                )),
            )
        }
        Err(e) => {
            error!(
                "Attendance batch failed for class {} on {}: {}",
                class_id, date, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceMarkFailed,
                    format!("Attendance batch failed: {e}"),
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;
    use crate::models::attendance::requests::{AttendanceEntry, AttendanceQuery};
    use crate::models::classes::requests::CreateClassRequest;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use actix_web::http::StatusCode;
    use migration::{Migrator, MigratorTrait};
    use std::sync::Arc;

    async fn test_storage() -> Arc<dyn Storage> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        // 内存库必须固定单连接，否则各连接看到的是不同的数据库
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opt)
            .await
            .unwrap();
        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        Migrator::up(&db, None).await.unwrap();
        Arc::new(SeaOrmStorage { db })
    }

    fn user_request(username: &str, role: UserRole) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@school.test"),
            password: "$argon2id$fake-hash".to_string(),
            role,
            first_name: Some("Test".to_string()),
            last_name: Some(username.to_string()),
            phone: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn test_batch_with_unknown_student_returns_internal_error() {
        let storage = test_storage().await;

        let teacher = storage
            .create_user(user_request("att_teach", UserRole::Teacher))
            .await
            .unwrap();
        let class = storage
            .create_class(CreateClassRequest {
                name: "Class A1".to_string(),
                code: "A1".to_string(),
                grade: "5".to_string(),
                teacher_id: teacher.id,
                academic_year: Some("2026".to_string()),
                semester: None,
                description: None,
            })
            .await
            .unwrap();
        let student = storage
            .create_student(
                user_request("att_kid", UserRole::Student),
                "SN-att_kid".to_string(),
                "5".to_string(),
            )
            .await
            .unwrap();

        let service = AttendanceService {
            storage: Some(storage.clone()),
        };
        let request = actix_web::test::TestRequest::default().to_http_request();

        let batch = MarkAttendanceRequest {
            class_id: class.id,
            date: chrono::NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            records: vec![
                AttendanceEntry {
                    student_id: student.id,
                    status: AttendanceStatus::Present,
                    notes: None,
                },
                AttendanceEntry {
                    student_id: 999_999,
                    status: AttendanceStatus::Absent,
                    notes: None,
                },
            ],
        };

        let resp = service.mark_attendance(&request, batch).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // 整批已回滚，合法的那条也不应落库
        let records = storage
            .query_attendance(AttendanceQuery {
                class_id: Some(class.id),
                student_id: None,
                start_date: None,
                end_date: None,
            })
            .await
            .unwrap();
        assert!(records.is_empty());
    }
}

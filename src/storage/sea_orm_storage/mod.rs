//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod classes;
mod enrollments;
mod events;
mod lessons;
mod notes;
mod performance;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SamsError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config.database.pool_size, config.database.timeout)
                .await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SamsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(
        url: &str,
        pool_size: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SamsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SamsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SamsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SamsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceQuery, MarkAttendanceRequest},
    },
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    enrollments::entities::Enrollment,
    events::{entities::Event, requests::{CreateEventRequest, EventQuery}},
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, LessonQuery, UpdateLessonRequest},
    },
    notes::{
        entities::Note,
        requests::{CreateNoteRequest, UpdateNoteRequest},
    },
    performance::{
        entities::PerformanceResult,
        requests::{AddPerformanceRequest, PerformanceQuery},
    },
    students::{entities::Student, requests::UpdateStudentRequest},
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 学生档案模块
    async fn create_student(
        &self,
        user: CreateUserRequest,
        student_number: String,
        grade: String,
    ) -> Result<Student> {
        self.create_student_impl(user, student_number, grade).await
    }

    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(student_id, update).await
    }

    async fn delete_student(&self, student_id: i64) -> Result<bool> {
        self.delete_student_impl(student_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_by_code(&self, code: &str) -> Result<Option<Class>> {
        self.get_class_by_code_impl(code).await
    }

    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 选课模块
    async fn enroll_student(&self, student_id: i64, class_id: i64) -> Result<Enrollment> {
        self.enroll_student_impl(student_id, class_id).await
    }

    async fn unenroll_student(&self, student_id: i64, class_id: i64) -> Result<bool> {
        self.unenroll_student_impl(student_id, class_id).await
    }

    async fn get_enrollment(&self, student_id: i64, class_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_id, class_id).await
    }

    async fn list_class_enrollments(&self, class_id: i64) -> Result<Vec<Enrollment>> {
        self.list_class_enrollments_impl(class_id).await
    }

    async fn list_student_enrollments(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        self.list_student_enrollments_impl(student_id).await
    }

    // 考勤模块
    async fn mark_attendance_batch(&self, batch: MarkAttendanceRequest) -> Result<u64> {
        self.mark_attendance_batch_impl(batch).await
    }

    async fn query_attendance(&self, query: AttendanceQuery) -> Result<Vec<AttendanceRecord>> {
        self.query_attendance_impl(query).await
    }

    // 学业表现模块
    async fn add_performance(&self, req: AddPerformanceRequest) -> Result<PerformanceResult> {
        self.add_performance_impl(req).await
    }

    async fn list_performance(&self, query: PerformanceQuery) -> Result<Vec<PerformanceResult>> {
        self.list_performance_impl(query).await
    }

    // 课程模块
    async fn create_lesson(&self, req: CreateLessonRequest) -> Result<Lesson> {
        self.create_lesson_impl(req).await
    }

    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_by_id_impl(lesson_id).await
    }

    async fn list_lessons(&self, query: LessonQuery) -> Result<Vec<Lesson>> {
        self.list_lessons_impl(query).await
    }

    async fn update_lesson(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        self.update_lesson_impl(lesson_id, update).await
    }

    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool> {
        self.delete_lesson_impl(lesson_id).await
    }

    // 校历事件模块
    async fn create_event(&self, req: CreateEventRequest, created_by: i64) -> Result<Event> {
        self.create_event_impl(req, created_by).await
    }

    async fn list_events(&self, query: EventQuery) -> Result<Vec<Event>> {
        self.list_events_impl(query).await
    }

    async fn delete_event(&self, event_id: i64) -> Result<bool> {
        self.delete_event_impl(event_id).await
    }

    // 便签模块
    async fn create_note(&self, user_id: i64, req: CreateNoteRequest) -> Result<Note> {
        self.create_note_impl(user_id, req).await
    }

    async fn list_notes(&self, user_id: i64) -> Result<Vec<Note>> {
        self.list_notes_impl(user_id).await
    }

    async fn update_note(
        &self,
        user_id: i64,
        note_id: i64,
        update: UpdateNoteRequest,
    ) -> Result<Option<Note>> {
        self.update_note_impl(user_id, note_id, update).await
    }

    async fn delete_note(&self, user_id: i64, note_id: i64) -> Result<bool> {
        self.delete_note_impl(user_id, note_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;
    use crate::models::attendance::requests::AttendanceEntry;
    use crate::models::users::entities::UserRole;

    async fn test_storage() -> SeaOrmStorage {
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
        SeaOrmStorage { db }
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

    async fn seed_class(storage: &SeaOrmStorage, code: &str) -> Class {
        let teacher = storage
            .create_user_impl(user_request(&format!("teach_{code}"), UserRole::Teacher))
            .await
            .unwrap();
        storage
            .create_class_impl(CreateClassRequest {
                name: format!("Class {code}"),
                code: code.to_string(),
                grade: "5".to_string(),
                teacher_id: teacher.id,
                academic_year: Some("2026".to_string()),
                semester: None,
                description: None,
            })
            .await
            .unwrap()
    }

    async fn seed_student(storage: &SeaOrmStorage, username: &str) -> Student {
        storage
            .create_student_impl(
                user_request(username, UserRole::Student),
                format!("SN-{username}"),
                "5".to_string(),
            )
            .await
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_enroll_and_list() {
        let storage = test_storage().await;
        let class = seed_class(&storage, "C1").await;
        let student = seed_student(&storage, "alice").await;

        let enrollment = storage
            .enroll_student_impl(student.id, class.id)
            .await
            .unwrap();
        assert_eq!(enrollment.student_id, student.id);
        assert_eq!(enrollment.class_id, class.id);

        let roster = storage.list_class_enrollments_impl(class.id).await.unwrap();
        assert_eq!(roster.len(), 1);

        let mine = storage
            .list_student_enrollments_impl(student.id)
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
    }

    #[tokio::test]
    async fn test_double_enroll_hits_unique_index() {
        let storage = test_storage().await;
        let class = seed_class(&storage, "C2").await;
        let student = seed_student(&storage, "bob").await;

        storage
            .enroll_student_impl(student.id, class.id)
            .await
            .unwrap();
        let err = storage
            .enroll_student_impl(student.id, class.id)
            .await
            .unwrap_err();
        assert!(err.is_unique_violation(), "unexpected error: {err}");

        // 失败的第二次选课不会产生第二条记录
        let roster = storage.list_class_enrollments_impl(class.id).await.unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[tokio::test]
    async fn test_unenroll_removes_record() {
        let storage = test_storage().await;
        let class = seed_class(&storage, "C3").await;
        let student = seed_student(&storage, "carol").await;

        storage
            .enroll_student_impl(student.id, class.id)
            .await
            .unwrap();
        assert!(
            storage
                .unenroll_student_impl(student.id, class.id)
                .await
                .unwrap()
        );
        assert!(
            storage
                .get_enrollment_impl(student.id, class.id)
                .await
                .unwrap()
                .is_none()
        );
        // 第二次退课已无记录可删
        assert!(
            !storage
                .unenroll_student_impl(student.id, class.id)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_mark_attendance_batch_is_idempotent() {
        let storage = test_storage().await;
        let class = seed_class(&storage, "C4").await;
        let s1 = seed_student(&storage, "dave").await;
        let s2 = seed_student(&storage, "erin").await;
        let day = date(2026, 3, 2);

        let batch = |status: AttendanceStatus| MarkAttendanceRequest {
            class_id: class.id,
            date: day,
            records: vec![
                AttendanceEntry {
                    student_id: s1.id,
                    status,
                    notes: None,
                },
                AttendanceEntry {
                    student_id: s2.id,
                    status: AttendanceStatus::Present,
                    notes: Some("on time".to_string()),
                },
            ],
        };

        let first = storage
            .mark_attendance_batch_impl(batch(AttendanceStatus::Absent))
            .await
            .unwrap();
        assert_eq!(first, 2);

        // 同一批次重复提交按更新处理，不产生重复行
        let second = storage
            .mark_attendance_batch_impl(batch(AttendanceStatus::Late))
            .await
            .unwrap();
        assert_eq!(second, 2);

        let records = storage
            .query_attendance_impl(AttendanceQuery {
                class_id: Some(class.id),
                student_id: None,
                start_date: None,
                end_date: None,
            })
            .await
            .unwrap();
        assert_eq!(records.len(), 2);

        let s1_record = records.iter().find(|r| r.student_id == s1.id).unwrap();
        assert_eq!(s1_record.status, AttendanceStatus::Late);
    }

    #[tokio::test]
    async fn test_attendance_batch_rolls_back_on_unknown_student() {
        let storage = test_storage().await;
        let class = seed_class(&storage, "C5").await;
        let student = seed_student(&storage, "frank").await;
        let day = date(2026, 3, 3);

        let err = storage
            .mark_attendance_batch_impl(MarkAttendanceRequest {
                class_id: class.id,
                date: day,
                records: vec![
                    AttendanceEntry {
                        student_id: student.id,
                        status: AttendanceStatus::Present,
                        notes: None,
                    },
                    AttendanceEntry {
                        student_id: 999_999,
                        status: AttendanceStatus::Present,
                        notes: None,
                    },
                ],
            })
            .await
            .unwrap_err();
        assert!(err.is_foreign_key_violation(), "unexpected error: {err}");

        // 整批回滚，合法的那条也不应落库
        let records = storage
            .query_attendance_impl(AttendanceQuery {
                class_id: Some(class.id),
                student_id: None,
                start_date: None,
                end_date: None,
            })
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_attendance_date_range_is_inclusive() {
        let storage = test_storage().await;
        let class = seed_class(&storage, "C6").await;
        let student = seed_student(&storage, "grace").await;

        for day in [date(2026, 3, 1), date(2026, 3, 2), date(2026, 3, 3)] {
            storage
                .mark_attendance_batch_impl(MarkAttendanceRequest {
                    class_id: class.id,
                    date: day,
                    records: vec![AttendanceEntry {
                        student_id: student.id,
                        status: AttendanceStatus::Present,
                        notes: None,
                    }],
                })
                .await
                .unwrap();
        }

        // start 与 end 相同即查询单日
        let single = storage
            .query_attendance_impl(AttendanceQuery {
                class_id: Some(class.id),
                student_id: None,
                start_date: Some(date(2026, 3, 2)),
                end_date: Some(date(2026, 3, 2)),
            })
            .await
            .unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].date, date(2026, 3, 2));

        let range = storage
            .query_attendance_impl(AttendanceQuery {
                class_id: Some(class.id),
                student_id: None,
                start_date: Some(date(2026, 3, 1)),
                end_date: Some(date(2026, 3, 3)),
            })
            .await
            .unwrap();
        assert_eq!(range.len(), 3);
        // 查询结果按日期倒序返回，最新的一天排在最前
        let dates: Vec<_> = range.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date(2026, 3, 3), date(2026, 3, 2), date(2026, 3, 1)]
        );
    }

    #[tokio::test]
    async fn test_delete_student_cascades_profile() {
        let storage = test_storage().await;
        let student = seed_student(&storage, "henry").await;

        assert!(storage.delete_student_impl(student.id).await.unwrap());
        assert!(
            storage
                .get_student_by_id_impl(student.id)
                .await
                .unwrap()
                .is_none()
        );
        // 关联用户账号一并删除
        assert!(
            storage
                .get_user_by_username_or_email_impl("henry")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_user_lookup_matches_username_or_email() {
        let storage = test_storage().await;
        let created = storage
            .create_user_impl(user_request("ivy", UserRole::Teacher))
            .await
            .unwrap();

        let by_username = storage
            .get_user_by_username_or_email_impl("ivy")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_username.id, created.id);

        let by_email = storage
            .get_user_by_username_or_email_impl("ivy@school.test")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, created.id);

        assert!(
            storage
                .get_user_by_username_or_email_impl("nobody")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_notes_are_scoped_to_owner() {
        let storage = test_storage().await;
        let owner = storage
            .create_user_impl(user_request("owner", UserRole::Teacher))
            .await
            .unwrap();
        let other = storage
            .create_user_impl(user_request("other", UserRole::Teacher))
            .await
            .unwrap();

        let note = storage
            .create_note_impl(
                owner.id,
                CreateNoteRequest {
                    title: "Reminder".to_string(),
                    content: "Grade quizzes".to_string(),
                    color: None,
                    priority: None,
                    is_pinned: None,
                },
            )
            .await
            .unwrap();

        // 非创建者既看不到也改不了
        assert!(storage.list_notes_impl(other.id).await.unwrap().is_empty());
        assert!(!storage.delete_note_impl(other.id, note.id).await.unwrap());
        assert!(storage.delete_note_impl(owner.id, note.id).await.unwrap());
    }
}

use std::sync::Arc;

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
    students::{
        entities::Student,
        requests::UpdateStudentRequest,
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息（登录标识两者皆可）
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 学生档案管理方法
    // 创建学生（用户账号与学生档案在同一事务内创建）
    async fn create_student(
        &self,
        user: CreateUserRequest,
        student_number: String,
        grade: String,
    ) -> Result<Student>;
    // 通过ID获取学生档案
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    // 列出学生档案
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 更新学生档案（含关联用户字段）
    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生（连同用户账号，级联清理档案）
    async fn delete_student(&self, student_id: i64) -> Result<bool>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过班级代码获取班级信息
    async fn get_class_by_code(&self, code: &str) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 选课管理方法
    // 学生选入班级
    async fn enroll_student(&self, student_id: i64, class_id: i64) -> Result<Enrollment>;
    // 学生退出班级
    async fn unenroll_student(&self, student_id: i64, class_id: i64) -> Result<bool>;
    // 获取某学生在某班级的选课记录
    async fn get_enrollment(&self, student_id: i64, class_id: i64) -> Result<Option<Enrollment>>;
    // 列出班级的选课记录
    async fn list_class_enrollments(&self, class_id: i64) -> Result<Vec<Enrollment>>;
    // 列出学生的选课记录
    async fn list_student_enrollments(&self, student_id: i64) -> Result<Vec<Enrollment>>;

    /// 考勤管理方法
    // 批量提交考勤，整批在单个事务内完成，返回写入条数
    async fn mark_attendance_batch(&self, batch: MarkAttendanceRequest) -> Result<u64>;
    // 按条件查询考勤记录
    async fn query_attendance(&self, query: AttendanceQuery) -> Result<Vec<AttendanceRecord>>;

    /// 学业表现管理方法
    // 录入学业表现
    async fn add_performance(&self, req: AddPerformanceRequest) -> Result<PerformanceResult>;
    // 按条件查询学业表现
    async fn list_performance(&self, query: PerformanceQuery) -> Result<Vec<PerformanceResult>>;

    /// 课程管理方法
    // 创建课程
    async fn create_lesson(&self, req: CreateLessonRequest) -> Result<Lesson>;
    // 通过ID获取课程
    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>>;
    // 按条件列出课程
    async fn list_lessons(&self, query: LessonQuery) -> Result<Vec<Lesson>>;
    // 更新课程
    async fn update_lesson(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>>;
    // 删除课程
    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool>;

    /// 校历事件管理方法
    // 创建事件
    async fn create_event(&self, req: CreateEventRequest, created_by: i64) -> Result<Event>;
    // 按条件列出事件
    async fn list_events(&self, query: EventQuery) -> Result<Vec<Event>>;
    // 删除事件
    async fn delete_event(&self, event_id: i64) -> Result<bool>;

    /// 便签管理方法
    // 创建便签
    async fn create_note(&self, user_id: i64, req: CreateNoteRequest) -> Result<Note>;
    // 列出用户自己的便签
    async fn list_notes(&self, user_id: i64) -> Result<Vec<Note>>;
    // 更新便签（仅限创建者）
    async fn update_note(
        &self,
        user_id: i64,
        note_id: i64,
        update: UpdateNoteRequest,
    ) -> Result<Option<Note>>;
    // 删除便签（仅限创建者）
    async fn delete_note(&self, user_id: i64, note_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

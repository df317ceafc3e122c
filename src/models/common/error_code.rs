//! 业务错误码
//!
//! 与 HTTP 状态码正交：HTTP 状态码表达传输层语义，
//! 业务错误码供前端做细粒度分支。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    InvalidParams = 1001,
    Unauthorized = 1002,
    PermissionDenied = 1003,
    InternalServerError = 1004,

    // 用户 / 认证 2xxx
    AuthFailed = 2001,
    UserNotFound = 2002,
    UserAlreadyExists = 2003,

    // 学生 21xx
    StudentNotFound = 2101,
    StudentCreationFailed = 2102,

    // 班级 22xx
    ClassNotFound = 2201,
    ClassCodeExists = 2202,
    InvalidTeacher = 2203,
    ClassOperationFailed = 2204,

    // 选课 23xx
    EnrollmentNotFound = 2301,
    AlreadyEnrolled = 2302,
    EnrollmentFailed = 2303,

    // 考勤 24xx
    AttendanceMarkFailed = 2401,
    AttendanceQueryFailed = 2402,

    // 课程 25xx
    LessonNotFound = 2501,
    LessonOperationFailed = 2502,

    // 校历事件 26xx
    EventNotFound = 2601,
    EventOperationFailed = 2602,

    // 便签 27xx
    NoteNotFound = 2701,
    NoteOperationFailed = 2702,

    // 成绩 28xx
    PerformanceOperationFailed = 2801,
}

/*!
 * 声明式权限策略表
 *
 * 所有受保护操作与允许角色的对应关系集中在此处维护，
 * RequireRole 中间件按操作名查表判定，不在各路由分散写死角色列表。
 */

use crate::models::users::entities::UserRole;

/// 受保护的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // 学生档案
    CreateStudent,
    ListStudents,
    GetStudent,
    UpdateStudent,
    DeleteStudent,
    // 班级
    CreateClass,
    ListClasses,
    GetClass,
    UpdateClass,
    DeleteClass,
    // 选课
    EnrollStudent,
    UnenrollStudent,
    ListEnrollments,
    // 考勤
    MarkAttendance,
    QueryAttendance,
    // 成绩
    AddPerformance,
    ListPerformance,
    // 课次
    CreateLesson,
    ListLessons,
    UpdateLesson,
    DeleteLesson,
    // 事件
    CreateEvent,
    ListEvents,
    DeleteEvent,
    // 备忘
    CreateNote,
    ListNotes,
    UpdateNote,
    DeleteNote,
}

/// 策略判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    Allowed,
    Forbidden,
}

/// 查询某操作允许的角色集合
pub fn allowed_roles(operation: Operation) -> &'static [UserRole] {
    use Operation::*;
    match operation {
        // 仅管理员
        CreateStudent | DeleteStudent | CreateClass | UpdateClass | DeleteClass => {
            UserRole::admin_roles()
        }
        // 管理员或教师
        UpdateStudent | EnrollStudent | UnenrollStudent | MarkAttendance | AddPerformance
        | CreateLesson | UpdateLesson | DeleteLesson | CreateEvent | DeleteEvent => {
            UserRole::teacher_roles()
        }
        // 任意已认证角色
        ListStudents | GetStudent | ListClasses | GetClass | ListEnrollments | QueryAttendance
        | ListPerformance | ListLessons | ListEvents | CreateNote | ListNotes | UpdateNote
        | DeleteNote => UserRole::all_roles(),
    }
}

/// 纯函数式策略判定，便于在中间件外单测
pub fn check(operation: Operation, role: UserRole) -> PolicyDecision {
    if allowed_roles(operation).contains(&role) {
        PolicyDecision::Allowed
    } else {
        PolicyDecision::Forbidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_cannot_mark_attendance() {
        assert_eq!(
            check(Operation::MarkAttendance, UserRole::Student),
            PolicyDecision::Forbidden
        );
    }

    #[test]
    fn test_teacher_can_mark_attendance_and_enroll() {
        assert_eq!(
            check(Operation::MarkAttendance, UserRole::Teacher),
            PolicyDecision::Allowed
        );
        assert_eq!(
            check(Operation::EnrollStudent, UserRole::Teacher),
            PolicyDecision::Allowed
        );
    }

    #[test]
    fn test_only_admin_manages_classes() {
        assert_eq!(
            check(Operation::CreateClass, UserRole::Admin),
            PolicyDecision::Allowed
        );
        assert_eq!(
            check(Operation::CreateClass, UserRole::Teacher),
            PolicyDecision::Forbidden
        );
        assert_eq!(
            check(Operation::DeleteClass, UserRole::Student),
            PolicyDecision::Forbidden
        );
    }

    #[test]
    fn test_any_role_can_query_attendance() {
        for role in [UserRole::Admin, UserRole::Teacher, UserRole::Student] {
            assert_eq!(
                check(Operation::QueryAttendance, role),
                PolicyDecision::Allowed
            );
        }
    }
}

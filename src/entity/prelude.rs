//! 预导入模块，方便使用

pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::events::{ActiveModel as EventActiveModel, Entity as Events, Model as EventModel};
pub use super::lessons::{
    ActiveModel as LessonActiveModel, Entity as Lessons, Model as LessonModel,
};
pub use super::notes::{ActiveModel as NoteActiveModel, Entity as Notes, Model as NoteModel};
pub use super::performance::{
    ActiveModel as PerformanceActiveModel, Entity as Performance, Model as PerformanceModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};

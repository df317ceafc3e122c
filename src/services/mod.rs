pub mod attendance;
pub mod auth;
pub mod classes;
pub mod enrollments;
pub mod events;
pub mod lessons;
pub mod notes;
pub mod performance;
pub mod students;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use enrollments::EnrollmentService;
pub use events::EventService;
pub use lessons::LessonService;
pub use notes::NoteService;
pub use performance::PerformanceService;
pub use students::StudentService;

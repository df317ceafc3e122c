pub mod attendance;

pub mod auth;

pub mod classes;

pub mod events;

pub mod lessons;

pub mod notes;

pub mod performance;

pub mod students;

pub mod system;

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use events::configure_events_routes;
pub use lessons::configure_lessons_routes;
pub use notes::configure_notes_routes;
pub use performance::configure_performance_routes;
pub use students::configure_students_routes;
pub use system::configure_system_routes;

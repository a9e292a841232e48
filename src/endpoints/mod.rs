//! Endpoint implementations, grouped by API domain.
//!
//! Each module adds methods to [`crate::Client`]; `school` additionally
//! exposes the unauthenticated public search as a free function.

pub mod behaviour;
pub mod calendar;
pub mod quizzes;
pub mod school;
pub mod tasks;
pub mod timetable;
pub mod todos;
pub mod users;

pub use school::get_public_schools;
pub use todos::TodoQuery;
pub use users::StudentInclude;

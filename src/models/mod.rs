//! Data models for Satchel One API responses

pub mod behaviour;
pub mod calendar;
pub mod comment;
pub mod quiz;
pub mod school;
pub mod task;
pub mod timetable;
pub mod user;

pub use behaviour::{Behaviour, Praise, PraiseSummary};
pub use calendar::{PersonalCalendarTask, SchoolCalendarTask};
pub use comment::{Comment, CommentUser, CommentableTask, Comments};
pub use quiz::{Question, Quiz, QuizSubmission};
pub use school::{PublicSchool, PublicSchoolSearch, School, Subject};
pub use task::{
    ClassTest, Classwork, DetailedClassTask, DetailedTask, FlexibleTask, Task, TaskType, Todos,
};
pub use timetable::{
    Timetable, TimetableClassGroup, TimetableDay, TimetableHomework, TimetableInterface,
    TimetableLesson, TimetablePeriod, TimetableTeacher,
};
pub use user::{ClassGroup, Employee, Parent, Student, User};

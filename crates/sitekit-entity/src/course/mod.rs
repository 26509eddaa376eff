//! Course catalog entities.

pub mod model;
pub mod schedule;

pub use model::{Course, CreateCourse, UpdateCourse};
pub use schedule::{CourseSchedule, CreateCourseSchedule, UpdateCourseSchedule};

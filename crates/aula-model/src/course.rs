pub mod content_step;
pub mod course;
pub mod lesson;
pub mod module;

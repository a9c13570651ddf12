pub mod content_step;
#[allow(clippy::module_inception)]
pub mod course;
pub mod lesson;
pub mod module;

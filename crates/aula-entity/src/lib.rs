pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod quiz;
pub mod user;

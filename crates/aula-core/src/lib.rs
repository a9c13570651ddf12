pub mod authoring;
pub mod certificate;
pub mod enrollment;
pub mod error;
pub mod permissions;
pub mod quiz;
pub mod stepper;

pub use error::CoreError;

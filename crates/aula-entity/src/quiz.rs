pub mod answer;
pub mod attempt;
pub mod choice;
pub mod question;
#[allow(clippy::module_inception)]
pub mod quiz;

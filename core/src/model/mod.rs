pub mod catalog;
pub mod day_plan;
pub mod food;
pub mod profile;
pub mod saved_plan;
pub mod targets;

pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::PlannerConfig;
pub use error::{PlannerError, PlannerResult};
pub use model::catalog::{Catalog, FoodFilter};
pub use model::day_plan::{DayEntry, DayPlan, DayTotals, WorkoutEntry};
pub use model::food::{Category, FoodRecord};
pub use model::profile::{ActivityLevel, Goal, Profile, Sex};
pub use model::targets::{MacroSplit, Targets};
pub use repository::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use service::nutrition::{
    apply_goal, compute_bmr, compute_targets, compute_tdee, scale_food, split_kcal, split_macros,
};
pub use service::plan_service::PlanService;
pub use usecase::planner_session::PlannerSession;
pub use usecase::sample_day::generate_sample_day;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::day_plan::{DayEntry, DayPlan, WorkoutEntry};
use crate::model::targets::Targets;

/// Stored form of a plan. Every field is optional on read so that a
/// partially written or older blob still loads what it can.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    #[serde(default)]
    pub targets: Option<Targets>,
    #[serde(default)]
    pub day: Vec<DayEntry>,
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedPlan {
    pub fn new(targets: Option<Targets>, plan: &DayPlan) -> Self {
        Self {
            targets,
            day: plan.entries().to_vec(),
            workouts: plan.workouts().to_vec(),
            saved_at: Some(Utc::now()),
        }
    }

    pub fn into_plan(self) -> (Option<Targets>, DayPlan) {
        (self.targets, DayPlan::from_parts(self.day, self.workouts))
    }
}

use thiserror::Error;

/// Errors surfaced by the planner.
///
/// List edits (unknown food name, stale index) are not errors: they are
/// logged and ignored.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlannerError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Unknown activity level: '{0}'")]
    UnknownActivityLevel(String),

    #[error("Unknown goal: '{0}'")]
    UnknownGoal(String),

    #[error("Unknown sex: '{0}'")]
    UnknownSex(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("No saved plan found")]
    NotFound,

    #[error("Saved plan is corrupt: {0}")]
    CorruptData(String),
}

pub type PlannerResult<T> = Result<T, PlannerError>;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(PlannerError::UnknownSex(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Very,
    Athlete,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Very => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "very" => Ok(ActivityLevel::Very),
            "athlete" => Ok(ActivityLevel::Athlete),
            _ => Err(PlannerError::UnknownActivityLevel(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    Recomp,
    Bulk,
}

impl Goal {
    /// Fractional change applied to TDEE.
    pub fn adjustment(&self) -> f64 {
        match self {
            Goal::Cut => -0.15,
            Goal::Recomp => 0.0,
            Goal::Bulk => 0.10,
        }
    }
}

impl FromStr for Goal {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Ok(Goal::Cut),
            "recomp" => Ok(Goal::Recomp),
            "bulk" => Ok(Goal::Bulk),
            _ => Err(PlannerError::UnknownGoal(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

impl Profile {
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.age == 0 {
            return Err(PlannerError::InvalidProfile(
                "age must be a positive number of years".to_string(),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(PlannerError::InvalidProfile(format!(
                "height must be positive, got {}",
                self.height_cm
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(PlannerError::InvalidProfile(format!(
                "weight must be positive, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

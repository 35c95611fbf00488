use crate::error::{PlannerError, PlannerResult};
use crate::model::food::FoodRecord;
use crate::model::profile::{ActivityLevel, Goal, Profile, Sex};
use crate::model::targets::{MacroSplit, Targets};
use serde::{Deserialize, Serialize};

pub const MIN_GRAMS: f64 = 0.0;
pub const MAX_GRAMS: f64 = 2000.0;

// Energy split in percent
const PROTEIN_PERCENT: u32 = 30;
const CARBS_PERCENT: u32 = 40;

const KCAL_PER_G_PROTEIN: u32 = 4;
const KCAL_PER_G_CARBS: u32 = 4;
const KCAL_PER_G_FAT: u32 = 9;

/// Nutrients of a quantity of food, rounded to 0.1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct NutrientSnapshot {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Mifflin-St Jeor resting energy expenditure in kcal/day.
pub fn compute_bmr(profile: &Profile) -> PlannerResult<f64> {
    profile.validate()?;

    let sex_offset = match profile.sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    let bmr = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age)
        + sex_offset;

    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(PlannerError::InvalidProfile(format!(
            "profile yields a non-positive BMR ({:.1} kcal)",
            bmr
        )));
    }
    Ok(bmr)
}

pub fn compute_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Applies the goal adjustment and rounds to whole kcal.
pub fn apply_goal(tdee: f64, goal: Goal) -> u32 {
    let adjusted = (tdee * (1.0 + goal.adjustment())).round();
    if adjusted.is_finite() && adjusted > 0.0 {
        adjusted as u32
    } else {
        0
    }
}

/// 30/40/30 split by energy. Protein and carbs are rounded first and fat
/// takes whatever is left, so the parts add up to `target_kcal` exactly.
pub fn split_kcal(target_kcal: u32) -> MacroSplit {
    let protein_kcal = percent_of(target_kcal, PROTEIN_PERCENT);
    let carbs_kcal = percent_of(target_kcal, CARBS_PERCENT);
    let fat_kcal = target_kcal - protein_kcal - carbs_kcal;

    MacroSplit {
        protein_kcal,
        carbs_kcal,
        fat_kcal,
    }
}

pub fn split_macros(target_kcal: u32) -> Targets {
    let split = split_kcal(target_kcal);
    Targets {
        kcal: target_kcal,
        protein_g: round_div(split.protein_kcal, KCAL_PER_G_PROTEIN),
        carbs_g: round_div(split.carbs_kcal, KCAL_PER_G_CARBS),
        fat_g: round_div(split.fat_kcal, KCAL_PER_G_FAT),
    }
}

pub fn compute_targets(profile: &Profile) -> PlannerResult<Targets> {
    let bmr = compute_bmr(profile)?;
    let tdee = compute_tdee(bmr, profile.activity);
    let target_kcal = apply_goal(tdee, profile.goal);

    tracing::debug!(bmr, tdee, target_kcal, "computed energy targets");
    Ok(split_macros(target_kcal))
}

/// Clamps a quantity to the supported range. NaN counts as 0 g.
pub fn clamp_grams(grams: f64) -> f64 {
    if grams.is_nan() {
        return MIN_GRAMS;
    }
    grams.clamp(MIN_GRAMS, MAX_GRAMS)
}

pub fn scale_food(record: &FoodRecord, grams: f64) -> NutrientSnapshot {
    let factor = clamp_grams(grams) / 100.0;
    NutrientSnapshot {
        calories: round1(record.calories * factor),
        protein: round1(record.protein * factor),
        carbs: round1(record.carbs * factor),
        fat: round1(record.fat * factor),
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percent_of(value: u32, percent: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(percent);
    ((scaled + 50) / 100) as u32
}

// Integer division rounding halves up.
fn round_div(numerator: u32, denominator: u32) -> u32 {
    let (n, d) = (u64::from(numerator), u64::from(denominator));
    ((n + d / 2) / d) as u32
}

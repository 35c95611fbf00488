use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::catalog::Catalog;
use crate::model::day_plan::DayPlan;
use crate::model::food::{Category, FoodRecord};

/// Portion in grams used for each meal of a generated day.
pub const MEAL_PORTIONS: [(Category, f64); 4] = [
    (Category::Breakfast, 200.0),
    (Category::Lunch, 250.0),
    (Category::Dinner, 250.0),
    (Category::Snack, 100.0),
];

/// Picks one food per meal, falling back to the whole catalog when a meal
/// has no foods of its own. An empty catalog gives an empty plan.
pub fn generate_sample_day<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> DayPlan {
    let mut plan = DayPlan::new();
    fill_sample_day(&mut plan, catalog, rng);
    plan
}

/// Replaces the food entries of `plan` with a generated day. Workouts stay.
pub fn fill_sample_day<R: Rng + ?Sized>(plan: &mut DayPlan, catalog: &Catalog, rng: &mut R) {
    plan.clear_entries();

    for (category, grams) in MEAL_PORTIONS {
        let group = catalog.by_category(category);
        let picked: Option<&FoodRecord> = if group.is_empty() {
            catalog.records().choose(rng)
        } else {
            group.choose(rng).copied()
        };

        if let Some(record) = picked {
            plan.add_food(catalog, &record.name, grams);
        }
    }

    tracing::debug!(entries = plan.entries().len(), "generated sample day");
}

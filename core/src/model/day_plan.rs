use serde::{Deserialize, Serialize};

use crate::model::catalog::Catalog;
use crate::service::nutrition::{clamp_grams, round1, scale_food, NutrientSnapshot};

/// One food logged for the day. The nutrient fields are a snapshot taken
/// from the catalog when the entry was added or its grams last changed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayEntry {
    #[serde(rename = "name", default)]
    pub food_name: String,
    #[serde(default)]
    pub grams: f64,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

impl DayEntry {
    fn new(food_name: &str, grams: f64, snapshot: NutrientSnapshot) -> Self {
        let mut entry = Self {
            food_name: food_name.to_string(),
            grams,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
        };
        entry.apply(snapshot);
        entry
    }

    fn apply(&mut self, snapshot: NutrientSnapshot) {
        self.calories = snapshot.calories;
        self.protein = snapshot.protein;
        self.carbs = snapshot.carbs;
        self.fat = snapshot.fat;
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub calories_burned: f64,
}

impl WorkoutEntry {
    pub fn new(label: &str, calories_burned: f64) -> Self {
        Self {
            label: label.to_string(),
            calories_burned: clamp_burned(calories_burned),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct DayTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub burned: f64,
    pub net: f64,
}

/// The foods and workouts of one day. Totals are a fold over both lists
/// and are refreshed by every mutating method.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DayPlan {
    entries: Vec<DayEntry>,
    workouts: Vec<WorkoutEntry>,
    totals: DayTotals,
}

impl DayPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a plan from stored lists. Entries, grams included, are kept
    /// exactly as stored.
    pub fn from_parts(entries: Vec<DayEntry>, workouts: Vec<WorkoutEntry>) -> Self {
        let workouts = workouts
            .into_iter()
            .map(|mut w| {
                w.calories_burned = clamp_burned(w.calories_burned);
                w
            })
            .collect();

        let mut plan = Self {
            entries,
            workouts,
            totals: DayTotals::default(),
        };
        plan.recompute_totals();
        plan
    }

    pub fn entries(&self) -> &[DayEntry] {
        &self.entries
    }

    pub fn workouts(&self) -> &[WorkoutEntry] {
        &self.workouts
    }

    pub fn totals(&self) -> DayTotals {
        self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.workouts.is_empty()
    }

    pub fn add_food(&mut self, catalog: &Catalog, name: &str, grams: f64) {
        let Some(record) = catalog.find(name) else {
            tracing::debug!(name, "food not in catalog, ignoring");
            return;
        };

        let grams = clamp_grams(grams);
        self.entries
            .push(DayEntry::new(&record.name, grams, scale_food(record, grams)));
        self.recompute_totals();
    }

    pub fn remove_food(&mut self, index: usize) -> Option<DayEntry> {
        if index >= self.entries.len() {
            tracing::debug!(index, len = self.entries.len(), "no food entry at index");
            return None;
        }
        let removed = self.entries.remove(index);
        self.recompute_totals();
        Some(removed)
    }

    /// Re-derives the entry from its catalog record at the new quantity.
    /// Returns false when nothing changed (bad index or food gone from the catalog).
    pub fn update_grams(&mut self, catalog: &Catalog, index: usize, grams: f64) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            tracing::debug!(index, "no food entry at index");
            return false;
        };
        let Some(record) = catalog.find(&entry.food_name) else {
            tracing::warn!(name = %entry.food_name, "food no longer in catalog, entry left as is");
            return false;
        };

        let grams = clamp_grams(grams);
        entry.grams = grams;
        entry.apply(scale_food(record, grams));
        self.recompute_totals();
        true
    }

    pub fn add_workout(&mut self, label: &str, calories_burned: f64) {
        self.workouts.push(WorkoutEntry::new(label, calories_burned));
        self.recompute_totals();
    }

    pub fn remove_workout(&mut self, index: usize) -> Option<WorkoutEntry> {
        if index >= self.workouts.len() {
            tracing::debug!(index, len = self.workouts.len(), "no workout at index");
            return None;
        }
        let removed = self.workouts.remove(index);
        self.recompute_totals();
        Some(removed)
    }

    pub fn clear_entries(&mut self) {
        self.entries.clear();
        self.recompute_totals();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.workouts.clear();
        self.recompute_totals();
    }

    pub fn recompute_totals(&mut self) {
        let mut totals = self
            .entries
            .iter()
            .fold(DayTotals::default(), |mut acc, e| {
                acc.calories += e.calories;
                acc.protein += e.protein;
                acc.carbs += e.carbs;
                acc.fat += e.fat;
                acc
            });
        let burned: f64 = self.workouts.iter().map(|w| w.calories_burned).sum();

        // Sums of 0.1-rounded values pick up float noise; keep one decimal.
        totals.calories = round1(totals.calories);
        totals.protein = round1(totals.protein);
        totals.carbs = round1(totals.carbs);
        totals.fat = round1(totals.fat);
        totals.burned = round1(burned);
        totals.net = round1(totals.calories - totals.burned);

        self.totals = totals;
    }
}

fn clamp_burned(calories: f64) -> f64 {
    if calories.is_finite() {
        calories.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::food::FoodRecord;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            FoodRecord::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
            FoodRecord::new("Brown Rice", 111.0, 2.6, 23.0, 0.9),
            FoodRecord::new("Broccoli", 34.0, 2.8, 6.6, 0.4),
            FoodRecord::new("Peanut Butter", 588.0, 25.0, 20.0, 50.0),
        ])
    }

    #[test]
    fn test_add_and_remove_chicken() {
        let catalog = catalog();
        let mut plan = DayPlan::new();

        plan.add_food(&catalog, "Chicken Breast", 150.0);
        assert_eq!(plan.entries().len(), 1);
        assert_eq!(plan.entries()[0].calories, 247.5);
        assert_eq!(plan.totals().calories, 247.5);

        let removed = plan.remove_food(0).unwrap();
        assert_eq!(removed.food_name, "Chicken Breast");
        assert_eq!(plan.totals().calories, 0.0);
        assert_eq!(plan.totals(), DayTotals::default());
    }

    #[test]
    fn test_unknown_food_and_bad_index_are_noops() {
        let catalog = catalog();
        let mut plan = DayPlan::new();
        plan.add_food(&catalog, "Unicorn Steak", 100.0);
        assert!(plan.entries().is_empty());

        plan.add_food(&catalog, "Broccoli", 100.0);
        assert!(plan.remove_food(3).is_none());
        assert!(!plan.update_grams(&catalog, 9, 50.0));
        assert!(plan.remove_workout(0).is_none());
        assert_eq!(plan.entries().len(), 1);
        assert_eq!(plan.totals().calories, 34.0);
    }

    #[test]
    fn test_add_food_clamps_grams() {
        let catalog = catalog();
        let mut plan = DayPlan::new();
        plan.add_food(&catalog, "Brown Rice", 2500.0);
        plan.add_food(&catalog, "Brown Rice", -10.0);
        assert_eq!(plan.entries()[0].grams, 2000.0);
        assert_eq!(plan.entries()[0].calories, 2220.0);
        assert_eq!(plan.entries()[1].grams, 0.0);
        assert_eq!(plan.entries()[1].calories, 0.0);
    }

    #[test]
    fn test_update_grams_recomputes_from_catalog() {
        let catalog = catalog();
        let mut plan = DayPlan::new();
        plan.add_food(&catalog, "Peanut Butter", 15.0);
        // 588 * 0.15 = 88.2
        assert_eq!(plan.entries()[0].calories, 88.2);

        assert!(plan.update_grams(&catalog, 0, 33.0));
        assert_eq!(plan.entries()[0].grams, 33.0);
        assert_eq!(plan.entries()[0].calories, 194.0);
        assert_eq!(plan.totals().calories, 194.0);

        assert!(plan.update_grams(&catalog, 0, 5000.0));
        assert_eq!(plan.entries()[0].grams, 2000.0);
    }

    #[test]
    fn test_update_grams_is_idempotent() {
        let catalog = catalog();
        let mut plan = DayPlan::new();
        plan.add_food(&catalog, "Broccoli", 80.0);

        plan.update_grams(&catalog, 0, 137.0);
        let once = plan.clone();
        plan.update_grams(&catalog, 0, 137.0);
        assert_eq!(plan, once);
    }

    #[test]
    fn test_entries_do_not_follow_catalog_changes() {
        let original = catalog();
        let mut plan = DayPlan::new();
        plan.add_food(&original, "Chicken Breast", 100.0);
        plan.add_food(&original, "Broccoli", 100.0);

        let revised = Catalog::from_records(vec![
            FoodRecord::new("Chicken Breast", 120.0, 24.0, 0.0, 2.0),
        ]);

        // Untouched entries keep their snapshot.
        assert_eq!(plan.entries()[0].calories, 165.0);

        // Updating grams picks up the current record.
        assert!(plan.update_grams(&revised, 0, 100.0));
        assert_eq!(plan.entries()[0].calories, 120.0);

        // Food missing from the catalog: entry is not half-updated.
        assert!(!plan.update_grams(&revised, 1, 300.0));
        assert_eq!(plan.entries()[1].grams, 100.0);
        assert_eq!(plan.entries()[1].calories, 34.0);
    }

    #[test]
    fn test_workouts_and_net() {
        let catalog = catalog();
        let mut plan = DayPlan::new();
        plan.add_food(&catalog, "Chicken Breast", 200.0);
        plan.add_workout("Run", 300.0);
        plan.add_workout("Bad input", -40.0);
        plan.add_workout("NaN", f64::NAN);

        assert_eq!(plan.workouts()[1].calories_burned, 0.0);
        assert_eq!(plan.workouts()[2].calories_burned, 0.0);
        let totals = plan.totals();
        assert_eq!(totals.burned, 300.0);
        assert_eq!(totals.net, 30.0);

        plan.remove_workout(0);
        assert_eq!(plan.totals().burned, 0.0);
        assert_eq!(plan.totals().net, 330.0);
    }

    #[test]
    fn test_fractional_burn_keeps_one_decimal() {
        let catalog = catalog();
        let mut plan = DayPlan::new();
        plan.add_workout("Stretch", 0.1);
        plan.add_workout("Walk", 0.2);
        assert_eq!(plan.totals().burned, 0.3);
        assert_eq!(plan.totals().net, -0.3);

        plan.add_food(&catalog, "Broccoli", 10.0);
        // 3.4 - 0.3
        assert_eq!(plan.totals().net, 3.1);
    }

    #[test]
    fn test_totals_match_fold_after_random_edits() {
        let catalog = catalog();
        let names: Vec<String> = catalog.records().iter().map(|r| r.name.clone()).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut plan = DayPlan::new();

        for _ in 0..500 {
            match rng.gen_range(0..4) {
                0 | 1 => {
                    let name = &names[rng.gen_range(0..names.len())];
                    plan.add_food(&catalog, name, rng.gen_range(0.0..400.0));
                }
                2 => {
                    let index = rng.gen_range(0..plan.entries().len() + 2);
                    plan.remove_food(index);
                }
                _ => {
                    let index = rng.gen_range(0..plan.entries().len() + 2);
                    plan.update_grams(&catalog, index, rng.gen_range(0.0..400.0));
                }
            }

            let expected_calories: f64 = plan.entries().iter().map(|e| e.calories).sum();
            let expected_protein: f64 = plan.entries().iter().map(|e| e.protein).sum();
            let expected_fat: f64 = plan.entries().iter().map(|e| e.fat).sum();
            let totals = plan.totals();
            assert!((totals.calories - expected_calories).abs() < 0.05 + 1e-6);
            assert!((totals.protein - expected_protein).abs() < 0.05 + 1e-6);
            assert!((totals.fat - expected_fat).abs() < 0.05 + 1e-6);
        }
    }

    #[test]
    fn test_from_parts_recomputes_totals() {
        let plan = DayPlan::from_parts(
            vec![DayEntry {
                food_name: "Leftovers".to_string(),
                grams: 3000.0,
                calories: 400.0,
                protein: 20.0,
                carbs: 50.0,
                fat: 10.0,
            }],
            vec![WorkoutEntry {
                label: "Swim".to_string(),
                calories_burned: -5.0,
            }],
        );
        assert_eq!(plan.entries()[0].grams, 3000.0);
        assert_eq!(plan.entries()[0].calories, 400.0);
        assert_eq!(plan.workouts()[0].calories_burned, 0.0);
        assert_eq!(plan.totals().calories, 400.0);
        assert_eq!(plan.totals().net, 400.0);
    }
}

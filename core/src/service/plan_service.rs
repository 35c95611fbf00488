use std::string::FromUtf8Error;

use crate::error::{PlannerError, PlannerResult};
use crate::model::day_plan::DayPlan;
use crate::model::saved_plan::SavedPlan;
use crate::model::targets::Targets;
use crate::repository::KeyValueStore;

pub const PLAN_KEY: &str = "eatwise_plan";

/// Saves and restores the day plan as one JSON blob under [`PLAN_KEY`].
pub struct PlanService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PlanService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save(&self, targets: Option<Targets>, plan: &DayPlan) -> PlannerResult<()> {
        let saved = SavedPlan::new(targets, plan);
        let blob = serde_json::to_string(&saved)
            .map_err(|e| PlannerError::StorageUnavailable(e.to_string()))?;

        self.store
            .set(PLAN_KEY, &blob)
            .map_err(|e| PlannerError::StorageUnavailable(format!("{:#}", e)))?;

        tracing::info!(
            entries = plan.entries().len(),
            workouts = plan.workouts().len(),
            "saved plan"
        );
        Ok(())
    }

    pub fn load(&self) -> PlannerResult<SavedPlan> {
        let blob = self
            .store
            .get(PLAN_KEY)
            .map_err(read_error)?
            .ok_or(PlannerError::NotFound)?;

        let saved: SavedPlan =
            serde_json::from_str(&blob).map_err(|e| PlannerError::CorruptData(e.to_string()))?;

        tracing::info!(
            entries = saved.day.len(),
            workouts = saved.workouts.len(),
            "loaded plan"
        );
        Ok(saved)
    }

    pub fn clear(&self) -> PlannerResult<()> {
        self.store
            .remove(PLAN_KEY)
            .map_err(|e| PlannerError::StorageUnavailable(format!("{:#}", e)))?;
        tracing::info!("cleared saved plan");
        Ok(())
    }

    pub fn has_saved(&self) -> PlannerResult<bool> {
        self.store
            .get(PLAN_KEY)
            .map(|v| v.is_some())
            .map_err(|e| PlannerError::StorageUnavailable(format!("{:#}", e)))
    }
}

// The blob exists but its bytes are not text: that is a bad blob, not a bad store.
fn read_error(e: anyhow::Error) -> PlannerError {
    if e.downcast_ref::<FromUtf8Error>().is_some() {
        PlannerError::CorruptData(format!("{:#}", e))
    } else {
        PlannerError::StorageUnavailable(format!("{:#}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;
    use crate::model::food::FoodRecord;
    use crate::repository::{FileKeyValueStore, MemoryKeyValueStore};
    use anyhow::{anyhow, Result};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("storage disabled"))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("quota exceeded"))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(anyhow!("storage disabled"))
        }
    }

    fn sample_plan() -> DayPlan {
        let catalog = Catalog::from_records(vec![
            FoodRecord::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
            FoodRecord::new("Apple", 52.0, 0.3, 14.0, 0.2),
        ]);
        let mut plan = DayPlan::new();
        plan.add_food(&catalog, "Chicken Breast", 150.0);
        plan.add_food(&catalog, "Apple", 180.0);
        plan.add_workout("Cycling", 420.0);
        plan
    }

    #[test]
    fn test_save_load_round_trip() {
        let service = PlanService::new(MemoryKeyValueStore::new());
        let plan = sample_plan();
        let targets = Targets {
            kcal: 2345,
            protein_g: 176,
            carbs_g: 235,
            fat_g: 78,
        };

        service.save(Some(targets), &plan).unwrap();
        let saved = service.load().unwrap();
        assert!(saved.saved_at.is_some());

        let (loaded_targets, loaded_plan) = saved.into_plan();
        assert_eq!(loaded_targets, Some(targets));
        assert_eq!(loaded_plan.entries(), plan.entries());
        assert_eq!(loaded_plan.workouts(), plan.workouts());
        assert_eq!(loaded_plan.totals(), plan.totals());
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let service = PlanService::new(MemoryKeyValueStore::new());
        assert_eq!(service.load(), Err(PlannerError::NotFound));
        assert!(!service.has_saved().unwrap());
    }

    #[test]
    fn test_load_garbage_is_corrupt() {
        let store = MemoryKeyValueStore::new();
        store.set(PLAN_KEY, "{not json").unwrap();
        let service = PlanService::new(&store);
        assert!(matches!(service.load(), Err(PlannerError::CorruptData(_))));

        store.set(PLAN_KEY, "[1, 2, 3]").unwrap();
        assert!(matches!(service.load(), Err(PlannerError::CorruptData(_))));
    }

    #[test]
    fn test_non_utf8_blob_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().to_path_buf()).unwrap();
        std::fs::write(
            dir.path().join(format!("{}.json", PLAN_KEY)),
            [0xff, 0xfe, b'{', b'}'],
        )
        .unwrap();

        let service = PlanService::new(store);
        assert!(matches!(service.load(), Err(PlannerError::CorruptData(_))));
    }

    #[test]
    fn test_load_recovers_partial_blob() {
        let store = MemoryKeyValueStore::new();
        // Layout written by older versions: no workouts, sparse entries.
        store
            .set(
                PLAN_KEY,
                r#"{"targets":{"kcal":2000,"protein":150},"day":[{"name":"Apple","grams":100,"calories":52},{"name":"Mystery"}]}"#,
            )
            .unwrap();
        let service = PlanService::new(&store);

        let (targets, plan) = service.load().unwrap().into_plan();
        let targets = targets.unwrap();
        assert_eq!(targets.kcal, 2000);
        assert_eq!(targets.protein_g, 150);
        assert_eq!(targets.fat_g, 0);

        assert_eq!(plan.entries().len(), 2);
        assert_eq!(plan.entries()[1].grams, 0.0);
        assert!(plan.workouts().is_empty());
        assert_eq!(plan.totals().calories, 52.0);
    }

    #[test]
    fn test_empty_object_loads_empty_plan() {
        let store = MemoryKeyValueStore::new();
        store.set(PLAN_KEY, "{}").unwrap();
        let (targets, plan) = PlanService::new(&store).load().unwrap().into_plan();
        assert_eq!(targets, None);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryKeyValueStore::new();
        let service = PlanService::new(&store);
        service.save(None, &sample_plan()).unwrap();
        assert!(service.has_saved().unwrap());

        service.clear().unwrap();
        service.clear().unwrap();
        assert_eq!(service.load(), Err(PlannerError::NotFound));
    }

    #[test]
    fn test_storage_failures_are_reported() {
        let service = PlanService::new(BrokenStore);
        let err = service.save(None, &sample_plan()).unwrap_err();
        assert_eq!(
            err,
            PlannerError::StorageUnavailable("quota exceeded".to_string())
        );
        assert!(matches!(
            service.load(),
            Err(PlannerError::StorageUnavailable(_))
        ));
        assert!(matches!(
            service.clear(),
            Err(PlannerError::StorageUnavailable(_))
        ));
    }
}

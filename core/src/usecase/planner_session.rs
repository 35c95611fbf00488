use rand::Rng;

use crate::error::{PlannerError, PlannerResult};
use crate::model::catalog::Catalog;
use crate::model::day_plan::DayPlan;
use crate::model::profile::Profile;
use crate::model::targets::Targets;
use crate::repository::KeyValueStore;
use crate::service::nutrition::compute_targets;
use crate::service::plan_service::PlanService;
use crate::usecase::sample_day::fill_sample_day;

/// Everything one user works with: the catalog, the current targets, the
/// day being planned and where it gets saved.
///
/// Mutations never touch storage; callers decide when to [`save`](Self::save).
pub struct PlannerSession<S: KeyValueStore> {
    catalog: Catalog,
    targets: Option<Targets>,
    plan: DayPlan,
    plan_service: PlanService<S>,
}

impl<S: KeyValueStore> PlannerSession<S> {
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self {
            catalog,
            targets: None,
            plan: DayPlan::new(),
            plan_service: PlanService::new(store),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn targets(&self) -> Option<Targets> {
        self.targets
    }

    pub fn plan(&self) -> &DayPlan {
        &self.plan
    }

    /// On error the previous targets are kept.
    pub fn calculate_targets(&mut self, profile: &Profile) -> PlannerResult<Targets> {
        let targets = compute_targets(profile)?;
        self.targets = Some(targets);
        Ok(targets)
    }

    pub fn add_food(&mut self, name: &str, grams: f64) {
        self.plan.add_food(&self.catalog, name, grams);
    }

    pub fn remove_food(&mut self, index: usize) {
        self.plan.remove_food(index);
    }

    /// `false` when there is no entry at `index` or its food left the catalog.
    pub fn update_grams(&mut self, index: usize, grams: f64) -> bool {
        self.plan.update_grams(&self.catalog, index, grams)
    }

    pub fn add_workout(&mut self, label: &str, calories_burned: f64) {
        self.plan.add_workout(label, calories_burned);
    }

    pub fn remove_workout(&mut self, index: usize) {
        self.plan.remove_workout(index);
    }

    pub fn generate_sample_day<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        fill_sample_day(&mut self.plan, &self.catalog, rng);
    }

    pub fn clear_day(&mut self) {
        self.plan.clear();
    }

    /// Writes targets and plan. A storage failure leaves the session as it was.
    pub fn save(&self) -> PlannerResult<()> {
        self.plan_service.save(self.targets, &self.plan).map_err(|e| {
            tracing::warn!(error = %e, "could not save plan, keeping it in memory");
            e
        })
    }

    /// Replaces targets and plan with the saved ones.
    ///
    /// A missing or unreadable blob resets the session to an empty day and
    /// the error is returned for reporting. When storage itself is down the
    /// in-memory plan is kept.
    pub fn load(&mut self) -> PlannerResult<()> {
        match self.plan_service.load() {
            Ok(saved) => {
                let (targets, plan) = saved.into_plan();
                if targets.is_some() {
                    self.targets = targets;
                }
                self.plan = plan;
                Ok(())
            }
            Err(e @ (PlannerError::NotFound | PlannerError::CorruptData(_))) => {
                if matches!(e, PlannerError::CorruptData(_)) {
                    tracing::warn!(error = %e, "saved plan unreadable, starting an empty day");
                }
                self.plan = DayPlan::new();
                Err(e)
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load plan, keeping the current one");
                Err(e)
            }
        }
    }

    pub fn clear_saved(&self) -> PlannerResult<()> {
        self.plan_service.clear()
    }
}

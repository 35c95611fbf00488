use std::collections::HashSet;

use crate::model::food::{Category, FoodRecord};

/// Foods with at least this much protein per 100 g count as high protein.
pub const HIGH_PROTEIN_MIN_G: f64 = 10.0;
/// Foods at or under this many kcal per 100 g count as low calorie.
pub const LOW_CALORIE_MAX_KCAL: f64 = 80.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodFilter {
    pub query: String,
    pub high_protein: bool,
    pub low_calorie: bool,
}

impl FoodFilter {
    pub fn matches(&self, record: &FoodRecord) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() && !record.name.to_lowercase().contains(&query) {
            return false;
        }
        if self.high_protein && record.protein < HIGH_PROTEIN_MIN_G {
            return false;
        }
        if self.low_calorie && record.calories > LOW_CALORIE_MAX_KCAL {
            return false;
        }
        true
    }
}

/// Read-only list of foods, unique by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<FoodRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(records.len());

        for record in records {
            if seen.insert(record.name.clone()) {
                unique.push(record);
            } else {
                tracing::warn!(name = %record.name, "duplicate food in catalog, keeping the first");
            }
        }

        Self { records: unique }
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&FoodRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn by_category(&self, category: Category) -> Vec<&FoodRecord> {
        self.records
            .iter()
            .filter(|r| r.category == Some(category))
            .collect()
    }

    pub fn filter(&self, filter: &FoodFilter) -> Vec<&FoodRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }
}

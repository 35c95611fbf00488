use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::catalog::Catalog;
use crate::model::food::FoodRecord;

const BUILTIN_FOODS: &str = include_str!("../../data/foods.json");

pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let records: Vec<FoodRecord> =
        serde_json::from_str(json).context("Catalog is not a list of food records")?;
    Ok(Catalog::from_records(records))
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path)
        .with_context(|| format!("Could not open catalog {}", path.display()))?;
    let reader = BufReader::new(file);
    let records: Vec<FoodRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("Could not parse catalog {}", path.display()))?;

    let catalog = Catalog::from_records(records);
    tracing::info!(path = %path.display(), foods = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

/// The food list shipped with the crate.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog(BUILTIN_FOODS)
}

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::catalog::Catalog;
use crate::repository::{builtin_catalog, load_catalog};

pub const DATA_DIR_ENV: &str = "EATWISE_DATA_DIR";
pub const CATALOG_ENV: &str = "EATWISE_CATALOG";
const DEFAULT_DIR_NAME: &str = ".eatwise";

/// Where the planner keeps its data and finds its food catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub data_dir: PathBuf,
    /// `None` means the catalog bundled with the crate.
    pub catalog_path: Option<PathBuf>,
}

impl PlannerConfig {
    /// Explicit values win, then the environment, then `~/.eatwise` and
    /// the bundled catalog.
    pub fn resolve(data_dir: Option<PathBuf>, catalog_path: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir.or_else(|| env_path(DATA_DIR_ENV)) {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };
        let catalog_path = catalog_path.or_else(|| env_path(CATALOG_ENV));

        Ok(Self {
            data_dir,
            catalog_path,
        })
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => builtin_catalog(),
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_win() {
        let config = PlannerConfig::resolve(
            Some(PathBuf::from("/tmp/eatwise-test")),
            Some(PathBuf::from("/tmp/foods.json")),
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/eatwise-test"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/foods.json")));
    }

    #[test]
    fn test_builtin_catalog_when_no_path() {
        let config = PlannerConfig {
            data_dir: PathBuf::from("/tmp/eatwise-test"),
            catalog_path: None,
        };
        assert!(!config.load_catalog().unwrap().is_empty());
    }
}

use serde::{Deserialize, Serialize};

/// Daily energy and macro targets. Keys match the saved plan layout.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Targets {
    #[serde(default)]
    pub kcal: u32,
    #[serde(rename = "protein", default)]
    pub protein_g: u32,
    #[serde(rename = "carbs", default)]
    pub carbs_g: u32,
    #[serde(rename = "fat", default)]
    pub fat_g: u32,
}

/// Energy-level split of a kcal target. The three parts always sum to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroSplit {
    pub protein_kcal: u32,
    pub carbs_kcal: u32,
    pub fat_kcal: u32,
}

impl MacroSplit {
    pub fn total_kcal(&self) -> u32 {
        self.protein_kcal + self.carbs_kcal + self.fat_kcal
    }
}

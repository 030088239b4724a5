use crate::nutrient::NutrientProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ceiling on the share of the ration an ingredient may take.
///
/// Carried as reference data only. The allocation step does not check it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum InclusionRate {
    /// Maximum share of the ration, in percent.
    Capped(f64),
    #[default]
    Uncapped,
}

impl InclusionRate {
    pub fn percent(self) -> Option<f64> {
        match self {
            InclusionRate::Capped(pct) => Some(pct),
            InclusionRate::Uncapped => None,
        }
    }
}

impl From<Option<f64>> for InclusionRate {
    fn from(value: Option<f64>) -> Self {
        value.map_or(InclusionRate::Uncapped, InclusionRate::Capped)
    }
}

impl From<InclusionRate> for Option<f64> {
    fn from(rate: InclusionRate) -> Self {
        rate.percent()
    }
}

impl fmt::Display for InclusionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InclusionRate::Capped(pct) => write!(f, "{}%", pct),
            InclusionRate::Uncapped => write!(f, "uncapped"),
        }
    }
}

/// A feed ingredient and its composition, as-fed basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub nutrients: NutrientProfile,
    #[serde(default)]
    pub max_inclusion_rate: InclusionRate,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        nutrients: NutrientProfile,
        max_inclusion_rate: InclusionRate,
    ) -> Self {
        Self {
            name: name.into(),
            nutrients,
            max_inclusion_rate,
        }
    }

    pub fn crude_protein(&self) -> f64 {
        self.nutrients.crude_protein
    }
}

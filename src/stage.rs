use crate::error::FormulationError;
use crate::nutrient::{Nutrient, NutrientRequirements};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Growth stage of the animals a ration is formulated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Starter,
    Grower,
    Finisher,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Starter, Stage::Grower, Stage::Finisher];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Starter => "starter",
            Stage::Grower => "grower",
            Stage::Finisher => "finisher",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stage {
    type Err = FormulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Ok(Stage::Starter),
            "grower" => Ok(Stage::Grower),
            "finisher" => Ok(Stage::Finisher),
            _ => Err(FormulationError::UnknownStage(s.to_string())),
        }
    }
}

/// Observed daily feed intake range for one animal, in kg/day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntakeRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl IntakeRange {
    pub const fn new(min_kg: f64, max_kg: f64) -> Self {
        Self { min_kg, max_kg }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min_kg + self.max_kg) / 2.0
    }
}

/// Reference data for a single growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageProfile {
    pub stage: Stage,
    /// Minimum recommended crude protein, in percent.
    pub min_crude_protein: f64,
    pub intake: IntakeRange,
}

impl StageProfile {
    /// Average daily feed intake per animal, in kg/day.
    pub fn daily_intake_per_animal(&self) -> f64 {
        self.intake.midpoint()
    }
}

const STANDARD_PROFILES: [StageProfile; 3] = [
    StageProfile {
        stage: Stage::Starter,
        min_crude_protein: 18.0,
        intake: IntakeRange::new(0.61, 0.95),
    },
    StageProfile {
        stage: Stage::Grower,
        min_crude_protein: 16.0,
        intake: IntakeRange::new(1.0, 2.0),
    },
    StageProfile {
        stage: Stage::Finisher,
        min_crude_protein: 14.0,
        intake: IntakeRange::new(2.0, 2.5),
    },
];

static STANDARD_TABLE: LazyLock<RequirementsTable> = LazyLock::new(RequirementsTable::new);

/// Stage profiles plus any per-nutrient thresholds that replace the stage's
/// crude protein minimum for that nutrient.
///
/// Without overrides every nutrient of a stage is compared against the
/// stage's `min_crude_protein`.
#[derive(Debug, Clone)]
pub struct RequirementsTable {
    profiles: [StageProfile; 3],
    overrides: AHashMap<(Stage, Nutrient), f64>,
}

impl Default for RequirementsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementsTable {
    /// The standard three-stage table without overrides.
    pub fn new() -> Self {
        Self {
            profiles: STANDARD_PROFILES,
            overrides: AHashMap::new(),
        }
    }

    /// Shared, process-wide standard table.
    pub fn standard() -> &'static RequirementsTable {
        &STANDARD_TABLE
    }

    pub fn profile(&self, stage: Stage) -> &StageProfile {
        match stage {
            Stage::Starter => &self.profiles[0],
            Stage::Grower => &self.profiles[1],
            Stage::Finisher => &self.profiles[2],
        }
    }

    pub fn profiles(&self) -> &[StageProfile] {
        &self.profiles
    }

    /// Give `nutrient` its own minimum for `stage`.
    pub fn with_threshold(mut self, stage: Stage, nutrient: Nutrient, minimum: f64) -> Self {
        self.overrides.insert((stage, nutrient), minimum);
        self
    }

    /// The threshold every nutrient of `stage` is compared against.
    pub fn requirements(&self, stage: Stage) -> NutrientRequirements {
        let mut requirements =
            NutrientRequirements::uniform(self.profile(stage).min_crude_protein);
        for nutrient in Nutrient::ALL {
            if let Some(minimum) = self.overrides.get(&(stage, nutrient)) {
                requirements[nutrient] = *minimum;
            }
        }
        requirements
    }
}

use crate::nutrient::{Nutrient, NutrientRequirements, NutrientTotals};
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::fmt;

mod remediation;

pub use remediation::{Suggestion, candidates_for, suggest};

/// Outcome of comparing one nutrient against its requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientStatus {
    Adequate,
    Deficient,
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientStatus::Adequate => write!(f, "Adequate"),
            NutrientStatus::Deficient => write!(f, "Deficient"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientAssessment {
    pub nutrient: Nutrient,
    pub actual: f64,
    pub required: f64,
    pub status: NutrientStatus,
}

impl NutrientAssessment {
    /// How far below the requirement the actual value is. Zero when adequate.
    pub fn shortfall(&self) -> f64 {
        match self.status {
            NutrientStatus::Deficient => self.required - self.actual,
            NutrientStatus::Adequate => 0.0,
        }
    }
}

/// Per-nutrient classification of a formulation's totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientAnalysis {
    pub stage: Stage,
    /// One assessment per nutrient, in canonical order.
    pub assessments: Vec<NutrientAssessment>,
}

impl NutrientAnalysis {
    pub fn assessment(&self, nutrient: Nutrient) -> Option<&NutrientAssessment> {
        self.assessments.iter().find(|a| a.nutrient == nutrient)
    }

    pub fn status(&self, nutrient: Nutrient) -> Option<NutrientStatus> {
        self.assessment(nutrient).map(|a| a.status)
    }

    pub fn deficiencies(&self) -> impl Iterator<Item = &NutrientAssessment> {
        self.assessments
            .iter()
            .filter(|a| a.status == NutrientStatus::Deficient)
    }

    pub fn is_adequate(&self) -> bool {
        self.deficiencies().next().is_none()
    }
}

/// Classifies each nutrient as deficient when strictly below its
/// requirement. Meeting the requirement exactly is adequate.
pub fn analyze(
    totals: &NutrientTotals,
    requirements: &NutrientRequirements,
    stage: Stage,
) -> NutrientAnalysis {
    let assessments = Nutrient::ALL
        .into_iter()
        .map(|nutrient| {
            let actual = totals[nutrient];
            let required = requirements[nutrient];
            let status = if actual < required {
                NutrientStatus::Deficient
            } else {
                NutrientStatus::Adequate
            };
            NutrientAssessment {
                nutrient,
                actual,
                required,
                status,
            }
        })
        .collect();

    NutrientAnalysis { stage, assessments }
}

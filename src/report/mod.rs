use crate::analysis::{NutrientAnalysis, Suggestion};
use crate::formulation::Formulation;
use serde::{Deserialize, Serialize};

mod formatter;

pub use formatter::ReportFormatter;

/// A formulation together with its analysis and remediation suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RationReport {
    pub formulation: Formulation,
    pub analysis: NutrientAnalysis,
    pub suggestions: Vec<Suggestion>,
}

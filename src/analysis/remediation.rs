use super::NutrientAnalysis;
use crate::catalog::Catalog;
use crate::nutrient::Nutrient;
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Ingredients known to be rich in `nutrient`, strongest source first.
pub fn candidates_for(nutrient: Nutrient) -> &'static [&'static str] {
    match nutrient {
        Nutrient::CrudeProtein => &[
            "Fish Meal",
            "Soybean Meal",
            "Copra Meal",
            "Ipil-ipil Leaves",
            "Malunggay Leaves",
        ],
        Nutrient::CrudeFiber => &[
            "Copra Meal",
            "Rice Bran",
            "Coconut Residue",
            "Ipil-ipil Leaves",
            "Cassava Leaves",
        ],
        Nutrient::CrudeFat => &["Rice Bran", "Coconut Residue", "Copra Meal", "Fish Meal"],
        Nutrient::Calcium => &[
            "Shell Meal",
            "Bone Meal",
            "Fish Meal",
            "Ipil-ipil Leaves",
            "Malunggay Leaves",
        ],
        Nutrient::Moisture => &["Azolla", "Banana Stalk", "Water Spinach", "Sweet Potato Tops"],
        Nutrient::Phosphorus => &[
            "Bone Meal",
            "Fish Meal",
            "Rice Bran",
            "Soybean Meal",
            "Copra Meal",
        ],
    }
}

/// A remediation proposal for one deficient nutrient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub nutrient: Nutrient,
    /// `required - actual`, in the same unit as the totals.
    pub shortfall: f64,
    /// Unselected ingredients that could raise the nutrient. Empty when every
    /// known source is already in the mix.
    pub candidates: Vec<String>,
    pub message: String,
}

/// Builds one suggestion per deficient nutrient of `analysis`.
///
/// Candidates already in `selected` are dropped. When `catalog` is given,
/// candidates it does not contain are dropped as well.
pub fn suggest<'s>(
    analysis: &NutrientAnalysis,
    selected: impl IntoIterator<Item = &'s str>,
    catalog: Option<&Catalog>,
) -> Vec<Suggestion> {
    let selected: AHashSet<&str> = selected.into_iter().collect();

    analysis
        .deficiencies()
        .map(|assessment| {
            let nutrient = assessment.nutrient;
            let shortfall = assessment.required - assessment.actual;
            let candidates: Vec<String> = candidates_for(nutrient)
                .iter()
                .filter(|name| !selected.contains(**name))
                .filter(|name| catalog.is_none_or(|c| c.contains(name)))
                .map(|name| name.to_string())
                .collect();

            let headline = format!(
                "{} is below the {} requirement by {:.2}%.",
                nutrient.label(),
                analysis.stage,
                shortfall
            );
            let message = if candidates.is_empty() {
                format!(
                    "{} All ingredients rich in {} are already selected; consider raising their share of the ration.",
                    headline,
                    nutrient.label().to_lowercase()
                )
            } else {
                format!("{} Consider adding: {}.", headline, candidates.iter().join(", "))
            };

            Suggestion {
                nutrient,
                shortfall,
                candidates,
                message,
            }
        })
        .collect()
}

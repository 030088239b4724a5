use super::IngredientAllocation;
use crate::catalog::Ingredient;
use crate::error::FormulationError;
use crate::nutrient::NutrientTotals;
use crate::stage::StageProfile;

/// Protein-weighted allocation of a resolved selection.
///
/// Each ingredient's share of the ration is its crude protein divided by the
/// summed crude protein of the selection. The aggregated nutrient percentage
/// is then multiplied by the herd's total daily feed, so totals grow with
/// both herd size and stage intake.
pub(super) struct AllocationEngine<'a> {
    ingredients: &'a [&'a Ingredient],
    profile: &'a StageProfile,
    herd_size: u32,
}

impl<'a> AllocationEngine<'a> {
    pub(super) fn new(
        ingredients: &'a [&'a Ingredient],
        profile: &'a StageProfile,
        herd_size: u32,
    ) -> Self {
        Self {
            ingredients,
            profile,
            herd_size,
        }
    }

    pub(super) fn total_daily_feed(&self) -> f64 {
        self.profile.daily_intake_per_animal() * f64::from(self.herd_size)
    }

    pub(super) fn allocate(
        &self,
    ) -> Result<(Vec<IngredientAllocation>, NutrientTotals), FormulationError> {
        let proportions = self.proportions()?;
        let intake = self.profile.daily_intake_per_animal();
        let herd = f64::from(self.herd_size);

        let allocations = self
            .ingredients
            .iter()
            .zip(&proportions)
            .map(|(ingredient, &proportion)| IngredientAllocation {
                ingredient_name: ingredient.name.clone(),
                proportion,
                amount_kg: intake * proportion * herd,
            })
            .collect();

        // Per-animal nutrient percentage of the mix, then scaled by the
        // herd's daily feed.
        let per_unit: NutrientTotals = self
            .ingredients
            .iter()
            .zip(&proportions)
            .map(|(ingredient, &proportion)| ingredient.nutrients * proportion)
            .sum();
        let totals = per_unit * intake * herd;

        Ok((allocations, totals))
    }

    fn proportions(&self) -> Result<Vec<f64>, FormulationError> {
        let total_crude_protein: f64 = self.ingredients.iter().map(|i| i.crude_protein()).sum();
        if !total_crude_protein.is_finite() || total_crude_protein <= 0.0 {
            tracing::warn!(
                ingredients = self.ingredients.len(),
                total_crude_protein,
                "selection has no usable crude protein total, refusing to divide"
            );
            return Err(FormulationError::DivisionByZero);
        }

        Ok(self
            .ingredients
            .iter()
            .map(|i| i.crude_protein() / total_crude_protein)
            .collect())
    }
}

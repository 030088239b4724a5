use crate::analysis::{self, NutrientAnalysis, Suggestion};
use crate::catalog::{Catalog, Ingredient};
use crate::error::FormulationError;
use crate::nutrient::{Nutrient, NutrientRequirements, NutrientTotals};
use crate::report::RationReport;
use crate::stage::{RequirementsTable, Stage};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

mod allocation;
pub mod request;

use allocation::AllocationEngine;
pub use request::{FormulationRequest, RequestPayload};

/// The computed daily mass of one ingredient across the herd.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAllocation {
    pub ingredient_name: String,
    /// Share of the ration, derived from the ingredient's crude protein.
    pub proportion: f64,
    pub amount_kg: f64,
}

/// The result of a formulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formulation {
    pub stage: Stage,
    pub herd_size: u32,
    /// Daily ration mass for the whole herd, in kg.
    pub total_daily_feed_kg: f64,
    /// One entry per selected ingredient, in selection order.
    pub allocations: Vec<IngredientAllocation>,
    /// Aggregated nutrients, scaled by the herd's daily feed.
    pub totals: NutrientTotals,
}

impl Formulation {
    pub fn allocation(&self, ingredient_name: &str) -> Option<&IngredientAllocation> {
        self.allocations
            .iter()
            .find(|a| a.ingredient_name == ingredient_name)
    }

    pub fn selected_names(&self) -> impl Iterator<Item = &str> {
        self.allocations.iter().map(|a| a.ingredient_name.as_str())
    }
}

/// Formulates rations from a catalog and a requirement table.
///
/// A `Formulator` only reads its tables, so one instance can be shared
/// freely across threads. The built-in catalog and the standard table are
/// borrowed from their process-wide statics rather than copied.
#[derive(Debug, Clone)]
pub struct Formulator {
    catalog: Cow<'static, Catalog>,
    requirements: Cow<'static, RequirementsTable>,
}

pub struct FormulatorBuilder {
    catalog: Cow<'static, Catalog>,
    requirements: Cow<'static, RequirementsTable>,
}

impl FormulatorBuilder {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_catalog(Cow::Owned(catalog))
    }

    fn with_catalog(catalog: Cow<'static, Catalog>) -> Self {
        Self {
            catalog,
            requirements: Cow::Borrowed(RequirementsTable::standard()),
        }
    }

    pub fn with_requirements(mut self, requirements: RequirementsTable) -> Self {
        self.requirements = Cow::Owned(requirements);
        self
    }

    /// Gives `nutrient` its own minimum for `stage` instead of the stage's
    /// crude protein minimum.
    pub fn with_threshold(self, stage: Stage, nutrient: Nutrient, minimum: f64) -> Self {
        let requirements = self
            .requirements
            .into_owned()
            .with_threshold(stage, nutrient, minimum);
        Self {
            requirements: Cow::Owned(requirements),
            ..self
        }
    }

    pub fn build(self) -> Formulator {
        Formulator {
            catalog: self.catalog,
            requirements: self.requirements,
        }
    }
}

impl Default for Formulator {
    fn default() -> Self {
        Self::builtin_builder().build()
    }
}

impl Formulator {
    pub fn builder(catalog: Catalog) -> FormulatorBuilder {
        FormulatorBuilder::new(catalog)
    }

    /// A builder over the built-in catalog, without copying it.
    pub fn builtin_builder() -> FormulatorBuilder {
        FormulatorBuilder::with_catalog(Cow::Borrowed(Catalog::builtin()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn requirements_table(&self) -> &RequirementsTable {
        &self.requirements
    }

    /// Allocates the selected ingredients and aggregates their nutrients.
    ///
    /// # Returns
    ///
    /// * `Ok(Formulation)`: allocations in selection order plus nutrient totals.
    /// * `Err(FormulationError::UnknownIngredient)`: a selected name is not in the catalog.
    /// * `Err(FormulationError::DivisionByZero)`: the selection has no crude protein.
    pub fn formulate(&self, request: &FormulationRequest) -> Result<Formulation, FormulationError> {
        let ingredients = request
            .selected()
            .iter()
            .map(|name| self.catalog.resolve(name))
            .collect::<Result<Vec<&Ingredient>, _>>()?;

        let profile = self.requirements.profile(request.stage());
        let engine = AllocationEngine::new(&ingredients, profile, request.herd_size());
        let (allocations, totals) = engine.allocate()?;

        tracing::debug!(
            stage = %request.stage(),
            herd_size = request.herd_size(),
            ingredients = ingredients.len(),
            crude_protein = totals.crude_protein,
            "formulated ration"
        );

        Ok(Formulation {
            stage: request.stage(),
            herd_size: request.herd_size(),
            total_daily_feed_kg: engine.total_daily_feed(),
            allocations,
            totals,
        })
    }

    /// Validates the arguments and formulates in one step.
    pub fn formulate_selection<I, S>(
        &self,
        selected: I,
        stage: Stage,
        herd_size: u32,
    ) -> Result<Formulation, FormulationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = FormulationRequest::new(selected, stage, herd_size)?;
        self.formulate(&request)
    }

    /// Formulates from a loosely-typed payload, reporting absent fields.
    pub fn formulate_payload(
        &self,
        payload: RequestPayload,
    ) -> Result<Formulation, FormulationError> {
        let request = FormulationRequest::try_from(payload)?;
        self.formulate(&request)
    }

    /// The minimums every nutrient of `stage` is compared against.
    pub fn recommendations(&self, stage: Stage) -> NutrientRequirements {
        self.requirements.requirements(stage)
    }

    /// Classifies each nutrient of `totals` against the stage's requirements.
    pub fn analyze(&self, totals: &NutrientTotals, stage: Stage) -> NutrientAnalysis {
        analysis::analyze(totals, &self.recommendations(stage), stage)
    }

    /// Remediation suggestions for each deficient nutrient, limited to
    /// ingredients present in this formulator's catalog.
    pub fn suggest<'s>(
        &self,
        analysis: &NutrientAnalysis,
        selected: impl IntoIterator<Item = &'s str>,
    ) -> Vec<Suggestion> {
        analysis::suggest(analysis, selected, Some(&*self.catalog))
    }

    /// Formulates, analyzes and collects suggestions for a request.
    pub fn evaluate(&self, request: &FormulationRequest) -> Result<RationReport, FormulationError> {
        let formulation = self.formulate(request)?;
        let analysis = self.analyze(&formulation.totals, formulation.stage);
        let suggestions = self.suggest(&analysis, formulation.selected_names());
        Ok(RationReport {
            formulation,
            analysis,
            suggestions,
        })
    }
}

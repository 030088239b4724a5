use crate::catalog::Catalog;
use crate::formulation::{Formulation, FormulationRequest, Formulator};
use crate::nutrient::NutrientProfile;
use crate::stage::Stage;
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

fn profile_to_dict<'py>(
    py: Python<'py>,
    profile: &NutrientProfile,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for (nutrient, value) in profile.iter() {
        dict.set_item(nutrient.key(), value)?;
    }
    Ok(dict)
}

fn formulation_to_dict<'py>(
    py: Python<'py>,
    formulation: &Formulation,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("stage", formulation.stage.as_str())?;
    dict.set_item("herd_size", formulation.herd_size)?;
    dict.set_item("total_daily_feed_kg", formulation.total_daily_feed_kg)?;

    let mut allocations = Vec::with_capacity(formulation.allocations.len());
    for allocation in &formulation.allocations {
        let entry = PyDict::new(py);
        entry.set_item("ingredient_name", &allocation.ingredient_name)?;
        entry.set_item("proportion", allocation.proportion)?;
        entry.set_item("amount_kg", allocation.amount_kg)?;
        allocations.push(entry);
    }
    dict.set_item("allocations", allocations)?;
    dict.set_item("totals", profile_to_dict(py, &formulation.totals)?)?;
    Ok(dict)
}

/// A swine ration formulation engine.
///
/// Holds an ingredient catalog and the stage requirement table. The
/// instance is read-only after construction and can be reused for any
/// number of formulations.
#[pyclass(name = "FeedMix")]
struct FeedMixPy {
    formulator: Formulator,
}

#[pymethods]
impl FeedMixPy {
    /// Creates a formulator.
    ///
    /// Args:
    ///     catalog_json (str | None): Optional JSON catalog replacing the
    ///         built-in ingredient catalog.
    ///
    /// Raises:
    ///     ValueError: If the catalog JSON is malformed or invalid.
    #[new]
    #[pyo3(signature = (catalog_json=None))]
    fn new(catalog_json: Option<&str>) -> PyResult<Self> {
        let formulator = match catalog_json {
            Some(json) => {
                let catalog = Catalog::from_json(json).map_err(value_error)?;
                Formulator::builder(catalog).build()
            }
            None => Formulator::default(),
        };
        Ok(FeedMixPy { formulator })
    }

    /// Allocates the selected ingredients for a herd.
    ///
    /// Args:
    ///     ingredients (list[str]): Catalog names, in the desired order.
    ///     stage (str): One of "starter", "grower", "finisher".
    ///     herd_size (int): Number of animals, from 1 to 4294967295.
    ///
    /// Returns:
    ///     dict: "stage", "herd_size", "total_daily_feed_kg",
    ///         "allocations" (list of dicts) and "totals" (dict keyed by
    ///         camelCase nutrient name).
    ///
    /// Raises:
    ///     ValueError: On an unknown ingredient or stage, an empty
    ///         selection, or a herd size out of range.
    fn formulate<'py>(
        &self,
        py: Python<'py>,
        ingredients: Vec<String>,
        stage: &str,
        herd_size: i64,
    ) -> PyResult<Bound<'py, PyDict>> {
        let stage: Stage = stage.parse().map_err(value_error)?;
        let herd_size = FormulationRequest::checked_herd_size(herd_size).map_err(value_error)?;
        let formulation = self
            .formulator
            .formulate_selection(ingredients, stage, herd_size)
            .map_err(value_error)?;
        formulation_to_dict(py, &formulation)
    }

    /// Returns the recommended nutrient minimums of a growth stage.
    fn recommendations<'py>(&self, py: Python<'py>, stage: &str) -> PyResult<Bound<'py, PyDict>> {
        let stage: Stage = stage.parse().map_err(value_error)?;
        profile_to_dict(py, &self.formulator.recommendations(stage))
    }
}

/// Swine ration formulation and nutrient analysis.
#[pymodule]
fn feedmix(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<FeedMixPy>()?;
    Ok(())
}

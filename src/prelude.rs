//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the feedmix crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use feedmix::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file("path/to/catalog.json")?;
//! let formulator = Formulator::builder(catalog).build();
//!
//! let formulation = formulator.formulate_selection(["Rice Bran", "Fish Meal"], Stage::Grower, 10)?;
//! let analysis = formulator.analyze(&formulation.totals, Stage::Grower);
//! println!("{}", ReportFormatter::format_analysis(&analysis));
//! # Ok(())
//! # }
//! ```

// Engine entry points
pub use crate::formulation::{
    Formulation, FormulationRequest, Formulator, IngredientAllocation, RequestPayload,
};

// Analysis
pub use crate::analysis::{NutrientAnalysis, NutrientAssessment, NutrientStatus, Suggestion};

// Reference data
pub use crate::catalog::{Catalog, CatalogFile, InclusionRate, Ingredient, IntoCatalog};
pub use crate::nutrient::{Nutrient, NutrientProfile, NutrientRequirements, NutrientTotals};
pub use crate::stage::{IntakeRange, RequirementsTable, Stage, StageProfile};

// Reporting
pub use crate::report::{RationReport, ReportFormatter};

// Error types
pub use crate::error::{CatalogError, FormulationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

//! # feedmix - Swine Ration Formulation Engine
//!
//! **feedmix** helps small-scale swine raisers compose feed rations from locally
//! available ingredients and check whether the mix meets the nutrient targets of
//! an animal's growth stage.
//!
//! ## Core Workflow
//!
//! 1.  **Pick a Catalog**: Use the built-in ingredient catalog, load one from JSON,
//!     or implement `IntoCatalog` to convert your own ingredient table.
//! 2.  **Build a Formulator**: `Formulator::builder(catalog)` takes the catalog and,
//!     optionally, custom stage requirements. `Formulator::builtin_builder()` and
//!     `Formulator::default()` borrow the built-in catalog instead of copying it.
//! 3.  **Formulate**: Each selected ingredient receives a share of the herd's daily
//!     ration proportional to its crude protein. Nutrients are aggregated over the
//!     mix and scaled by the herd's daily feed.
//! 4.  **Analyze**: Each nutrient is classified `Adequate` or `Deficient` against the
//!     stage's recommended minimums, and deficiencies come with suggestions of
//!     unselected ingredients rich in the missing nutrient.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedmix::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let formulator = Formulator::default();
//!
//!     let request = FormulationRequest::new(
//!         ["Coconut Residue", "Water Spinach", "Cassava Leaves"],
//!         Stage::Starter,
//!         5,
//!     )?;
//!
//!     let formulation = formulator.formulate(&request)?;
//!     for allocation in &formulation.allocations {
//!         println!("{}: {:.2} kg", allocation.ingredient_name, allocation.amount_kg);
//!     }
//!
//!     let analysis = formulator.analyze(&formulation.totals, Stage::Starter);
//!     for suggestion in formulator.suggest(&analysis, formulation.selected_names()) {
//!         println!("-> {}", suggestion.message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Known Irregularity
//!
//! Nutrient totals are the protein-weighted nutrient percentage of the mix
//! multiplied by the herd's daily feed (intake per animal times herd size).
//! They therefore grow with the herd and are not bounded to 0-100. The stage
//! thresholds used by the analysis are compared against these scaled values.

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod formulation;
pub mod nutrient;
pub mod prelude;
pub mod report;
pub mod stage;

#[cfg(feature = "python-bindings")]
mod python;

use crate::nutrient::Nutrient;
use thiserror::Error;

/// Errors that can occur while turning a selection into a formulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulationError {
    #[error("Required field '{0}' is missing from the request")]
    MissingField(&'static str),

    #[error("Ingredient '{0}' was not found in the catalog")]
    UnknownIngredient(String),

    #[error("Unknown growth stage '{0}', expected one of: starter, grower, finisher")]
    UnknownStage(String),

    #[error("Herd size must be a positive whole number, got {0}")]
    InvalidHerdSize(i64),

    #[error("Herd size {0} exceeds the largest supported herd of {max}", max = u32::MAX)]
    HerdSizeOutOfRange(i64),

    #[error("Total crude protein of the selected ingredients is zero or not finite, cannot derive proportions")]
    DivisionByZero,
}

/// Errors that can occur when building or loading an ingredient catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to read catalog file: {0}")]
    Io(String),

    #[error("Catalog contains an ingredient with an empty name")]
    EmptyName,

    #[error("Ingredient '{0}' is defined more than once")]
    DuplicateIngredient(String),

    #[error("Ingredient '{ingredient}' has an invalid {nutrient} value: {value}")]
    InvalidNutrient {
        ingredient: String,
        nutrient: Nutrient,
        value: f64,
    },

    #[error("Ingredient '{ingredient}' has an inclusion rate outside 0-100%: {value}")]
    InvalidInclusionRate { ingredient: String, value: f64 },

    #[error("Invalid catalog data: {0}")]
    ValidationError(String),
}

use crate::error::{CatalogError, FormulationError};
use crate::nutrient::Nutrient;
use ahash::AHashMap;
use std::fs;
use std::path::Path;

mod builtin;
pub mod conversion;
pub mod ingredient;

pub use conversion::*;
pub use ingredient::*;

/// An immutable, name-indexed set of feed ingredients.
///
/// Ingredient order is preserved for listing; lookups go through the name
/// index. Names are matched exactly.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    index: AHashMap<String, usize>,
}

impl Catalog {
    /// The built-in catalog, loaded once per process.
    pub fn builtin() -> &'static Catalog {
        builtin::builtin()
    }

    /// Builds a catalog after validating every entry.
    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> Result<Self, CatalogError> {
        let mut index = AHashMap::with_capacity(ingredients.len());
        for (position, ingredient) in ingredients.iter().enumerate() {
            validate_ingredient(ingredient)?;
            if index.insert(ingredient.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateIngredient(ingredient.name.clone()));
            }
        }
        tracing::debug!(count = ingredients.len(), "catalog built");
        Ok(Self { ingredients, index })
    }

    /// Builds a catalog from data known to be valid.
    pub(crate) fn from_trusted(ingredients: Vec<Ingredient>) -> Self {
        let index = ingredients
            .iter()
            .enumerate()
            .map(|(position, ingredient)| (ingredient.name.clone(), position))
            .collect();
        Self { ingredients, index }
    }

    /// Parses a catalog from the JSON format described by [`CatalogFile`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        file.into_catalog()
    }

    /// Loads a JSON catalog from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("'{}': {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.index.get(name).map(|&position| &self.ingredients[position])
    }

    /// Like [`Catalog::get`], but a miss becomes `UnknownIngredient`.
    pub fn resolve(&self, name: &str) -> Result<&Ingredient, FormulationError> {
        self.get(name)
            .ok_or_else(|| FormulationError::UnknownIngredient(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

fn validate_ingredient(ingredient: &Ingredient) -> Result<(), CatalogError> {
    if ingredient.name.trim().is_empty() {
        return Err(CatalogError::EmptyName);
    }

    // Nutrients are percentages by mass.
    for nutrient in Nutrient::ALL {
        let value = ingredient.nutrients[nutrient];
        if !(0.0..=100.0).contains(&value) {
            return Err(CatalogError::InvalidNutrient {
                ingredient: ingredient.name.clone(),
                nutrient,
                value,
            });
        }
    }

    if let Some(pct) = ingredient.max_inclusion_rate.percent() {
        if !(0.0..=100.0).contains(&pct) {
            return Err(CatalogError::InvalidInclusionRate {
                ingredient: ingredient.name.clone(),
                value: pct,
            });
        }
    }

    Ok(())
}

use super::{Catalog, Ingredient};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// A trait for custom data models that can be converted into a feedmix `Catalog`.
///
/// Implement this on your own structs (a spreadsheet export, a database row
/// set, a regional feed table) to hand the engine an ingredient list in its
/// canonical form.
///
/// # Example
///
/// ```rust,no_run
/// use feedmix::catalog::{Catalog, InclusionRate, Ingredient, IntoCatalog};
/// use feedmix::error::CatalogError;
/// use feedmix::nutrient::NutrientProfile;
///
/// struct FeedRow { name: String, protein: f64 }
/// struct FeedSheet { rows: Vec<FeedRow> }
///
/// impl IntoCatalog for FeedSheet {
///     fn into_catalog(self) -> Result<Catalog, CatalogError> {
///         let ingredients = self
///             .rows
///             .into_iter()
///             .map(|row| {
///                 let mut nutrients = NutrientProfile::default();
///                 nutrients.crude_protein = row.protein;
///                 Ingredient::new(row.name, nutrients, InclusionRate::Uncapped)
///             })
///             .collect();
///         Catalog::from_ingredients(ingredients)
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into a validated catalog.
    fn into_catalog(self) -> Result<Catalog, CatalogError>;
}

impl IntoCatalog for Vec<Ingredient> {
    fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::from_ingredients(self)
    }
}

/// JSON catalog file format.
///
/// ```json
/// { "ingredients": [
///     { "name": "Rice Bran",
///       "nutrients": { "crudeProtein": 12.0, "crudeFiber": 11.0, "crudeFat": 13.0,
///                      "calcium": 0.07, "moisture": 10.0, "phosphorus": 1.5 },
///       "maxInclusionRate": 30.0 }
/// ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub ingredients: Vec<Ingredient>,
}

impl IntoCatalog for CatalogFile {
    fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::from_ingredients(self.ingredients)
    }
}

impl From<&Catalog> for CatalogFile {
    fn from(catalog: &Catalog) -> Self {
        Self {
            ingredients: catalog.iter().cloned().collect(),
        }
    }
}

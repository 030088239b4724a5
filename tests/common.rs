//! Common test utilities for building selections, catalogs and payloads.
use feedmix::prelude::*;

/// The three-ingredient forage mix used across the tests.
#[allow(dead_code)]
pub const FORAGE_MIX: [&str; 3] = ["Coconut Residue", "Water Spinach", "Cassava Leaves"];

/// A richer mix with meals and an energy feed.
#[allow(dead_code)]
pub const MEAL_MIX: [&str; 4] = ["Rice Bran", "Yellow Corn", "Soybean Meal", "Fish Meal"];

/// Formulates against the built-in catalog and standard requirements.
#[allow(dead_code)]
pub fn formulate(names: &[&str], stage: Stage, herd_size: u32) -> Formulation {
    Formulator::default()
        .formulate_selection(names.iter().copied(), stage, herd_size)
        .expect("formulation should succeed")
}

/// Shorthand for building an ingredient from its six nutrient values.
#[allow(dead_code)]
pub fn ingredient(name: &str, nutrients: [f64; 6], cap: Option<f64>) -> Ingredient {
    Ingredient::new(
        name,
        NutrientProfile::new(
            nutrients[0],
            nutrients[1],
            nutrients[2],
            nutrients[3],
            nutrients[4],
            nutrients[5],
        ),
        InclusionRate::from(cap),
    )
}

/// A small custom catalog with easy-to-check numbers.
///
/// `Alpha` and `Beta` have crude protein 10 and 30, so they split a ration
/// 25% / 75%. `Husk` has no crude protein at all.
#[allow(dead_code)]
pub fn create_simple_catalog() -> Catalog {
    Catalog::from_ingredients(vec![
        ingredient("Alpha", [10.0, 4.0, 2.0, 1.0, 20.0, 0.5], Some(50.0)),
        ingredient("Beta", [30.0, 8.0, 6.0, 3.0, 60.0, 1.5], None),
        ingredient("Husk", [0.0, 40.0, 1.0, 0.1, 8.0, 0.1], Some(5.0)),
    ])
    .expect("simple catalog should be valid")
}

#[allow(dead_code)]
pub const SIMPLE_CATALOG_JSON: &str = r#"{
    "ingredients": [
        {
            "name": "Rice Bran",
            "nutrients": {
                "crudeProtein": 12.0, "crudeFiber": 11.0, "crudeFat": 13.0,
                "calcium": 0.07, "moisture": 10.0, "phosphorus": 1.5
            },
            "maxInclusionRate": 30.0
        },
        {
            "name": "Kitchen Leftovers",
            "nutrients": {
                "crudeProtein": 4.0, "crudeFiber": 1.5, "crudeFat": 3.0,
                "calcium": 0.2, "moisture": 70.0, "phosphorus": 0.1
            },
            "maxInclusionRate": null
        },
        {
            "name": "Snail Meat",
            "nutrients": {
                "crudeProtein": 11.0, "crudeFiber": 0.5, "crudeFat": 1.0,
                "calcium": 1.2, "moisture": 80.0, "phosphorus": 0.2
            }
        }
    ]
}"#;

#[allow(dead_code)]
pub const MISSING_HERD_SIZE_JSON: &str = r#"{
    "ingredients": ["Coconut Residue", "Water Spinach"],
    "stage": "starter"
}"#;

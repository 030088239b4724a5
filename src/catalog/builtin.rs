//! The built-in catalog of locally available swine feed ingredients.
//!
//! Values are percentages by mass on an as-fed basis, in the order crude
//! protein, crude fiber, crude fat, calcium, moisture, phosphorus.

use super::{Catalog, InclusionRate, Ingredient};
use crate::nutrient::NutrientProfile;
use std::sync::LazyLock;

type Row = (&'static str, [f64; 6], Option<f64>);

#[rustfmt::skip]
const BUILTIN_ROWS: &[Row] = &[
    // Forages and wet by-products
    ("Coconut Residue",    [3.0,  8.5, 12.0,  0.05, 50.0, 0.10], Some(20.0)),
    ("Water Spinach",      [2.7,  1.2,  0.3,  0.07, 90.0, 0.05], Some(15.0)),
    ("Cassava Leaves",     [5.0,  4.5,  1.2,  0.30, 75.0, 0.07], Some(10.0)),
    ("Sweet Potato Tops",  [3.2,  2.5,  0.6,  0.20, 85.0, 0.05], Some(15.0)),
    ("Banana Stalk",       [0.8,  3.0,  0.2,  0.06, 92.0, 0.03], Some(10.0)),
    ("Malunggay Leaves",   [6.7,  1.9,  1.7,  0.44, 75.0, 0.07], Some(10.0)),
    ("Ipil-ipil Leaves",   [7.5,  6.0,  1.8,  0.60, 70.0, 0.06], Some(5.0)),
    ("Azolla",             [1.5,  1.0,  0.3,  0.10, 93.0, 0.02], Some(15.0)),
    ("Cassava Tuber",      [1.2,  1.0,  0.3,  0.03, 65.0, 0.04], Some(40.0)),
    // Energy feeds
    ("Rice Bran",          [12.0, 11.0, 13.0, 0.07, 10.0, 1.50], Some(30.0)),
    ("Yellow Corn",        [8.5,  2.2,  3.8,  0.02, 13.0, 0.28], None),
    // Protein meals
    ("Copra Meal",         [20.0, 12.0, 8.0,  0.20, 10.0, 0.60], Some(25.0)),
    ("Soybean Meal",       [44.0, 6.0,  1.5,  0.30, 11.0, 0.65], Some(30.0)),
    ("Fish Meal",          [55.0, 1.0,  8.0,  5.00, 10.0, 3.00], Some(10.0)),
    // Minerals
    ("Shell Meal",         [0.5,  0.0,  0.0,  36.0, 2.0,  0.10], Some(3.0)),
    ("Bone Meal",          [12.0, 2.0,  3.0,  24.0, 5.0,  12.0], Some(3.0)),
];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let ingredients = BUILTIN_ROWS
        .iter()
        .map(|(name, n, cap)| {
            Ingredient::new(
                *name,
                NutrientProfile::new(n[0], n[1], n[2], n[3], n[4], n[5]),
                InclusionRate::from(*cap),
            )
        })
        .collect();
    Catalog::from_trusted(ingredients)
});

pub(super) fn builtin() -> &'static Catalog {
    &BUILTIN
}

//! The six feed nutrients tracked by the engine and the profile type that
//! carries one value per nutrient.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};

/// A feed nutrient, measured as a percentage by mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    CrudeProtein,
    CrudeFiber,
    CrudeFat,
    Calcium,
    Moisture,
    Phosphorus,
}

impl Nutrient {
    /// All nutrients in canonical report order.
    pub const ALL: [Nutrient; 6] = [
        Nutrient::CrudeProtein,
        Nutrient::CrudeFiber,
        Nutrient::CrudeFat,
        Nutrient::Calcium,
        Nutrient::Moisture,
        Nutrient::Phosphorus,
    ];

    /// The camelCase key used in JSON payloads and catalog files.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::CrudeProtein => "crudeProtein",
            Nutrient::CrudeFiber => "crudeFiber",
            Nutrient::CrudeFat => "crudeFat",
            Nutrient::Calcium => "calcium",
            Nutrient::Moisture => "moisture",
            Nutrient::Phosphorus => "phosphorus",
        }
    }

    /// Human-readable label, sentence case.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::CrudeProtein => "Crude protein",
            Nutrient::CrudeFiber => "Crude fiber",
            Nutrient::CrudeFat => "Crude fat",
            Nutrient::Calcium => "Calcium",
            Nutrient::Moisture => "Moisture",
            Nutrient::Phosphorus => "Phosphorus",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One value per nutrient.
///
/// Used for an ingredient's composition, for the aggregated totals of a
/// formulation and for the requirement thresholds of a growth stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProfile {
    pub crude_protein: f64,
    pub crude_fiber: f64,
    pub crude_fat: f64,
    pub calcium: f64,
    pub moisture: f64,
    pub phosphorus: f64,
}

/// Aggregated nutrient values of a formulation.
pub type NutrientTotals = NutrientProfile;

/// Per-nutrient minimums recommended for a growth stage.
pub type NutrientRequirements = NutrientProfile;

impl NutrientProfile {
    pub fn new(
        crude_protein: f64,
        crude_fiber: f64,
        crude_fat: f64,
        calcium: f64,
        moisture: f64,
        phosphorus: f64,
    ) -> Self {
        Self {
            crude_protein,
            crude_fiber,
            crude_fat,
            calcium,
            moisture,
            phosphorus,
        }
    }

    /// A profile with every nutrient set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self[nutrient]
    }

    /// Scale every nutrient by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        let mut scaled = *self;
        for nutrient in Nutrient::ALL {
            scaled[nutrient] *= factor;
        }
        scaled
    }

    /// Iterate `(nutrient, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(move |n| (n, self[n]))
    }
}

impl Index<Nutrient> for NutrientProfile {
    type Output = f64;

    fn index(&self, nutrient: Nutrient) -> &f64 {
        match nutrient {
            Nutrient::CrudeProtein => &self.crude_protein,
            Nutrient::CrudeFiber => &self.crude_fiber,
            Nutrient::CrudeFat => &self.crude_fat,
            Nutrient::Calcium => &self.calcium,
            Nutrient::Moisture => &self.moisture,
            Nutrient::Phosphorus => &self.phosphorus,
        }
    }
}

impl IndexMut<Nutrient> for NutrientProfile {
    fn index_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::CrudeProtein => &mut self.crude_protein,
            Nutrient::CrudeFiber => &mut self.crude_fiber,
            Nutrient::CrudeFat => &mut self.crude_fat,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Moisture => &mut self.moisture,
            Nutrient::Phosphorus => &mut self.phosphorus,
        }
    }
}

impl Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: NutrientProfile) -> NutrientProfile {
        let mut sum = self;
        for nutrient in Nutrient::ALL {
            sum[nutrient] += other[nutrient];
        }
        sum
    }
}

impl Mul<f64> for NutrientProfile {
    type Output = NutrientProfile;

    fn mul(self, factor: f64) -> NutrientProfile {
        self.scale(factor)
    }
}

impl std::iter::Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientProfile::default(), |acc, p| acc + p)
    }
}

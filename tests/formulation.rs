//! Tests for ingredient allocation and nutrient aggregation.
mod common;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use common::*;
use feedmix::prelude::*;

#[test]
fn test_forage_mix_starter_crude_protein() {
    let formulation = formulate(&FORAGE_MIX, Stage::Starter, 5);
    assert_abs_diff_eq!(formulation.totals.crude_protein, 15.05, epsilon = 0.01);
}

#[test]
fn test_forage_mix_herd_size_changes_crude_protein() {
    let formulation = formulate(&FORAGE_MIX, Stage::Starter, 8);
    assert!((formulation.totals.crude_protein - 15.05).abs() > 0.01);
    assert_abs_diff_eq!(formulation.totals.crude_protein, 24.08, epsilon = 0.01);
}

#[test]
fn test_allocations_sum_to_total_daily_feed() {
    for stage in Stage::ALL {
        for herd_size in [1, 3, 12, 250] {
            let formulation = formulate(&MEAL_MIX, stage, herd_size);
            let intake = RequirementsTable::standard()
                .profile(stage)
                .daily_intake_per_animal();
            let expected = intake * f64::from(herd_size);
            let total: f64 = formulation.allocations.iter().map(|a| a.amount_kg).sum();

            assert_relative_eq!(total, expected, max_relative = 1e-6);
            assert_relative_eq!(formulation.total_daily_feed_kg, expected, max_relative = 1e-6);
        }
    }
}

#[test]
fn test_proportions_sum_to_one() {
    let formulation = formulate(&FORAGE_MIX, Stage::Grower, 4);
    let total: f64 = formulation.allocations.iter().map(|a| a.proportion).sum();
    assert_relative_eq!(total, 1.0, max_relative = 1e-9);
}

#[test]
fn test_allocation_order_matches_selection() {
    let selection = ["Fish Meal", "Rice Bran", "Cassava Leaves"];
    let formulation = formulate(&selection, Stage::Finisher, 2);
    let names: Vec<&str> = formulation.selected_names().collect();
    assert_eq!(names, selection);
}

#[test]
fn test_allocation_is_protein_weighted() {
    let formulator = Formulator::builder(create_simple_catalog()).build();
    let formulation = formulator
        .formulate_selection(["Alpha", "Beta"], Stage::Grower, 2)
        .unwrap();

    // Grower intake is 1.5 kg/day, 3 kg for two animals.
    let alpha = formulation.allocation("Alpha").unwrap();
    let beta = formulation.allocation("Beta").unwrap();
    assert_relative_eq!(alpha.proportion, 0.25);
    assert_relative_eq!(beta.proportion, 0.75);
    assert_relative_eq!(alpha.amount_kg, 0.75);
    assert_relative_eq!(beta.amount_kg, 2.25);

    // (10 * 0.25 + 30 * 0.75) * 1.5 * 2
    assert_relative_eq!(formulation.totals.crude_protein, 75.0);
    // (4 * 0.25 + 8 * 0.75) * 3
    assert_relative_eq!(formulation.totals.crude_fiber, 21.0);
}

#[test]
fn test_doubling_herd_doubles_everything() {
    let single = formulate(&MEAL_MIX, Stage::Grower, 7);
    let double = formulate(&MEAL_MIX, Stage::Grower, 14);

    for (a, b) in single.allocations.iter().zip(&double.allocations) {
        assert_relative_eq!(b.amount_kg, a.amount_kg * 2.0, max_relative = 1e-9);
    }
    for nutrient in Nutrient::ALL {
        assert_relative_eq!(
            double.totals[nutrient],
            single.totals[nutrient] * 2.0,
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_stages_share_proportions_but_differ_in_totals() {
    let starter = formulate(&FORAGE_MIX, Stage::Starter, 5);
    let grower = formulate(&FORAGE_MIX, Stage::Grower, 5);
    let finisher = formulate(&FORAGE_MIX, Stage::Finisher, 5);

    for ((s, g), f) in starter
        .allocations
        .iter()
        .zip(&grower.allocations)
        .zip(&finisher.allocations)
    {
        assert_relative_eq!(s.proportion, g.proportion);
        assert_relative_eq!(g.proportion, f.proportion);
    }

    let cp = [
        starter.totals.crude_protein,
        grower.totals.crude_protein,
        finisher.totals.crude_protein,
    ];
    assert!((cp[0] - cp[1]).abs() > 1e-6);
    assert!((cp[0] - cp[2]).abs() > 1e-6);
    assert!((cp[1] - cp[2]).abs() > 1e-6);
    assert_ne!(starter.totals, grower.totals);
}

#[test]
fn test_unknown_ingredient_fails_without_partial_result() {
    let formulator = Formulator::default();
    let result =
        formulator.formulate_selection(["Coconut Residue", "Moon Dust"], Stage::Starter, 5);
    assert_eq!(
        result,
        Err(FormulationError::UnknownIngredient("Moon Dust".to_string()))
    );
}

#[test]
fn test_unknown_ingredient_reported_even_when_first() {
    let formulator = Formulator::default();
    let result = formulator.formulate_selection(["moon dust", "Fish Meal"], Stage::Grower, 1);
    assert!(matches!(
        result,
        Err(FormulationError::UnknownIngredient(name)) if name == "moon dust"
    ));
}

#[test]
fn test_zero_crude_protein_is_division_by_zero() {
    let formulator = Formulator::builder(create_simple_catalog()).build();
    let result = formulator.formulate_selection(["Husk"], Stage::Starter, 3);
    assert_eq!(result, Err(FormulationError::DivisionByZero));
}

#[test]
fn test_overflowing_crude_protein_never_reaches_allocation() {
    let catalog = Catalog::from_json(
        r#"{ "ingredients": [
            { "name": "Huge A", "nutrients": { "crudeProtein": 1e308, "crudeFiber": 1.0, "crudeFat": 1.0, "calcium": 0.1, "moisture": 10.0, "phosphorus": 0.1 } },
            { "name": "Huge B", "nutrients": { "crudeProtein": 1e308, "crudeFiber": 1.0, "crudeFat": 1.0, "calcium": 0.1, "moisture": 10.0, "phosphorus": 0.1 } }
        ] }"#,
    );
    assert!(matches!(catalog, Err(CatalogError::InvalidNutrient { .. })));
}

#[test]
fn test_full_strength_ingredients_keep_total_mass() {
    let catalog = Catalog::from_ingredients(vec![
        ingredient("Pure A", [100.0, 100.0, 100.0, 100.0, 100.0, 100.0], None),
        ingredient("Pure B", [100.0, 0.0, 0.0, 0.0, 0.0, 0.0], None),
    ])
    .unwrap();
    let formulation = Formulator::builder(catalog)
        .build()
        .formulate_selection(["Pure A", "Pure B"], Stage::Grower, 2)
        .unwrap();

    let total: f64 = formulation.allocations.iter().map(|a| a.amount_kg).sum();
    assert_relative_eq!(total, 3.0, max_relative = 1e-9);
    assert_relative_eq!(formulation.allocations[0].proportion, 0.5);
    assert!(formulation.totals.iter().all(|(_, value)| value.is_finite()));
}

#[test]
fn test_zero_protein_ingredient_gets_no_share() {
    let formulator = Formulator::builder(create_simple_catalog()).build();
    let formulation = formulator
        .formulate_selection(["Husk", "Alpha"], Stage::Starter, 3)
        .unwrap();
    assert_eq!(formulation.allocation("Husk").unwrap().amount_kg, 0.0);
    assert_relative_eq!(formulation.allocation("Alpha").unwrap().proportion, 1.0);
}

#[test]
fn test_inclusion_rate_is_not_enforced() {
    // Fish meal is capped at 10% but is the only protein source here.
    let formulation = formulate(&["Fish Meal", "Banana Stalk"], Stage::Finisher, 1);
    let fish = formulation.allocation("Fish Meal").unwrap();
    assert!(fish.proportion > 0.9);

    let cap = Catalog::builtin()
        .get("Fish Meal")
        .unwrap()
        .max_inclusion_rate;
    assert_eq!(cap, InclusionRate::Capped(10.0));
}

#[test]
fn test_duplicate_selection_is_allocated_per_occurrence() {
    let formulation = formulate(&["Rice Bran", "Rice Bran"], Stage::Grower, 2);
    assert_eq!(formulation.allocations.len(), 2);
    assert_relative_eq!(formulation.allocations[0].proportion, 0.5);
    assert_relative_eq!(formulation.allocations[1].amount_kg, 1.5);
}

#[test]
fn test_empty_selection_is_missing_field() {
    let formulator = Formulator::default();
    let result = formulator.formulate_selection(Vec::<String>::new(), Stage::Starter, 5);
    assert_eq!(result, Err(FormulationError::MissingField("ingredients")));
}

#[test]
fn test_zero_herd_size_is_rejected() {
    let result = FormulationRequest::new(FORAGE_MIX, Stage::Starter, 0);
    assert_eq!(result, Err(FormulationError::InvalidHerdSize(0)));
}

#[test]
fn test_default_formulator_borrows_builtin_tables() {
    let first = Formulator::default();
    let second = Formulator::default();
    assert!(std::ptr::eq(first.catalog(), Catalog::builtin()));
    assert!(std::ptr::eq(first.catalog(), second.catalog()));
    assert!(std::ptr::eq(
        first.requirements_table(),
        RequirementsTable::standard()
    ));

    let custom = Formulator::builtin_builder()
        .with_threshold(Stage::Grower, Nutrient::Calcium, 1.0)
        .build();
    assert!(std::ptr::eq(custom.catalog(), Catalog::builtin()));
    assert!(!std::ptr::eq(
        custom.requirements_table(),
        RequirementsTable::standard()
    ));
    assert_eq!(RequirementsTable::standard().requirements(Stage::Grower).calcium, 16.0);
}

#[test]
fn test_formulator_is_shareable_across_threads() {
    let formulator = std::sync::Arc::new(Formulator::default());
    let handles: Vec<_> = (1..=4u32)
        .map(|herd_size| {
            let formulator = formulator.clone();
            std::thread::spawn(move || {
                formulator
                    .formulate_selection(FORAGE_MIX, Stage::Starter, herd_size)
                    .unwrap()
                    .totals
                    .crude_protein
            })
        })
        .collect();

    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, cp) in results.iter().enumerate() {
        assert_relative_eq!(*cp, results[0] * (i as f64 + 1.0), max_relative = 1e-9);
    }
}

use super::RationReport;
use crate::analysis::{NutrientAnalysis, Suggestion};
use crate::catalog::Catalog;
use crate::formulation::Formulation;
use crate::nutrient::NutrientRequirements;
use crate::stage::Stage;
use std::fmt::Write;

/// Formats formulations and analyses into human-readable text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Allocation table followed by the nutrient totals.
    pub fn format_formulation(formulation: &Formulation) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Ration for {} {} pig(s): {:.2} kg/day",
            formulation.herd_size, formulation.stage, formulation.total_daily_feed_kg
        );
        let _ = writeln!(out, "{:<24} {:>8} {:>10}", "Ingredient", "Share", "Amount");
        let _ = writeln!(out, "{}", "-".repeat(44));
        for allocation in &formulation.allocations {
            let _ = writeln!(
                out,
                "{:<24} {:>7.2}% {:>7.2} kg",
                allocation.ingredient_name,
                allocation.proportion * 100.0,
                allocation.amount_kg
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Nutrient totals:");
        for (nutrient, value) in formulation.totals.iter() {
            let _ = writeln!(out, "  {:<16} {:>10.2}", nutrient.label(), value);
        }
        out
    }

    /// One line per nutrient with the actual value, requirement and status.
    pub fn format_analysis(analysis: &NutrientAnalysis) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Analysis against {} requirements:", analysis.stage);
        let _ = writeln!(
            out,
            "  {:<16} {:>10} {:>10}  {}",
            "Nutrient", "Actual", "Required", "Status"
        );
        for a in &analysis.assessments {
            let _ = writeln!(
                out,
                "  {:<16} {:>10.2} {:>10.2}  {}",
                a.nutrient.label(),
                a.actual,
                a.required,
                a.status
            );
        }
        out
    }

    pub fn format_suggestions(suggestions: &[Suggestion]) -> String {
        if suggestions.is_empty() {
            return "All nutrients meet the stage requirements.\n".to_string();
        }
        let mut out = String::from("Suggestions:\n");
        for suggestion in suggestions {
            let _ = writeln!(out, "  - {}", suggestion.message);
        }
        out
    }

    pub fn format_report(report: &RationReport) -> String {
        format!(
            "{}\n{}\n{}",
            Self::format_formulation(&report.formulation),
            Self::format_analysis(&report.analysis),
            Self::format_suggestions(&report.suggestions)
        )
    }

    pub fn format_recommendations(
        stage: Stage,
        daily_intake: f64,
        requirements: &NutrientRequirements,
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Recommended minimums for {} ({:.2} kg/day per animal):",
            stage, daily_intake
        );
        for (nutrient, value) in requirements.iter() {
            let _ = writeln!(out, "  {:<16} {:>6.2}%", nutrient.label(), value);
        }
        out
    }

    pub fn format_catalog(catalog: &Catalog) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<20} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>9}",
            "Ingredient", "CP", "CF", "Fat", "Ca", "H2O", "P", "Max"
        );
        let _ = writeln!(out, "{}", "-".repeat(72));
        for ingredient in catalog.iter() {
            let n = &ingredient.nutrients;
            let _ = writeln!(
                out,
                "{:<20} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>9}",
                ingredient.name,
                n.crude_protein,
                n.crude_fiber,
                n.crude_fat,
                n.calcium,
                n.moisture,
                n.phosphorus,
                ingredient.max_inclusion_rate.to_string()
            );
        }
        out
    }
}

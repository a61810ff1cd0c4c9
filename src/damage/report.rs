use serde::Serialize;

use super::{DamageQuery, DamageValue, HazardDamage};
use crate::hazard::DAMAGE_AXIS;
use crate::report_helpers;

const NOT_FOUND: &str = "not found";

fn format_damage(value: DamageValue, precision: usize) -> String {
    match value {
        DamageValue::Value(v) => format!("{v:.precision$}"),
        DamageValue::NotFound => NOT_FOUND.to_string(),
    }
}

pub fn print_report(results: &[HazardDamage], precision: usize) {
    for (i, entry) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let hazard = entry.hazard;
        match &entry.result {
            DamageQuery::Invalid(err) => {
                println!("{}: {err}", hazard.title());
            }
            DamageQuery::Rows { intensity, rows } => {
                let heading = hazard.category_heading();
                let label_width =
                    report_helpers::max_label_width(rows.iter().map(|r| r.label.as_str()), heading);
                let separator = report_helpers::separator((label_width + DAMAGE_AXIS.len() + 4).max(40));

                println!("{} at {} = {intensity}", hazard.title(), hazard.intensity_axis());
                println!("{separator}");
                println!(
                    " {}  {:>w$}",
                    report_helpers::pad(heading, label_width),
                    DAMAGE_AXIS,
                    w = DAMAGE_AXIS.len()
                );
                println!("{separator}");
                for row in rows {
                    println!(
                        " {}  {:>w$}",
                        report_helpers::pad(&row.label, label_width),
                        format_damage(row.damage, precision),
                        w = DAMAGE_AXIS.len()
                    );
                }
                println!("{separator}");
            }
        }
    }
}

#[derive(Serialize)]
struct JsonRow<'a> {
    category: &'a str,
    label: &'a str,
    /// `null` when the category has no curve data.
    damage: Option<f64>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonEntry<'a> {
    Invalid {
        hazard: &'static str,
        error: &'static str,
        input: &'a str,
    },
    Rows {
        hazard: &'static str,
        intensity: f64,
        rows: Vec<JsonRow<'a>>,
    },
}

fn json_entries(results: &[HazardDamage]) -> Vec<JsonEntry<'_>> {
    results
        .iter()
        .map(|entry| match &entry.result {
            DamageQuery::Invalid(err) => JsonEntry::Invalid {
                hazard: entry.hazard.as_str(),
                error: "invalid intensity",
                input: &err.input,
            },
            DamageQuery::Rows { intensity, rows } => JsonEntry::Rows {
                hazard: entry.hazard.as_str(),
                intensity: *intensity,
                rows: rows
                    .iter()
                    .map(|r| JsonRow {
                        category: &r.category,
                        label: &r.label,
                        damage: r.damage.as_f64(),
                    })
                    .collect(),
            },
        })
        .collect()
}

pub fn print_json(results: &[HazardDamage]) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&json_entries(results))
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

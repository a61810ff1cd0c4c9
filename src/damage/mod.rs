//! Damage-ratio lookup for every category of a hazard at one intensity.

mod report;

use std::error::Error;

use tracing::debug;

use crate::config::Settings;
use crate::error::InvalidQueryInput;
use crate::hazard::Hazard;
use crate::store::CurveStore;
use report::{print_json, print_report};

/// Damage for one category, or the fact that its curve has no data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageValue {
    Value(f64),
    NotFound,
}

impl DamageValue {
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotFound => None,
        }
    }
}

/// One row of a batch query.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageRow {
    pub category: String,
    pub label: String,
    pub damage: DamageValue,
}

/// Result of a free-text damage query for one hazard.
#[derive(Debug, Clone, PartialEq)]
pub enum DamageQuery {
    /// The intensity text was not a number; no category was evaluated.
    Invalid(InvalidQueryInput),
    Rows { intensity: f64, rows: Vec<DamageRow> },
}

/// Parse user-entered intensity text.
pub fn parse_intensity(text: &str) -> Result<f64, InvalidQueryInput> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .ok_or_else(|| InvalidQueryInput {
            input: text.to_string(),
        })
}

/// Damage at intensity `x` for every category of `hazard`, in category order.
pub fn batch_damage_at(store: &CurveStore, hazard: Hazard, x: f64) -> Vec<DamageRow> {
    store
        .series(hazard)
        .into_iter()
        .map(|s| DamageRow {
            category: s.category.to_string(),
            damage: match s.curve.damage_at(x) {
                Some(v) => DamageValue::Value(v),
                None => DamageValue::NotFound,
            },
            label: s.label,
        })
        .collect()
}

pub fn query(store: &CurveStore, hazard: Hazard, text: &str) -> DamageQuery {
    match parse_intensity(text) {
        Ok(intensity) => DamageQuery::Rows {
            intensity,
            rows: batch_damage_at(store, hazard, intensity),
        },
        Err(invalid) => DamageQuery::Invalid(invalid),
    }
}

/// One hazard's query, tagged for reporting.
pub struct HazardDamage {
    pub hazard: Hazard,
    pub result: DamageQuery,
}

pub fn run(
    store: &CurveStore,
    hazards: &[Hazard],
    intensity: &str,
    settings: &Settings,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let results: Vec<HazardDamage> = hazards
        .iter()
        .map(|&hazard| {
            let result = query(store, hazard, intensity);
            debug!(%hazard, input = intensity, "damage query");
            HazardDamage { hazard, result }
        })
        .collect();

    if json {
        print_json(&results)?;
    } else {
        print_report(&results, settings.precision);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

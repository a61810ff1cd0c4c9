//! Curve storage: the validated, immutable set of curves for every hazard.

mod raw;

use std::collections::HashMap;

use tracing::debug;

use crate::curve::Curve;
use crate::error::DataFormatError;
use crate::hazard::{CategoryPolicy, Hazard};

/// Curves for one hazard, categories in provider order.
#[derive(Debug, Clone, Default)]
struct HazardCurves {
    order: Vec<String>,
    curves: HashMap<String, Curve>,
}

/// All curves for all hazards. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct CurveStore {
    hazards: HashMap<Hazard, HazardCurves>,
}

/// A category's curve together with its display label.
pub struct Series<'a> {
    pub category: &'a str,
    pub label: String,
    pub curve: &'a Curve,
}

static EMPTY: Curve = Curve::EMPTY;

impl CurveStore {
    /// Validate and organize raw provider data.
    ///
    /// Expects `{ hazard_key: { category: { "x": [..], "y": [..] } } }`.
    /// Absent hazards and categories are fine and read back as empty curves.
    pub fn load(raw: &serde_json::Value) -> Result<Self, DataFormatError> {
        let parsed = raw::parse(raw)?;
        let mut hazards = HashMap::new();
        for (hazard, categories) in parsed {
            let mut entry = HazardCurves::default();
            for (category, samples) in categories {
                entry.order.push(category.clone());
                entry.curves.insert(category, Curve::from_samples(samples));
            }
            debug!(
                hazard = hazard.as_str(),
                categories = entry.order.len(),
                "loaded curves"
            );
            hazards.insert(hazard, entry);
        }
        Ok(Self { hazards })
    }

    /// Categories relevant to `hazard`, in display order.
    ///
    /// Flood returns whatever floors the data holds; every other hazard
    /// returns the fixed taxonomy list even when some curves are missing.
    pub fn categories_for(&self, hazard: Hazard) -> Vec<&str> {
        match hazard.category_policy() {
            CategoryPolicy::Fixed(list) => list.to_vec(),
            CategoryPolicy::FromData => self
                .hazards
                .get(&hazard)
                .map(|h| h.order.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }

    /// Curve for one category; empty when the data has none.
    pub fn curve_for(&self, hazard: Hazard, category: &str) -> &Curve {
        self.hazards
            .get(&hazard)
            .and_then(|h| h.curves.get(category))
            .unwrap_or(&EMPTY)
    }

    /// Highest intensity sampled by any of the hazard's categories, 0 if none.
    pub fn max_intensity(&self, hazard: Hazard) -> f64 {
        self.categories_for(hazard)
            .into_iter()
            .filter_map(|c| self.curve_for(hazard, c).max_intensity())
            .fold(None, |acc: Option<f64>, x| Some(acc.map_or(x, |m| m.max(x))))
            .unwrap_or(0.0)
    }

    /// Every category of `hazard` with its label and curve, in display order.
    pub fn series(&self, hazard: Hazard) -> Vec<Series<'_>> {
        self.categories_for(hazard)
            .into_iter()
            .map(|category| Series {
                category,
                label: hazard.category_label(category),
                curve: self.curve_for(hazard, category),
            })
            .collect()
    }

    /// Total number of samples across the hazard's categories.
    pub fn sample_count(&self, hazard: Hazard) -> usize {
        self.categories_for(hazard)
            .into_iter()
            .map(|c| self.curve_for(hazard, c).len())
            .sum()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

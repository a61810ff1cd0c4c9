//! Nearest-sample lookup for point inspection on a hazard's chart.
//!
//! Distance is measured on the intensity axis only: the caller is locating
//! the curve point under a horizontal cursor position, not the closest point
//! in the plane.

mod report;
mod scale;

use std::error::Error;

use serde::Serialize;

use crate::config::Settings;
use crate::curve::Sample;
use crate::hazard::Hazard;
use crate::store::CurveStore;
use report::{print_json, print_report};

pub use scale::LinearScale;

/// The sample closest to a queried intensity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestPoint {
    pub category: String,
    pub label: String,
    pub sample: Sample,
    /// `|sample.intensity - query|`.
    pub distance: f64,
}

/// Closest sample to `query_x` across all of the hazard's categories.
///
/// On ties the first sample wins, scanning categories in display order and
/// samples in curve order. `None` when the hazard has no samples at all, or
/// when `query_x` is NaN.
pub fn nearest(store: &CurveStore, hazard: Hazard, query_x: f64) -> Option<NearestPoint> {
    if query_x.is_nan() {
        return None;
    }
    let mut best: Option<NearestPoint> = None;
    for series in store.series(hazard) {
        for sample in series.curve.samples() {
            let distance = (sample.intensity - query_x).abs();
            if best.as_ref().is_some_and(|b| distance >= b.distance) {
                continue;
            }
            best = Some(NearestPoint {
                category: series.category.to_string(),
                label: series.label.clone(),
                sample: *sample,
                distance,
            });
        }
    }
    best
}

/// Map a pixel on the chart's intensity axis to data space, then look up the
/// nearest sample.
pub fn nearest_to_pixel(
    store: &CurveStore,
    hazard: Hazard,
    scale: &LinearScale,
    px: f64,
) -> Option<NearestPoint> {
    nearest(store, hazard, scale.value_for_pixel(px))
}

/// Where the query came from, for the report.
#[derive(Debug, Clone, Copy)]
pub enum Probe {
    Intensity(f64),
    Pixel { px: f64, width: f64 },
}

pub fn run(
    store: &CurveStore,
    hazard: Hazard,
    probe: Probe,
    settings: &Settings,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let (query_x, found, marker_px) = match probe {
        Probe::Intensity(x) => {
            if !x.is_finite() {
                return Err(format!("--x must be a finite number, got {x}").into());
            }
            (x, nearest(store, hazard, x), None)
        }
        Probe::Pixel { px, width } => {
            if !px.is_finite() {
                return Err(format!("--pixel must be a finite number, got {px}").into());
            }
            if !(width > 0.0) || !width.is_finite() {
                return Err("--width must be greater than 0".into());
            }
            let scale = LinearScale::intensity_axis(store, hazard, width);
            let found = nearest_to_pixel(store, hazard, &scale, px);
            let marker = found
                .as_ref()
                .map(|p| scale.pixel_for_value(p.sample.intensity));
            (scale.value_for_pixel(px), found, marker)
        }
    };

    if json {
        print_json(hazard, query_x, found.as_ref(), marker_px)?;
    } else {
        print_report(hazard, query_x, found.as_ref(), marker_px, settings.precision);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

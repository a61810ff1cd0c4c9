//! Chart-ready view of the loaded curves: per hazard, the axis domain and
//! every category's series.

mod report;

use std::error::Error;

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::hazard::Hazard;
use crate::store::{CurveStore, Series};
use report::{print_json, print_report};

/// Everything a chart needs for one hazard.
pub struct HazardView<'a> {
    pub hazard: Hazard,
    /// Upper bound of the intensity axis; the axis always starts at 0.
    pub max_intensity: f64,
    pub total_samples: usize,
    pub series: Vec<Series<'a>>,
}

pub fn hazard_view(store: &CurveStore, hazard: Hazard) -> HazardView<'_> {
    HazardView {
        hazard,
        max_intensity: store.max_intensity(hazard),
        total_samples: store.sample_count(hazard),
        series: store.series(hazard),
    }
}

/// Where the data came from and when.
pub struct Origin<'a> {
    pub source: &'a str,
    pub loaded_at: DateTime<Utc>,
}

pub fn run(
    store: &CurveStore,
    origin: Origin<'_>,
    hazards: &[Hazard],
    points: bool,
    settings: &Settings,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let views: Vec<HazardView<'_>> = hazards.iter().map(|&h| hazard_view(store, h)).collect();

    if json {
        print_json(&views, &origin, points)?;
    } else {
        print_report(&views, &origin, points, settings.precision);
    }
    Ok(())
}

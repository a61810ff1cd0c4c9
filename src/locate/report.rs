use serde::Serialize;

use super::NearestPoint;
use crate::hazard::{DAMAGE_AXIS, Hazard};
use crate::report_helpers;

pub fn print_report(
    hazard: Hazard,
    query_x: f64,
    found: Option<&NearestPoint>,
    marker_px: Option<f64>,
    precision: usize,
) {
    let Some(point) = found else {
        println!("{}: no curve samples.", hazard.title());
        return;
    };

    let axis = hazard.intensity_axis();
    let width = axis.len().max(DAMAGE_AXIS.len());
    let separator = report_helpers::separator((width + 24).max(40));

    println!("{}: nearest sample to {query_x:.precision$}", hazard.title());
    println!("{separator}");
    println!(" {:<width$}  {}", hazard.category_heading(), point.label);
    println!(" {:<width$}  {}", axis, point.sample.intensity);
    println!(
        " {:<width$}  {:.precision$}",
        DAMAGE_AXIS, point.sample.damage
    );
    if let Some(px) = marker_px {
        println!(" {:<width$}  {px:.1}", "Chart x (px)");
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonNearest<'a> {
    hazard: &'static str,
    query: f64,
    /// `null` when the hazard has no samples.
    nearest: Option<&'a NearestPoint>,
    /// Pixel position of the nearest sample, for pixel queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pixel: Option<f64>,
}

pub fn print_json(
    hazard: Hazard,
    query_x: f64,
    found: Option<&NearestPoint>,
    marker_px: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&JsonNearest {
        hazard: hazard.as_str(),
        query: query_x,
        nearest: found,
        pixel: marker_px,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Sample;

    fn sample_point() -> NearestPoint {
        NearestPoint {
            category: "mur".to_string(),
            label: "MUR".to_string(),
            sample: Sample::new(7.0, 0.18),
            distance: 0.25,
        }
    }

    #[test]
    fn print_report_does_not_panic() {
        print_report(Hazard::Earthquake, 7.25, Some(&sample_point()), None, 4);
        print_report(Hazard::Earthquake, 7.25, Some(&sample_point()), Some(350.0), 4);
    }

    #[test]
    fn print_report_without_samples() {
        print_report(Hazard::Flood, 1.0, None, None, 4);
    }

    #[test]
    fn print_json_does_not_panic() {
        print_json(Hazard::Earthquake, 7.25, Some(&sample_point()), Some(350.0)).unwrap();
        print_json(Hazard::Flood, 1.0, None, None).unwrap();
    }

    #[test]
    fn json_structure_is_valid() {
        let point = sample_point();
        let entry = JsonNearest {
            hazard: Hazard::Earthquake.as_str(),
            query: 7.25,
            nearest: Some(&point),
            pixel: None,
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
        assert_eq!(parsed["hazard"], "earthquake");
        assert_eq!(parsed["nearest"]["label"], "MUR");
        assert_eq!(parsed["nearest"]["sample"]["intensity"], 7.0);
        assert_eq!(parsed["nearest"]["sample"]["damage"], 0.18);
        assert_eq!(parsed["nearest"]["distance"], 0.25);
        assert!(parsed.get("pixel").is_none());
    }
}

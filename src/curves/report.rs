use serde::Serialize;

use super::{HazardView, Origin};
use crate::curve::Sample;
use crate::hazard::DAMAGE_AXIS;
use crate::report_helpers;

pub fn print_report(views: &[HazardView<'_>], origin: &Origin<'_>, points: bool, precision: usize) {
    println!("Curves from {}", origin.source);

    for view in views {
        let hazard = view.hazard;
        let heading = hazard.category_heading();
        let label_width =
            report_helpers::max_label_width(view.series.iter().map(|s| s.label.as_str()), heading);
        let separator = report_helpers::separator((label_width + 30).max(48));

        println!();
        println!(
            "{}  {} [0, {}] x {DAMAGE_AXIS} [0, 1]",
            hazard.title(),
            hazard.intensity_axis(),
            view.max_intensity
        );
        println!("{separator}");
        println!(
            " {}  {:>7}  {:>16}",
            report_helpers::pad(heading, label_width),
            "Samples",
            "Intensity range"
        );
        println!("{separator}");

        for series in &view.series {
            let samples = series.curve.samples();
            let range = match (samples.first(), samples.last()) {
                (Some(lo), Some(hi)) => format!("{}..{}", lo.intensity, hi.intensity),
                _ => "no data".to_string(),
            };
            println!(
                " {}  {:>7}  {:>16}",
                report_helpers::pad(&series.label, label_width),
                samples.len(),
                range
            );
            if points && !series.curve.is_empty() {
                for s in samples {
                    println!(
                        "   {:>w$}  {:>12}  {:.precision$}",
                        "",
                        s.intensity,
                        s.damage,
                        w = label_width
                    );
                }
            }
        }
        println!("{separator}");
        println!(
            " {}  {:>7}",
            report_helpers::pad("Total", label_width),
            view.total_samples
        );
    }
}

#[derive(Serialize)]
struct JsonSeries<'a> {
    category: &'a str,
    label: &'a str,
    samples: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<&'a [Sample]>,
}

#[derive(Serialize)]
struct JsonHazard<'a> {
    hazard: &'static str,
    title: &'static str,
    intensity_axis: &'static str,
    domain: [f64; 2],
    range: [f64; 2],
    samples: usize,
    series: Vec<JsonSeries<'a>>,
}

#[derive(Serialize)]
struct JsonCurves<'a> {
    source: &'a str,
    loaded_at: String,
    hazards: Vec<JsonHazard<'a>>,
}

fn json_curves<'a>(views: &'a [HazardView<'a>], origin: &'a Origin<'a>, points: bool) -> JsonCurves<'a> {
    JsonCurves {
        source: origin.source,
        loaded_at: origin.loaded_at.to_rfc3339(),
        hazards: views
            .iter()
            .map(|v| JsonHazard {
                hazard: v.hazard.as_str(),
                title: v.hazard.title(),
                intensity_axis: v.hazard.intensity_axis(),
                domain: [0.0, v.max_intensity],
                range: [0.0, 1.0],
                samples: v.total_samples,
                series: v
                    .series
                    .iter()
                    .map(|s| JsonSeries {
                        category: s.category,
                        label: &s.label,
                        samples: s.curve.len(),
                        points: points.then(|| s.curve.samples()),
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn print_json(
    views: &[HazardView<'_>],
    origin: &Origin<'_>,
    points: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&json_curves(views, origin, points))
}

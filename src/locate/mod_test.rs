use super::*;
use serde_json::json;

fn quake_store() -> CurveStore {
    CurveStore::load(&json!({
        "gempa": {
            "cr": { "x": [6, 8], "y": [0.1, 0.3] },
            "lightwood": { "x": [5, 7, 9], "y": [0.0, 0.2, 0.6] },
            "mur": { "x": [6, 10], "y": [0.2, 0.9] }
        }
    }))
    .unwrap()
}

#[test]
fn finds_closest_intensity() {
    let store = quake_store();
    let hit = nearest(&store, Hazard::Earthquake, 9.8).unwrap();
    assert_eq!(hit.category, "mur");
    assert_eq!(hit.label, "MUR");
    assert_eq!(hit.sample, Sample::new(10.0, 0.9));
    assert!((hit.distance - 0.2).abs() < 1e-12);
}

#[test]
fn ignores_damage_axis() {
    // Only intensity distance counts, whatever the damage values are.
    let store = quake_store();
    let hit = nearest(&store, Hazard::Earthquake, 7.1).unwrap();
    assert_eq!(hit.category, "lightwood");
    assert_eq!(hit.sample.intensity, 7.0);
}

#[test]
fn ties_go_to_first_category_in_display_order() {
    // mur and cr both sit at 6; mur wins because it precedes cr in the
    // fixed order, even though cr appears first in the data.
    let store = quake_store();
    let hit = nearest(&store, Hazard::Earthquake, 6.0).unwrap();
    assert_eq!(hit.category, "mur");
    assert_eq!(hit.distance, 0.0);

    let hit = nearest(&store, Hazard::Earthquake, 8.0).unwrap();
    assert_eq!(hit.category, "cr");

    // 5.5: lightwood@5 and mur@6 / cr@6 are all 0.5 away.
    let hit = nearest(&store, Hazard::Earthquake, 5.5).unwrap();
    assert_eq!(hit.category, "lightwood");
    assert_eq!(hit.sample.intensity, 5.0);
}

#[test]
fn ties_within_a_category_go_to_first_sample() {
    let store = CurveStore::load(&json!({
        "banjir": { "1.0": { "x": [0, 2, 4], "y": [0, 0.5, 0.9] } }
    }))
    .unwrap();
    let hit = nearest(&store, Hazard::Flood, 3.0).unwrap();
    assert_eq!(hit.sample.intensity, 2.0);
}

#[test]
fn tie_break_is_deterministic() {
    let store = CurveStore::load(&json!({
        "banjir": {
            "2.0": { "x": [1], "y": [0.3] },
            "1.0": { "x": [3], "y": [0.7] }
        }
    }))
    .unwrap();
    for _ in 0..5 {
        let hit = nearest(&store, Hazard::Flood, 2.0).unwrap();
        assert_eq!(hit.category, "2.0");
        assert_eq!(hit.label, "Floor 2");
    }
}

#[test]
fn none_without_samples() {
    let store = CurveStore::load(&json!({
        "banjir": { "1.0": { "x": [], "y": [] } }
    }))
    .unwrap();
    assert_eq!(nearest(&store, Hazard::Flood, 1.0), None);
    assert_eq!(nearest(&store, Hazard::Landslide, 1.0), None);
}

#[test]
fn pixel_lookup_uses_intensity_axis() {
    let store = quake_store();
    // Axis is [0, 10] over 500 px, so 455 px is intensity 9.1.
    let scale = LinearScale::intensity_axis(&store, Hazard::Earthquake, 500.0);
    assert_eq!(scale.max, 10.0);
    let hit = nearest_to_pixel(&store, Hazard::Earthquake, &scale, 455.0).unwrap();
    assert_eq!(hit.category, "lightwood");
    assert_eq!(hit.sample.intensity, 9.0);
}

#[test]
fn run_reports() {
    let store = quake_store();
    let settings = Settings::default();
    run(&store, Hazard::Earthquake, Probe::Intensity(7.0), &settings, false).unwrap();
    run(&store, Hazard::Earthquake, Probe::Intensity(7.0), &settings, true).unwrap();
    run(
        &store,
        Hazard::Earthquake,
        Probe::Pixel {
            px: 120.0,
            width: 600.0,
        },
        &settings,
        false,
    )
    .unwrap();
    run(&store, Hazard::Flood, Probe::Intensity(1.0), &settings, false).unwrap();
}

#[test]
fn run_rejects_zero_width() {
    let store = quake_store();
    let settings = Settings::default();
    let probe = Probe::Pixel { px: 10.0, width: 0.0 };
    assert!(run(&store, Hazard::Earthquake, probe, &settings, false).is_err());
}

#[test]
fn nan_query_finds_nothing() {
    let store = quake_store();
    assert_eq!(nearest(&store, Hazard::Earthquake, f64::NAN), None);

    let scale = LinearScale::intensity_axis(&store, Hazard::Earthquake, 500.0);
    assert_eq!(
        nearest_to_pixel(&store, Hazard::Earthquake, &scale, f64::NAN),
        None
    );
}

#[test]
fn infinite_query_keeps_first_sample() {
    // Every distance is infinite, so the first sample scanned wins.
    let store = quake_store();
    let hit = nearest(&store, Hazard::Earthquake, f64::INFINITY).unwrap();
    assert_eq!(hit.category, "lightwood");
    assert_eq!(hit.sample.intensity, 5.0);
}

#[test]
fn run_rejects_non_finite_query() {
    let store = quake_store();
    let settings = Settings::default();
    for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(run(&store, Hazard::Earthquake, Probe::Intensity(x), &settings, false).is_err());
        let probe = Probe::Pixel { px: x, width: 500.0 };
        assert!(run(&store, Hazard::Earthquake, probe, &settings, true).is_err());
    }
}

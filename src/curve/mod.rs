//! Fragility curves: ordered (intensity, damage) samples for one hazard and
//! category.

mod interpolate;

use serde::Serialize;

pub use interpolate::interpolate;

/// One point on a fragility curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Hazard intensity, in the hazard's own unit (MMI, metres, kPa, ...).
    pub intensity: f64,
    /// Expected damage ratio, conventionally in [0, 1].
    pub damage: f64,
}

impl Sample {
    pub fn new(intensity: f64, damage: f64) -> Self {
        Self { intensity, damage }
    }
}

/// Samples sorted ascending by intensity. May be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    samples: Vec<Sample>,
}

impl Curve {
    pub const EMPTY: Curve = Curve {
        samples: Vec::new(),
    };

    /// Build a curve, sorting samples by intensity.
    ///
    /// The sort is stable, so samples sharing an intensity keep their
    /// original relative order.
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        samples.sort_by(|a, b| a.intensity.total_cmp(&b.intensity));
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Highest intensity on the curve, `None` when empty.
    pub fn max_intensity(&self) -> Option<f64> {
        self.samples.last().map(|s| s.intensity)
    }

    /// Interpolated damage ratio at intensity `x`, `None` when the curve is empty.
    pub fn damage_at(&self, x: f64) -> Option<f64> {
        interpolate(&self.samples, x)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

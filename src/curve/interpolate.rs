//! Piecewise linear interpolation over curve samples.
//!
//! Values at or below the first sample clamp to its damage; values at or above
//! the last clamp to its damage. There is no extrapolation.

use super::Sample;

/// Damage ratio at intensity `x`.
///
/// Returns `None` for an empty slice, or when no consecutive pair of samples
/// brackets `x` (only possible if the samples are not sorted). A pair sharing
/// the same intensity yields the left sample's damage instead of dividing by
/// zero.
pub fn interpolate(samples: &[Sample], x: f64) -> Option<f64> {
    let first = samples.first()?;
    let last = samples.last()?;
    if x <= first.intensity {
        return Some(first.damage);
    }
    if x >= last.intensity {
        return Some(last.damage);
    }
    for w in samples.windows(2) {
        let (lo, hi) = (w[0], w[1]);
        if x >= lo.intensity && x <= hi.intensity {
            return Some(lerp(lo, hi, x));
        }
    }
    None
}

/// Linear blend between two samples. A zero-width pair gives `lo.damage`.
fn lerp(lo: Sample, hi: Sample, x: f64) -> f64 {
    let width = hi.intensity - lo.intensity;
    if width == 0.0 {
        return lo.damage;
    }
    let frac = (x - lo.intensity) / width;
    lo.damage + frac * (hi.damage - lo.damage)
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod tests;

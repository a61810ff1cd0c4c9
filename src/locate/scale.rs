use crate::hazard::Hazard;
use crate::store::CurveStore;

/// Linear mapping between a data range and a pixel span, as used by a
/// chart's x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub start_px: f64,
    pub end_px: f64,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, start_px: f64, end_px: f64) -> Self {
        Self {
            min,
            max,
            start_px,
            end_px,
        }
    }

    /// Intensity axis of a hazard's chart: `[0, max_intensity]` over
    /// `width_px` pixels starting at 0.
    pub fn intensity_axis(store: &CurveStore, hazard: Hazard, width_px: f64) -> Self {
        Self::new(0.0, store.max_intensity(hazard), 0.0, width_px)
    }

    /// Data value under pixel `px`. Pixels outside the span extrapolate
    /// linearly; a zero-width span maps everything to `min`.
    pub fn value_for_pixel(&self, px: f64) -> f64 {
        let span = self.end_px - self.start_px;
        if span == 0.0 {
            return self.min;
        }
        self.min + (px - self.start_px) / span * (self.max - self.min)
    }

    /// Pixel position of data value `value`. A zero-width range maps to
    /// `start_px`.
    pub fn pixel_for_value(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return self.start_px;
        }
        self.start_px + (value - self.min) / range * (self.end_px - self.start_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_pixels_to_values() {
        let s = LinearScale::new(0.0, 10.0, 0.0, 500.0);
        assert_eq!(s.value_for_pixel(0.0), 0.0);
        assert_eq!(s.value_for_pixel(250.0), 5.0);
        assert_eq!(s.value_for_pixel(500.0), 10.0);
    }

    #[test]
    fn maps_values_to_pixels() {
        let s = LinearScale::new(0.0, 4.0, 40.0, 440.0);
        assert_eq!(s.pixel_for_value(0.0), 40.0);
        assert_eq!(s.pixel_for_value(1.0), 140.0);
        assert_eq!(s.pixel_for_value(4.0), 440.0);
    }

    #[test]
    fn offset_span_round_trips() {
        let s = LinearScale::new(2.0, 12.0, 30.0, 230.0);
        for v in [2.0, 4.5, 12.0] {
            let back = s.value_for_pixel(s.pixel_for_value(v));
            assert!((back - v).abs() < 1e-9, "{v} -> {back}");
        }
    }

    #[test]
    fn degenerate_scales_do_not_divide_by_zero() {
        let no_pixels = LinearScale::new(1.0, 9.0, 10.0, 10.0);
        assert_eq!(no_pixels.value_for_pixel(50.0), 1.0);
        let no_range = LinearScale::new(0.0, 0.0, 0.0, 300.0);
        assert_eq!(no_range.pixel_for_value(3.0), 0.0);
        assert_eq!(no_range.value_for_pixel(150.0), 0.0);
    }
}

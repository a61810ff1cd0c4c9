//! Long help text constants for CLI subcommands.

/// Batch damage lookup at one intensity.
pub const DAMAGE: &str = "\
Look up the expected damage ratio at one intensity for every category of a
hazard.

Each category's curve is interpolated linearly between its samples. An
intensity below the first sample returns the first sample's damage; above the
last sample returns the last sample's damage. There is no extrapolation.

Categories:
  earthquake, volcanic, landslide  Lightwood, MUR, MCF, CR (always listed)
  flood                            floor levels found in the data

A category without curve data reports `not found`. Intensity text that is not
a finite number is reported as invalid for the whole query.

Units:
  earthquake  MMI
  flood       water depth (m)
  volcanic    pressure (kPa)
  landslide   momentum flux";

/// Nearest sample lookup.
pub const NEAREST: &str = "\
Find the curve sample closest to an intensity, across all categories of a
hazard.

Only the distance along the intensity axis counts. On a tie the first
category in display order wins, then the first sample along the curve.

With --pixel and --width the position is read as a pixel on a chart whose
intensity axis spans [0, max intensity] over --width pixels.";

/// Curve overview.
pub const CURVES: &str = "\
Show the loaded curves for each hazard: the chart domain
[0, max intensity] x [0, 1], and for each category its label, sample count and
intensity range. Use --points to list every sample.";

//! Static registry of hazard types and their curve categories.
//!
//! Earthquake, volcanic and landslide curves are keyed by building taxonomy
//! and always expose the same four categories in a fixed order. Flood curves
//! are keyed by floor level, and their categories come from the data itself.

use std::fmt;
use std::str::FromStr;

/// Building taxonomies used by every hazard except flood, in display order.
pub const TAXONOMIES: &[&str] = &["lightwood", "mur", "mcf", "cr"];

const TAXONOMY_LABELS: &[(&str, &str)] = &[
    ("lightwood", "Lightwood"),
    ("mur", "MUR"),
    ("mcf", "MCF"),
    ("cr", "CR"),
];

const FLOOR_LABELS: &[(&str, &str)] = &[("1.0", "Floor 1"), ("2.0", "Floor 2")];

/// Label for the damage axis, shared by all hazards.
pub const DAMAGE_AXIS: &str = "Damage ratio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hazard {
    Earthquake,
    Flood,
    Volcanic,
    Landslide,
}

/// How a hazard's category list is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPolicy {
    /// Always this list, whether or not the data has curves for it.
    Fixed(&'static [&'static str]),
    /// Whatever keys the provider returned, in its order.
    FromData,
}

impl Hazard {
    pub const ALL: [Hazard; 4] = [
        Hazard::Earthquake,
        Hazard::Flood,
        Hazard::Volcanic,
        Hazard::Landslide,
    ];

    /// Key used for this hazard by the curve data provider.
    pub fn wire_key(self) -> &'static str {
        match self {
            Self::Earthquake => "gempa",
            Self::Flood => "banjir",
            Self::Volcanic => "gunungberapi",
            Self::Landslide => "longsor",
        }
    }

    pub fn from_wire_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.wire_key() == key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Earthquake => "earthquake",
            Self::Flood => "flood",
            Self::Volcanic => "volcanic",
            Self::Landslide => "landslide",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Earthquake => "Earthquake",
            Self::Flood => "Flood",
            Self::Volcanic => "Volcano",
            Self::Landslide => "Landslide",
        }
    }

    /// Intensity axis label, including the unit the curves are sampled in.
    pub fn intensity_axis(self) -> &'static str {
        match self {
            Self::Earthquake => "Intensity (MMI)",
            Self::Flood => "Flood depth (m)",
            Self::Volcanic => "Pressure (kPa)",
            Self::Landslide => "Momentum flux",
        }
    }

    /// Heading for the category column of tables.
    pub fn category_heading(self) -> &'static str {
        match self {
            Self::Flood => "Floor",
            _ => "Taxonomy",
        }
    }

    pub fn category_policy(self) -> CategoryPolicy {
        match self {
            Self::Flood => CategoryPolicy::FromData,
            _ => CategoryPolicy::Fixed(TAXONOMIES),
        }
    }

    /// Human-readable label for one of this hazard's categories.
    ///
    /// Unmapped flood floors read `Curve {key}`; unmapped taxonomies pass
    /// through unchanged.
    pub fn category_label(self, category: &str) -> String {
        let table = match self {
            Self::Flood => FLOOR_LABELS,
            _ => TAXONOMY_LABELS,
        };
        match table.iter().find(|(key, _)| *key == category) {
            Some((_, label)) => (*label).to_string(),
            None if self == Self::Flood => format!("Curve {category}"),
            None => category.to_string(),
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hazard {
    type Err = String;

    /// Accepts the English name or the provider's wire key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == lower || h.wire_key() == lower)
            .ok_or_else(|| {
                format!("unknown hazard `{s}` (expected earthquake, flood, volcanic or landslide)")
            })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

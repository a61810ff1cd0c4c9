//! CLI argument definitions for the `frag` command.
//!
//! Defines all subcommands, their arguments, and long help text
//! using the `clap` derive macros.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use crate::hazard::Hazard;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "frag", version, about = "Hazard damage curves")]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// One hazard, or every hazard in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardSelection {
    All,
    One(Hazard),
}

impl HazardSelection {
    pub fn hazards(self) -> Vec<Hazard> {
        match self {
            Self::All => Hazard::ALL.to_vec(),
            Self::One(hazard) => vec![hazard],
        }
    }
}

impl FromStr for HazardSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::One)
    }
}

/// Arguments shared by every command that reads curve data.
#[derive(Args)]
pub struct CommonArgs {
    /// Curve data: JSON file path or http(s) URL (overrides FRAGILITY_SOURCE and config)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Config file (default: ./fragility.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the loaded curves per hazard
    #[command(long_about = cli_help::CURVES)]
    Curves {
        #[command(flatten)]
        common: CommonArgs,

        /// Hazard to show, or `all`
        #[arg(long, default_value = "all")]
        hazard: HazardSelection,

        /// List every sample of every curve
        #[arg(long)]
        points: bool,
    },

    /// Damage ratio per category at an intensity
    #[command(long_about = cli_help::DAMAGE)]
    Damage {
        #[command(flatten)]
        common: CommonArgs,

        /// Hazard: earthquake, flood, volcanic, landslide, or `all`
        hazard: HazardSelection,

        /// Hazard intensity (MMI, depth in m, kPa or momentum flux)
        #[arg(allow_hyphen_values = true)]
        intensity: String,
    },

    /// Curve sample nearest to an intensity or chart pixel
    #[command(long_about = cli_help::NEAREST)]
    Nearest {
        #[command(flatten)]
        common: CommonArgs,

        /// Hazard: earthquake, flood, volcanic, landslide
        hazard: Hazard,

        /// Intensity to look up
        #[arg(long, allow_negative_numbers = true, required_unless_present = "pixel")]
        x: Option<f64>,

        /// Horizontal pixel position on the chart
        #[arg(long, conflicts_with = "x", requires = "width")]
        pixel: Option<f64>,

        /// Chart width in pixels
        #[arg(long)]
        width: Option<f64>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}

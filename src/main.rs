mod cli;
mod cli_help;
mod config;
mod curve;
mod curves;
mod damage;
mod error;
mod hazard;
mod locate;
mod provider;
mod report_helpers;
mod store;

use std::error::Error;
use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, CommonArgs};
use config::{SOURCE_ENV, Settings};
use provider::{CurveData, provider_for};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve settings and the curve source, then load the data once.
fn load(common: &CommonArgs) -> Result<(Settings, CurveData), Box<dyn Error>> {
    let settings = Settings::load(common.config.as_deref(), Path::new("."))?;
    let source =
        settings.resolve_source(common.source.as_deref(), std::env::var(SOURCE_ENV).ok())?;
    let provider = provider_for(&source, settings.timeout());
    let data = CurveData::load(provider.as_ref());
    Ok((settings, data))
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Curves {
            common,
            hazard,
            points,
        } => {
            let (settings, data) = load(&common)?;
            match &data {
                CurveData::Ready {
                    store,
                    source,
                    loaded_at,
                } => {
                    let origin = curves::Origin {
                        source,
                        loaded_at: *loaded_at,
                    };
                    curves::run(store, origin, &hazard.hazards(), points, &settings, common.json)
                }
                CurveData::Unavailable(err) => Err(err.to_string().into()),
            }
        }
        Commands::Damage {
            common,
            hazard,
            intensity,
        } => {
            let (settings, data) = load(&common)?;
            let store = data.store().map_err(|e| e.to_string())?;
            damage::run(store, &hazard.hazards(), &intensity, &settings, common.json)
        }
        Commands::Nearest {
            common,
            hazard,
            x,
            pixel,
            width,
        } => {
            let (settings, data) = load(&common)?;
            let store = data.store().map_err(|e| e.to_string())?;
            let probe = match (x, pixel, width) {
                (Some(x), _, _) => locate::Probe::Intensity(x),
                (None, Some(px), Some(width)) => locate::Probe::Pixel { px, width },
                _ => return Err("give --x, or --pixel with --width".into()),
            };
            locate::run(store, hazard, probe, &settings, common.json)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "frag", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

//! ResQroute CLI
//!
//! Resolves an emergency route between two places and renders it as a map,
//! serves the rendered map, and runs vital-sign triage sessions.

#![allow(clippy::print_stdout)]

mod prompt;
mod triage;

use std::{io, path::PathBuf};

use anyhow::{Context, bail};
use application::PlanOutcome;
use clap::{Parser, Subcommand};
use domain::{Place, TriageProfile, VitalSigns};
use infrastructure::{AppConfig, build_route_service, filter_for_verbosity, init_logging};
use prompt::Prompter;
use tracing::info;

/// ResQroute CLI
#[derive(Debug, Parser)]
#[command(name = "resqroute")]
#[command(author, version, about = "Emergency route resolution and triage", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true, env = "RESQROUTE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a route and write the map artifact
    ///
    /// Missing places are asked for interactively.
    /// Example: resqroute route "AIIMS, New Delhi" "Cyber Hub, Gurugram" --serve
    Route {
        /// Starting point
        source: Option<String>,

        /// Destination
        destination: Option<String>,

        /// Serve the map after rendering it
        #[arg(long)]
        serve: bool,
    },

    /// Serve the last rendered map
    Serve,

    /// Classify patient vitals into a traffic light state
    ///
    /// With all three readings given, classifies once; otherwise prompts
    /// for readings until "exit".
    Triage {
        /// Threshold profile
        #[arg(short, long, default_value_t = TriageProfile::Safety)]
        profile: TriageProfile,

        /// Systolic blood pressure (mmHg)
        #[arg(long, requires_all = ["spo2", "hr"])]
        bp: Option<u16>,

        /// Blood oxygen saturation (%)
        #[arg(long, requires_all = ["bp", "hr"])]
        spo2: Option<u16>,

        /// Heart rate (bpm)
        #[arg(long, requires_all = ["bp", "spo2"])]
        hr: Option<u16>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::load()?,
    };
    Ok(config)
}

/// Use the given value or ask for it
fn place_or_prompt<R: io::BufRead, W: io::Write>(
    given: Option<String>,
    prompter: &mut Prompter<R, W>,
    question: &str,
) -> anyhow::Result<Place> {
    let text = match given {
        Some(text) => text,
        None => prompter
            .ask(question)?
            .context("no input while reading a place")?,
    };
    Place::new(text).map_err(Into::into)
}

async fn run_route(
    config: &AppConfig,
    source: Option<String>,
    destination: Option<String>,
    serve: bool,
) -> anyhow::Result<()> {
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let source = place_or_prompt(source, &mut prompter, "Enter starting point: ")?;
    let destination = place_or_prompt(destination, &mut prompter, "Enter destination: ")?;
    drop(prompter);

    let service = build_route_service(config)?;
    match service.plan(&source, &destination).await? {
        PlanOutcome::Rendered(map) => {
            println!("Distance (km): {:.2}", map.distance_km);
            println!("ETA (minutes): {:.2}", map.eta_minutes);
            println!("Map saved as {}", map.path.display());
        },
        PlanOutcome::Failed(failure) => {
            println!("Error: {failure}");
            std::process::exit(1);
        },
    }

    if serve {
        presentation_http::serve(&config.server, config.map.output_path.clone()).await?;
    }
    Ok(())
}

fn run_triage(
    profile: TriageProfile,
    reading: Option<(u16, u16, u16)>,
) -> anyhow::Result<()> {
    if let Some((bp, spo2, hr)) = reading {
        triage::report(&mut io::stdout(), profile, &VitalSigns::new(bp, spo2, hr))?;
        return Ok(());
    }

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    triage::run_session(&mut prompter, profile)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_logging(config.server.log_format, filter_for_verbosity(cli.verbose))?;
    info!("ResQroute v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match cli.command {
        Commands::Route {
            source,
            destination,
            serve,
        } => run_route(&config, source, destination, serve).await?,

        Commands::Serve => {
            if !config.map.output_path.exists() {
                bail!(
                    "no map at {}; run `resqroute route` first",
                    config.map.output_path.display()
                );
            }
            presentation_http::serve(&config.server, config.map.output_path.clone()).await?;
        },

        Commands::Triage {
            profile,
            bp,
            spo2,
            hr,
        } => {
            let reading = match (bp, spo2, hr) {
                (Some(bp), Some(spo2), Some(hr)) => Some((bp, spo2, hr)),
                _ => None,
            };
            run_triage(profile, reading)?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn parses_route_with_places() {
        let cli = parse(&["resqroute", "route", "India Gate", "Cyber Hub", "--serve"]).unwrap();
        let Commands::Route {
            source,
            destination,
            serve,
        } = cli.command
        else {
            panic!("expected route command");
        };
        assert_eq!(source.as_deref(), Some("India Gate"));
        assert_eq!(destination.as_deref(), Some("Cyber Hub"));
        assert!(serve);
    }

    #[test]
    fn parses_route_without_places() {
        let cli = parse(&["resqroute", "route"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Route {
                source: None,
                destination: None,
                serve: false
            }
        ));
    }

    #[test]
    fn parses_triage_profile_and_readings() {
        let cli = parse(&[
            "resqroute", "-vv", "triage", "--profile", "iot", "--bp", "150", "--spo2", "97",
            "--hr", "80",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Triage {
                profile: TriageProfile::Iot,
                bp: Some(150),
                spo2: Some(97),
                hr: Some(80)
            }
        ));
    }

    #[test]
    fn triage_defaults_to_safety_profile() {
        let cli = parse(&["resqroute", "triage"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Triage {
                profile: TriageProfile::Safety,
                bp: None,
                ..
            }
        ));
    }

    #[test]
    fn triage_rejects_partial_readings() {
        assert!(parse(&["resqroute", "triage", "--bp", "120"]).is_err());
    }

    #[test]
    fn triage_rejects_unknown_profile() {
        assert!(parse(&["resqroute", "triage", "--profile", "ward"]).is_err());
    }

    #[test]
    fn place_prompted_when_missing() {
        let mut prompter = Prompter::new(Cursor::new("Connaught Place\n"), Vec::new());
        let place = place_or_prompt(None, &mut prompter, "Enter starting point: ").unwrap();
        assert_eq!(place.as_str(), "Connaught Place");
    }

    #[test]
    fn given_place_skips_prompt() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let place =
            place_or_prompt(Some("Agra".to_string()), &mut prompter, "Enter destination: ")
                .unwrap();
        assert_eq!(place.as_str(), "Agra");
        assert!(prompter.into_output().is_empty());
    }

    #[test]
    fn blank_place_is_rejected() {
        let mut prompter = Prompter::new(Cursor::new("   \n"), Vec::new());
        assert!(place_or_prompt(None, &mut prompter, "Enter destination: ").is_err());
    }

    #[test]
    fn explicit_config_file_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("resqroute.toml");
        std::fs::write(&path, "[server]\nport = 6006\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.port, 6006);
    }
}

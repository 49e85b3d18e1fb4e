//! `orbis`: pick points on a globe, classify land and ocean, and play
//! find-the-country from the terminal.
//!
//! Run with: `cargo run -p orbis-app -- pick --x 640 --y 360`

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use glam::DVec2;
use orbis_app::{AppError, GlobeSession, play};
use orbis_config::{CliArgs, Config};
use orbis_coords::GeoCoordinate;
use tracing::{error, info};

/// CLI arguments for the orbis binary.
#[derive(Parser, Debug)]
#[command(name = "orbis", about = "Globe picking, land classification and a country-finding game")]
struct OrbisArgs {
    #[command(flatten)]
    overrides: CliArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a pixel position to the coordinate under it.
    Pick {
        /// Pixels from the left edge.
        #[arg(long)]
        x: f64,
        /// Pixels from the top edge.
        #[arg(long)]
        y: f64,
    },
    /// Say whether a coordinate is land or ocean.
    Classify {
        /// Latitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Play rounds, reading `x y` clicks from stdin.
    Play {
        /// Stop after this many rounds are won.
        #[arg(long)]
        rounds: Option<u32>,
    },
}

fn main() -> ExitCode {
    let args = OrbisArgs::parse();

    let config_dir = args.overrides.config.clone().or_else(Config::default_dir);
    let mut config = match config_dir.as_deref().map(Config::load_or_create) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            eprintln!("warning: {err}; using default configuration");
            Config::default()
        }
        None => Config::default(),
    };
    config.apply_cli_overrides(&args.overrides);

    let log_dir = config_dir.as_deref().map(|dir| dir.join("logs"));
    orbis_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    info!(
        "Viewport: {}x{} | Globe radius: {}",
        config.viewport.width, config.viewport.height, config.globe.radius
    );

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "orbis failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<(), AppError> {
    let mut session = GlobeSession::from_config(config)?;

    match command {
        Command::Pick { x, y } => {
            let report = session.click(DVec2::new(x, y))?;
            println!("{report}");
        }
        Command::Classify { lat, lon } => {
            let coordinate = GeoCoordinate::new(lat, lon)?;
            let (surface, landmass) = session.identify(&coordinate);
            match landmass {
                Some(landmass) => println!("{coordinate}: {surface} ({})", landmass.name),
                None => println!("{coordinate}: {surface}"),
            }
        }
        Command::Play { rounds } => {
            let stdin = io::stdin();
            let summary = play::run_play(&mut session, stdin.lock(), io::stdout(), rounds)?;
            println!(
                "Won {} rounds with {} guesses",
                summary.rounds_won, summary.guesses
            );
        }
    }
    Ok(())
}

//! Command-line overrides for configuration.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Configuration overrides accepted on the command line.
///
/// CLI values override settings loaded from `config.ron`. Flatten into a
/// binary's own parser with `#[command(flatten)]`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Viewport width in pixels.
    #[arg(long, global = true)]
    pub width: Option<u32>,

    /// Viewport height in pixels.
    #[arg(long, global = true)]
    pub height: Option<u32>,

    /// Globe radius in world units.
    #[arg(long, global = true)]
    pub radius: Option<f64>,

    /// Chordal distance below which a guess counts as correct.
    #[arg(long, global = true)]
    pub tolerance: Option<f64>,

    /// RNG seed for reproducible game rounds.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// GeoJSON file with country boundaries.
    #[arg(long, global = true)]
    pub geojson: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.viewport.width = w;
        }
        if let Some(h) = args.height {
            self.viewport.height = h;
        }
        if let Some(r) = args.radius {
            self.globe.radius = r;
        }
        if let Some(t) = args.tolerance {
            self.game.tolerance = t;
        }
        if let Some(seed) = args.seed {
            self.game.seed = Some(seed);
        }
        if let Some(ref path) = args.geojson {
            self.land.geojson_path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

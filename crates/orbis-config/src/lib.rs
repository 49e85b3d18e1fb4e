//! Configuration for the Orbis globe.
//!
//! Settings persist to disk as `config.ron`, accept CLI overrides via clap,
//! and tolerate missing or unknown fields so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, GameConfig, GlobeConfig, LandConfig, ViewportConfig,
};
pub use error::ConfigError;

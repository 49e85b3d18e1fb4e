//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Globe geometry.
    pub globe: GlobeConfig,
    /// Camera placement and projection.
    pub camera: CameraConfig,
    /// Viewport size clicks are measured in.
    pub viewport: ViewportConfig,
    /// Mini-game settings.
    pub game: GameConfig,
    /// Land outline source.
    pub land: LandConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Globe geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Radius of the pickable ocean sphere in world units.
    pub radius: f64,
}

/// Camera configuration. The camera orbits the globe center.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the globe center in world units.
    pub distance: f64,
    /// Latitude the camera hovers over, in degrees.
    pub latitude: f64,
    /// Longitude the camera hovers over, in degrees.
    pub longitude: f64,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f64,
    /// Near clip plane distance.
    pub near: f64,
    /// Far clip plane distance.
    pub far: f64,
}

/// Viewport configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Mini-game configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Chordal distance below which a guess is correct.
    pub tolerance: f64,
    /// Fixed RNG seed for reproducible rounds; random when unset.
    pub seed: Option<u64>,
}

/// Land outline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LandConfig {
    /// GeoJSON boundary file; the bundled continents are used when unset.
    pub geojson_path: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for GlobeConfig {
    fn default() -> Self {
        Self { radius: 2.0 }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        // Matches an eye at (0, 0, 6): over the equator at 90°E.
        Self {
            distance: 6.0,
            latitude: 0.0,
            longitude: 90.0,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.35,
            seed: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory for Orbis (e.g. `~/.config/orbis`).
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("orbis"))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject values that would make picking or scoring meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let invalid = |field, reason: &str| ConfigError::Invalid {
            field,
            reason: reason.to_string(),
        };

        if !positive(self.globe.radius) {
            return Err(invalid("globe.radius", "must be a positive number"));
        }
        if !positive(self.camera.distance) || self.camera.distance <= self.globe.radius {
            return Err(invalid("camera.distance", "must be outside the globe"));
        }
        if !(-90.0..=90.0).contains(&self.camera.latitude) {
            return Err(invalid("camera.latitude", "must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.camera.longitude) {
            return Err(invalid("camera.longitude", "must be within [-180, 180]"));
        }
        if !(self.camera.fov_y_degrees > 0.0 && self.camera.fov_y_degrees < 180.0) {
            return Err(invalid("camera.fov_y_degrees", "must be within (0, 180)"));
        }
        if !positive(self.camera.near) || self.camera.far <= self.camera.near {
            return Err(invalid("camera.near", "need 0 < near < far"));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(invalid("viewport", "width and height must be non-zero"));
        }
        if !positive(self.game.tolerance) {
            return Err(invalid("game.tolerance", "must be a positive number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("tolerance: 0.35"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.game.seed = Some(7);
        config.land.geojson_path = Some(PathBuf::from("data/countries.geojson"));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `game` section entirely
        let ron_str = "(globe: (radius: 3.0), camera: (), viewport: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.globe.radius, 3.0);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.viewport.width = 1920;
        config.viewport.height = 1080;
        config.game.tolerance = 0.2;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.globe.radius = 5.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().globe.radius, 5.0);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.globe.radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "globe.radius",
                ..
            })
        ));

        let mut config = Config::default();
        config.camera.distance = 1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.viewport.height = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.game.tolerance = -0.1;
        assert!(config.validate().is_err());
    }
}

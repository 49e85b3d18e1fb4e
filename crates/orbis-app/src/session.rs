//! A globe session: camera, viewport, land data and the game, driven by clicks.

use std::fmt;
use std::path::Path;

use glam::DVec2;
use orbis_config::Config;
use orbis_coords::GeoCoordinate;
use orbis_game::{GameTarget, GuessOutcome, ProximityGame, builtin_targets};
use orbis_land::{Landmass, Surface, builtin_landmasses, geojson::landmasses_from_geojson, locate};
use orbis_pick::{PerspectiveCamera, PickResult, Sphere, Viewport, resolve};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::AppError;

/// What a click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clicks only report where they landed.
    #[default]
    Explore,
    /// Clicks are also scored against the current game target.
    Game,
}

/// Everything learned from one click.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickReport {
    /// Raw pick result.
    pub pick: PickResult,
    /// Land or ocean; `None` on a miss.
    pub surface: Option<Surface>,
    /// Name of the landmass that was hit.
    pub landmass: Option<String>,
    /// ISO code of the landmass that was hit, if known.
    pub code: Option<String>,
    /// Game verdict; `None` in explore mode or on a miss.
    pub guess: Option<GuessOutcome>,
}

impl ClickReport {
    fn miss() -> Self {
        Self {
            pick: PickResult::Miss,
            surface: None,
            landmass: None,
            code: None,
            guess: None,
        }
    }

    /// The clicked coordinate, on a hit.
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        self.pick.coordinate()
    }
}

impl fmt::Display for ClickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(coordinate), Some(surface)) = (self.coordinate(), self.surface) else {
            return f.write_str("miss");
        };
        write!(f, "{coordinate}: {surface}")?;
        match (&self.landmass, &self.code) {
            (Some(name), Some(code)) => write!(f, " ({name}, {code})"),
            (Some(name), None) => write!(f, " ({name})"),
            _ => Ok(()),
        }
    }
}

/// Read landmasses from a GeoJSON boundary file.
pub fn load_landmasses(path: &Path) -> Result<Vec<Landmass>, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::ReadLand {
        path: path.to_path_buf(),
        source,
    })?;
    let landmasses = landmasses_from_geojson(&json)?;
    info!(path = %path.display(), count = landmasses.len(), "loaded boundaries");
    Ok(landmasses)
}

/// One interactive globe.
#[derive(Debug, Clone)]
pub struct GlobeSession {
    camera: PerspectiveCamera,
    sphere: Sphere,
    viewport: Viewport,
    landmasses: Vec<Landmass>,
    targets: Vec<GameTarget>,
    game: ProximityGame,
    rng: ChaCha8Rng,
    mode: Mode,
}

impl GlobeSession {
    /// Build a session from validated configuration.
    ///
    /// Boundaries come from `land.geojson_path` when set, otherwise the
    /// bundled continents are used. Game rounds are reproducible when
    /// `game.seed` is set.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        config.validate()?;

        let focus = GeoCoordinate::new(config.camera.latitude, config.camera.longitude)?;
        let viewport = Viewport::new(
            f64::from(config.viewport.width),
            f64::from(config.viewport.height),
        );
        let mut camera = PerspectiveCamera::orbiting(&focus, config.camera.distance);
        camera.fov_y = config.camera.fov_y_degrees.to_radians();
        camera.near = config.camera.near;
        camera.far = config.camera.far;
        camera.set_aspect_ratio(viewport.width, viewport.height);

        let landmasses = match &config.land.geojson_path {
            Some(path) => load_landmasses(path)?,
            None => builtin_landmasses(),
        };

        let rng = match config.game.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };

        info!(
            radius = config.globe.radius,
            landmasses = landmasses.len(),
            "globe session ready"
        );

        Ok(Self {
            camera,
            sphere: Sphere::new(config.globe.radius),
            viewport,
            landmasses,
            targets: builtin_targets(),
            game: ProximityGame::with_tolerance(config.game.tolerance)?,
            rng,
            mode: Mode::Explore,
        })
    }

    /// Replace the boundary data.
    pub fn with_landmasses(mut self, landmasses: Vec<Landmass>) -> Self {
        self.landmasses = landmasses;
        self
    }

    /// Replace the list rounds are drawn from.
    pub fn with_targets(mut self, targets: Vec<GameTarget>) -> Self {
        self.targets = targets;
        self
    }

    /// The camera clicks are cast from.
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// The pickable globe.
    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    /// The viewport clicks are measured in.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Boundary data clicks are classified against.
    pub fn landmasses(&self) -> &[Landmass] {
        &self.landmasses
    }

    /// The game engine, for inspecting the current round.
    pub fn game(&self) -> &ProximityGame {
        &self.game
    }

    /// Current click mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes. Leaving game mode abandons the current round.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == Mode::Explore {
            self.game.abandon();
        }
        self.mode = mode;
    }

    /// Resize the viewport and keep the camera's aspect ratio in step.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(f64::from(width), f64::from(height));
        self.camera
            .set_aspect_ratio(self.viewport.width, self.viewport.height);
        debug!(width, height, "viewport resized");
    }

    /// Enter game mode and draw a new target.
    ///
    /// On failure the mode is left unchanged.
    pub fn start_round(&mut self) -> Result<&GameTarget, AppError> {
        let target = self.game.start_round(&self.targets, &mut self.rng)?;
        self.mode = Mode::Game;
        Ok(target)
    }

    /// Land or ocean at `coordinate`, with the landmass hit if any.
    pub fn identify(&self, coordinate: &GeoCoordinate) -> (Surface, Option<&Landmass>) {
        match locate(coordinate, &self.landmasses) {
            Some(landmass) => (Surface::Land, Some(landmass)),
            None => (Surface::Ocean, None),
        }
    }

    /// Resolve a click at pixel `screen` and, in game mode, score it.
    ///
    /// Clicks that miss the globe are not counted as guesses.
    pub fn click(&mut self, screen: DVec2) -> Result<ClickReport, AppError> {
        let pick = resolve(screen, &self.viewport, &self.camera, &self.sphere)?;
        let Some(coordinate) = pick.coordinate() else {
            return Ok(ClickReport::miss());
        };

        let (surface, landmass) = self.identify(&coordinate);
        let (landmass, code) = match landmass {
            Some(l) => (Some(l.name.clone()), l.code.clone()),
            None => (None, None),
        };

        let guess = match self.mode {
            Mode::Game => Some(self.game.submit_guess(&coordinate)),
            Mode::Explore => None,
        };

        Ok(ClickReport {
            pick,
            surface: Some(surface),
            landmass,
            code,
            guess,
        })
    }

    /// Pixel position of `coordinate` on screen, or `None` when it is on the
    /// far side of the globe or behind the camera.
    pub fn screen_position(&self, coordinate: &GeoCoordinate) -> Option<DVec2> {
        let normal = coordinate.unit_vector();
        let point = self.sphere.center + normal * self.sphere.radius;
        if normal.dot(self.camera.position - point) <= 0.0 {
            return None;
        }
        let ndc = self.camera.world_to_ndc(point)?;
        Some(self.viewport.to_screen(ndc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn session() -> GlobeSession {
        let mut config = Config::default();
        config.game.seed = Some(1);
        GlobeSession::from_config(&config).unwrap()
    }

    fn coord(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_center_click_lands_under_camera() {
        let mut session = session();
        let report = session.click(DVec2::new(640.0, 360.0)).unwrap();
        let coordinate = report.coordinate().unwrap();
        assert!(coordinate.latitude().abs() < 1e-6);
        assert!((coordinate.longitude() - 90.0).abs() < 1e-6);
        assert_eq!(report.guess, None);
    }

    #[test]
    fn test_corner_click_misses() {
        let mut session = session();
        let report = session.click(DVec2::ZERO).unwrap();
        assert_eq!(report, ClickReport::miss());
        assert_eq!(report.to_string(), "miss");
    }

    #[test]
    fn test_screen_position_round_trips_through_click() {
        let mut session = session();
        let india = coord(20.6, 78.9);
        let pixel = session.screen_position(&india).unwrap();
        let hit = session.click(pixel).unwrap().coordinate().unwrap();
        assert!((hit.latitude() - 20.6).abs() < 1e-6);
        assert!((hit.longitude() - 78.9).abs() < 1e-6);
    }

    #[test]
    fn test_far_side_has_no_screen_position() {
        let session = session();
        assert!(session.screen_position(&coord(0.0, -90.0)).is_none());
        assert!(session.screen_position(&coord(0.0, 90.0)).is_some());
    }

    #[test]
    fn test_click_reports_landmass() {
        let mut session = session();
        let pixel = session.screen_position(&coord(45.0, 80.0)).unwrap();
        let report = session.click(pixel).unwrap();
        assert_eq!(report.surface, Some(Surface::Land));
        assert_eq!(report.landmass.as_deref(), Some("Eurasia"));
    }

    #[test]
    fn test_game_mode_scores_clicks() {
        let mut session = session().with_targets(vec![GameTarget::new("Target", 0.0, 90.0)]);
        assert_eq!(session.start_round().unwrap().name, "Target");
        assert_eq!(session.mode(), Mode::Game);

        let far = session.screen_position(&coord(40.0, 60.0)).unwrap();
        let report = session.click(far).unwrap();
        assert!(matches!(report.guess, Some(GuessOutcome::Incorrect { .. })));

        let report = session.click(DVec2::new(640.0, 360.0)).unwrap();
        assert!(matches!(
            report.guess,
            Some(GuessOutcome::Correct { attempts: 2, .. })
        ));
        assert!(!session.game().is_active());
    }

    #[test]
    fn test_missed_click_is_not_a_guess() {
        let mut session = session().with_targets(vec![GameTarget::new("Target", 0.0, 90.0)]);
        session.start_round().unwrap();
        let report = session.click(DVec2::ZERO).unwrap();
        assert_eq!(report.guess, None);
        assert_eq!(session.game().attempts(), 0);
    }

    #[test]
    fn test_leaving_game_mode_abandons_round() {
        let mut session = session();
        session.start_round().unwrap();
        session.set_mode(Mode::Explore);
        assert!(!session.game().is_active());
        let report = session.click(DVec2::new(640.0, 360.0)).unwrap();
        assert_eq!(report.guess, None);
    }

    #[test]
    fn test_empty_target_list_is_an_error() {
        let mut session = session().with_targets(Vec::new());
        assert!(matches!(session.start_round(), Err(AppError::Game(_))));
        assert_eq!(session.mode(), Mode::Explore);
        assert!(!session.game().is_active());
    }

    #[test]
    fn test_resize_updates_aspect_ratio() {
        let mut session = session();
        session.resize(800, 800);
        assert_eq!(session.viewport().width, 800.0);
        assert!((session.camera().aspect_ratio - 1.0).abs() < 1e-12);
        let report = session.click(DVec2::new(400.0, 400.0)).unwrap();
        assert!(report.pick.is_hit());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.camera.distance = 1.0;
        assert!(matches!(
            GlobeSession::from_config(&config),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_config_camera_is_applied() {
        let mut config = Config::default();
        config.camera.latitude = 45.0;
        config.camera.longitude = -30.0;
        let mut session = GlobeSession::from_config(&config).unwrap();
        let hit = session
            .click(DVec2::new(640.0, 360.0))
            .unwrap()
            .coordinate()
            .unwrap();
        assert!((hit.latitude() - 45.0).abs() < 1e-6);
        assert!((hit.longitude() + 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_geojson_boundaries_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"type": "FeatureCollection", "features": [{{
                "type": "Feature",
                "properties": {{"NAME": "Squareland", "ISO_A3": "SQL"}},
                "geometry": {{"type": "Polygon",
                    "coordinates": [[[80, -10], [100, -10], [100, 10], [80, 10], [80, -10]]]}}
            }}]}}"#
        )
        .unwrap();

        let mut config = Config::default();
        config.land.geojson_path = Some(file.path().to_path_buf());
        let mut session = GlobeSession::from_config(&config).unwrap();
        assert_eq!(session.landmasses().len(), 1);

        let report = session.click(DVec2::new(640.0, 360.0)).unwrap();
        assert_eq!(report.landmass.as_deref(), Some("Squareland"));
        assert_eq!(report.code.as_deref(), Some("SQL"));
        assert!(report.to_string().ends_with("land (Squareland, SQL)"));
    }

    #[test]
    fn test_missing_geojson_file() {
        let mut config = Config::default();
        config.land.geojson_path = Some("/nonexistent/countries.geojson".into());
        assert!(matches!(
            GlobeSession::from_config(&config),
            Err(AppError::ReadLand { .. })
        ));
    }
}

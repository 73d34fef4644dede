use super::skin::{Skin, SkinKind};
use crate::animation::{Direction, ParticleSettings, Viewport, MAX_VIEWPORT_DIMENSION};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "TRIANGLE_TOOLKIT_CONFIG";
pub const SKIN_ENV: &str = "TRIANGLE_TOOLKIT_SKIN";

const MAX_PARTICLES: usize = 256;
/// Band and respawn fractions are multiples of the viewport height.
const MAX_HEIGHT_FRACTION: f64 = 10.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Partial override of a skin's particle settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleOverrides {
    pub direction: Option<Direction>,
    pub count: Option<usize>,
    pub min_size: Option<u32>,
    pub max_size: Option<u32>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub spawn_band: Option<(f64, f64)>,
    pub respawn_min_offset: Option<f64>,
    pub respawn_max_fraction: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub skin: SkinKind,
    pub viewport: ViewportConfig,
    pub particles: ParticleOverrides,
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.particle_settings()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn load(path: Option<&Path>, skin_override: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => AppConfig::default(),
        };
        if let Some(skin) = skin_override {
            config.skin = skin.parse().map_err(ConfigError::Invalid)?;
            config.particle_settings()?;
        }
        Ok(config)
    }

    /// Reads the environment; any problem is logged and replaced by defaults.
    pub fn load_from_env() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV);
        let skin = std::env::var(SKIN_ENV).ok();

        match Self::load(path.as_deref().map(Path::new), skin.as_deref()) {
            Ok(config) => {
                log::info!("Configuration loaded. Skin: {}", config.skin);
                config
            }
            Err(e) => {
                log::error!("Error loading configuration, using defaults: {}", e);
                AppConfig::default()
            }
        }
    }

    pub fn skin(&self) -> Skin {
        Skin::for_kind(self.skin)
    }

    pub fn particle_settings(&self) -> Result<ParticleSettings, ConfigError> {
        let mut settings = self.skin().particles;
        let o = &self.particles;

        if let Some(direction) = o.direction {
            settings.direction = direction;
        }
        if let Some(count) = o.count {
            settings.count = count;
        }
        if let Some(min_size) = o.min_size {
            settings.min_size = min_size;
        }
        if let Some(max_size) = o.max_size {
            settings.max_size = max_size;
        }
        if let Some(min_speed) = o.min_speed {
            settings.min_speed = min_speed;
        }
        if let Some(max_speed) = o.max_speed {
            settings.max_speed = max_speed;
        }
        if let Some(spawn_band) = o.spawn_band {
            settings.spawn_band = spawn_band;
        }
        if let Some(offset) = o.respawn_min_offset {
            settings.respawn_min_offset = offset;
        }
        if let Some(fraction) = o.respawn_max_fraction {
            settings.respawn_max_fraction = fraction;
        }

        validate(&settings)?;
        Ok(settings)
    }

    /// Explicit config wins, then the window size, then the default geometry.
    pub fn resolve_viewport(&self, window: Option<(f64, f64)>) -> Viewport {
        let (window_width, window_height) = window.unzip();
        Viewport::resolve(
            self.viewport.width.or(window_width),
            self.viewport.height.or(window_height),
        )
    }
}

fn validate(settings: &ParticleSettings) -> Result<(), ConfigError> {
    let invalid = |message: String| Err(ConfigError::Invalid(message));

    if settings.count == 0 || settings.count > MAX_PARTICLES {
        return invalid(format!(
            "particle count must be between 1 and {}, got {}",
            MAX_PARTICLES, settings.count
        ));
    }
    if settings.min_size > settings.max_size {
        return invalid(format!(
            "min_size {} exceeds max_size {}",
            settings.min_size, settings.max_size
        ));
    }
    let speeds_ok = settings.min_speed >= 0.0
        && settings.min_speed <= settings.max_speed
        && settings.max_speed <= MAX_VIEWPORT_DIMENSION;
    if !speeds_ok {
        return invalid(format!(
            "speed range {}..{} must lie within 0..{}",
            settings.min_speed, settings.max_speed, MAX_VIEWPORT_DIMENSION
        ));
    }
    let (band_low, band_high) = settings.spawn_band;
    let within_fraction = |v: f64| v.abs() <= MAX_HEIGHT_FRACTION;
    if !(within_fraction(band_low) && within_fraction(band_high) && band_low <= band_high) {
        return invalid(format!(
            "spawn band {}..{} must be ordered and within ±{} heights",
            band_low, band_high, MAX_HEIGHT_FRACTION
        ));
    }
    let offsets_ok = (0.0..=MAX_VIEWPORT_DIMENSION).contains(&settings.respawn_min_offset)
        && (0.0..=MAX_HEIGHT_FRACTION).contains(&settings.respawn_max_fraction);
    if !offsets_ok {
        return invalid(format!(
            "respawn offset must be within 0..{} and fraction within 0..{}",
            MAX_VIEWPORT_DIMENSION, MAX_HEIGHT_FRACTION
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::DEFAULT_VIEWPORT;

    #[test]
    fn empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.skin, SkinKind::Bubbles);
        assert_eq!(config.particle_settings().unwrap().count, 15);
    }

    #[test]
    fn overrides_apply_on_top_of_skin() {
        let config = AppConfig::from_json(
            r#"{"skin": "bloody", "particles": {"count": 18, "max_speed": 1.2}, "seed": 5}"#,
        )
        .unwrap();
        let settings = config.particle_settings().unwrap();
        assert_eq!(settings.direction, Direction::Falling);
        assert_eq!(settings.count, 18);
        assert_eq!(settings.max_speed, 1.2);
        assert_eq!(settings.min_size, 6);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            AppConfig::from_json(r#"{"theme": "dark"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let result = AppConfig::from_json(r#"{"particles": {"min_size": 40}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        let result = AppConfig::from_json(r#"{"particles": {"count": 0}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        let result = AppConfig::from_json(r#"{"particles": {"spawn_band": [1.0, 0.5]}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_ranges_that_overflow_when_scaled() {
        for particles in [
            r#"{"spawn_band": [0.0, 1e306]}"#,
            r#"{"spawn_band": [-1e306, 0.0]}"#,
            r#"{"respawn_max_fraction": 1e306}"#,
            r#"{"respawn_min_offset": 1e308}"#,
            r#"{"max_speed": 1e308}"#,
        ] {
            let text = format!(r#"{{"particles": {}}}"#, particles);
            assert!(
                matches!(AppConfig::from_json(&text), Err(ConfigError::Invalid(_))),
                "{}",
                particles
            );
        }
    }

    #[test]
    fn accepted_settings_animate_at_the_largest_viewport() {
        let config = AppConfig::from_json(
            r#"{"particles": {"spawn_band": [-10.0, 10.0], "respawn_max_fraction": 10.0}}"#,
        )
        .unwrap();
        let viewport = config.resolve_viewport(Some((f64::MAX, f64::MAX)));
        let mut animator =
            crate::animation::Animator::seeded(config.particle_settings().unwrap(), viewport, 8);
        animator.tick();
        let (low, high) = animator.travel_bounds();
        assert!(low.is_finite() && high.is_finite());
    }

    #[test]
    fn skin_override_replaces_file_skin() {
        let config = AppConfig::load(None, Some("bloody")).unwrap();
        assert_eq!(config.skin, SkinKind::Bloody);
        assert!(matches!(
            AppConfig::load(None, Some("neon")),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/toolkit.json")), None);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn viewport_prefers_config_then_window_then_default() {
        let config = AppConfig::from_json(r#"{"viewport": {"width": 300}}"#).unwrap();
        assert_eq!(
            config.resolve_viewport(Some((340.0, 560.0))),
            Viewport {
                width: 300.0,
                height: 560.0
            }
        );
        assert_eq!(AppConfig::default().resolve_viewport(None), DEFAULT_VIEWPORT);
        assert_eq!(
            AppConfig::default().resolve_viewport(Some((0.0, 0.0))),
            DEFAULT_VIEWPORT
        );
    }
}

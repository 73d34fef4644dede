pub mod app_config;
pub mod skin;

pub use app_config::{AppConfig, ConfigError, CONFIG_PATH_ENV, SKIN_ENV};
pub use skin::{Skin, SkinKind};

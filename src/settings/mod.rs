use std::{fs, io, path::Path, path::PathBuf, time::Duration};

use log::LevelFilter;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

const DEFAULT_WIDTH: u16 = 16;
const DEFAULT_HEIGHT: u16 = 12;
const DEFAULT_FRAME_DELAY_MS: u64 = 15;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read/write settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub animate: Option<bool>,
    #[serde(default)]
    pub frame_delay_ms: Option<u64>,
    #[serde(default)]
    pub log_level: Option<String>,
}

#[allow(dead_code)]
impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> PathBuf {
        constants::settings_path()
    }

    pub fn set_width(mut self, value: u16) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> u16 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    pub fn set_height(mut self, value: u16) -> Self {
        self.height = Some(value);
        self
    }

    pub fn get_height(&self) -> u16 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_animate(mut self, value: bool) -> Self {
        self.animate = Some(value);
        self
    }

    pub fn get_animate(&self) -> bool {
        self.animate.unwrap_or_default()
    }

    pub fn set_frame_delay_ms(mut self, value: u64) -> Self {
        self.frame_delay_ms = Some(value);
        self
    }

    pub fn get_frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms.unwrap_or(DEFAULT_FRAME_DELAY_MS))
    }

    pub fn set_log_level(mut self, value: LevelFilter) -> Self {
        self.log_level = Some(value.to_string().to_lowercase());
        self
    }

    /// Configured log level, `None` if the value in the file isn't a level name.
    pub fn parsed_log_level(&self) -> Option<LevelFilter> {
        match &self.log_level {
            None => Some(LevelFilter::Warn),
            Some(level) => level.parse().ok(),
        }
    }

    pub fn get_log_level(&self) -> LevelFilter {
        self.parsed_log_level().unwrap_or(LevelFilter::Warn)
    }

    pub fn parse(settings: &str) -> Result<Self, ron::error::SpannedError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        options.from_str(settings)
    }

    /// Loads settings from `path`, writing the default file there first if it's missing.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let settings = match fs::read_to_string(path) {
            Ok(settings) => settings,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                DEFAULT_SETTINGS.to_owned()
            }
            Err(err) => return Err(err.into()),
        };

        Self::parse(&settings).map_err(|source| SettingsError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("mazerun-test-{}-{}", std::process::id(), name))
            .join("settings.ron")
    }

    #[test]
    fn default_settings_parse() {
        let settings = Settings::parse(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.get_width(), DEFAULT_WIDTH);
        assert_eq!(settings.get_height(), DEFAULT_HEIGHT);
        assert_eq!(settings.get_seed(), None);
        assert!(!settings.get_animate());
        assert_eq!(
            settings.get_frame_delay(),
            Duration::from_millis(DEFAULT_FRAME_DELAY_MS)
        );
        assert_eq!(settings.get_log_level(), LevelFilter::Warn);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings = Settings::parse("(seed: 7, animate: true)").unwrap();
        assert_eq!(settings.get_seed(), Some(7));
        assert!(settings.get_animate());
        assert_eq!(settings.get_width(), DEFAULT_WIDTH);
        assert_eq!(Settings::parse("()").unwrap(), Settings::new());
    }

    #[test]
    fn log_level_names() {
        let settings = Settings::parse(r#"(log_level: "DEBUG")"#).unwrap();
        assert_eq!(settings.get_log_level(), LevelFilter::Debug);

        let settings = Settings::parse(r#"(log_level: "loud")"#).unwrap();
        assert_eq!(settings.parsed_log_level(), None);
        assert_eq!(settings.get_log_level(), LevelFilter::Warn);

        let settings = Settings::new().set_log_level(LevelFilter::Trace);
        assert_eq!(settings.log_level.as_deref(), Some("trace"));
    }

    #[test]
    fn invalid_file_is_an_error() {
        assert!(Settings::parse("(width: \"wide\")").is_err());
    }

    #[test]
    fn load_creates_default_file() {
        let path = temp_settings_path("create");
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings, Settings::parse(DEFAULT_SETTINGS).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);

        fs::write(&path, "(width: 40, height: 3)").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!((settings.get_width(), settings.get_height()), (40, 3));

        fs::write(&path, "(width: ").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Parse { .. })
        ));

        Settings::reset_config(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}

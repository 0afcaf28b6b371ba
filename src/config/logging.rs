//! The `[logging]` section
//!
//! Level and file output resolve like the rest of the config:
//! `TAILPAGE_LOG_LEVEL` / `TAILPAGE_LOG_DIR` > `[logging]` > defaults.
//! Setting `TAILPAGE_LOG_DIR` also switches file output on.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

use super::ConfigError;

/// When the JSON log file starts a new segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Rolling JSON file destination
#[derive(Debug, Clone, PartialEq)]
pub struct LogFile {
    pub dir: PathBuf,
    /// File name prefix; segments are named `<prefix>.<date>`
    pub prefix: String,
    pub rotation: LogRotation,
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./logs"),
            prefix: env!("CARGO_PKG_NAME").to_string(),
            rotation: LogRotation::default(),
        }
    }
}

/// Resolved logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for this crate's own events when RUST_LOG is unset
    pub level: Level,
    /// Write JSON lines to `file` in addition to stdout
    pub file_enabled: bool,
    pub file: LogFile,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            file_enabled: false,
            file: LogFile::default(),
        }
    }
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<LogRotation>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Lowercase level name, as written to TOML and filter directives
    pub fn level_name(&self) -> String {
        self.level.as_str().to_ascii_lowercase()
    }

    pub(super) fn resolve<E>(file: Option<FileLogging>, env: &E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let defaults = LogFile::default();

        let level = match env("TAILPAGE_LOG_LEVEL").or(file.level) {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(raw.clone()))?,
            None => Level::INFO,
        };

        let env_dir = env("TAILPAGE_LOG_DIR").filter(|d| !d.trim().is_empty());
        let file_enabled = env_dir.is_some() || file.file_enabled.unwrap_or(false);
        let dir = env_dir
            .or(file.file_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.dir);

        Ok(Self {
            level,
            file_enabled,
            file: LogFile {
                dir,
                prefix: file.file_prefix.unwrap_or(defaults.prefix),
                rotation: file.file_rotation.unwrap_or(defaults.rotation),
            },
        })
    }
}

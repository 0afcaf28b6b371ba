//! Configuration for the page server
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/tailpage/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::style::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;


pub(crate) use logging::FileLogging;
pub use logging::{LogFile, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the page server to
    pub bind_addr: SocketAddr,

    /// Page title override; the demo page's own title is used when unset
    pub title: Option<String>,

    /// Theme the page starts in before the visitor toggles it
    pub default_theme: Theme,

    /// Serve the built-in demo page (otherwise the placeholder page)
    pub demo: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            title: None,
            default_theme: Theme::default(),
            demo: true,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub bind_addr: Option<String>,
    pub title: Option<String>,
    pub default_theme: Option<String>,
    pub demo: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Failure to load configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The bind address is not a socket address
    InvalidBindAddr(String),
    /// The log level is not one of trace, debug, info, warn, error
    InvalidLogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "cannot parse {}: {}", path.display(), source)
            }
            ConfigError::InvalidBindAddr(addr) => write!(f, "invalid bind address: {:?}", addr),
            ConfigError::InvalidLogLevel(level) => write!(f, "invalid log level: {:?}", level),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::InvalidBindAddr(_) | ConfigError::InvalidLogLevel(_) => None,
        }
    }
}

impl ConfigError {
    /// Print a boxed, actionable error message to stderr
    pub fn report(&self) {
        let headline = match self {
            ConfigError::Read { .. } => "CONFIG ERROR - Cannot read configuration file    ",
            ConfigError::Parse { .. } => "CONFIG ERROR - Failed to parse configuration file",
            ConfigError::InvalidBindAddr(_) => "CONFIG ERROR - Invalid bind address              ",
            ConfigError::InvalidLogLevel(_) => "CONFIG ERROR - Invalid log level                 ",
        };

        eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
        eprintln!("║  {}           ║", headline);
        eprintln!("╚══════════════════════════════════════════════════════════════╝\n");

        match self {
            ConfigError::Read { path, source } => {
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", source);
            }
            ConfigError::Parse { path, source } => {
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", source);
                eprintln!("  Tip: Check for:\n");
                eprintln!("    - Missing quotes around string values");
                eprintln!("    - Invalid boolean values (use true/false)");
                eprintln!("    - Typos in section names\n");
                eprintln!("  To reset, run `tailpage config --reset`.\n");
            }
            ConfigError::InvalidBindAddr(addr) => {
                eprintln!("  Value: {:?}\n", addr);
                eprintln!("  Expected host:port, e.g. {}\n", DEFAULT_BIND_ADDR);
            }
            ConfigError::InvalidLogLevel(level) => {
                eprintln!("  Value: {:?}\n", level);
                eprintln!("  Expected one of: trace, debug, info, warn, error\n");
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/tailpage/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("tailpage").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read a config file; a missing file yields the empty config
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, |key: &str| std::env::var(key).ok())
    }

    /// Merge a parsed file with environment lookups
    pub(crate) fn resolve<E>(file: FileConfig, env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        // Bind address: env > file > default
        let bind_raw = env("TAILPAGE_BIND")
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        // Title: env > file > unset
        let title = env("TAILPAGE_TITLE")
            .or(file.title)
            .filter(|t| !t.trim().is_empty());

        // Theme: env > file > default, unknown names fall back to light
        let default_theme = env("TAILPAGE_THEME")
            .or(file.default_theme)
            .map(|t| Theme::from_str(&t))
            .unwrap_or_default();

        // Demo page: env can only turn it off
        let demo_disabled = env("TAILPAGE_NO_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let demo = !demo_disabled && file.demo.unwrap_or(true);

        Ok(Self {
            bind_addr,
            title,
            default_theme,
            demo,
            logging: LoggingConfig::resolve(file.logging, &env)?,
        })
    }

    /// Human-readable origin of the loaded configuration
    pub fn source_description() -> String {
        match Self::config_path() {
            Some(path) if path.exists() => path.display().to_string(),
            _ => "defaults (no config file)".to_string(),
        }
    }
}

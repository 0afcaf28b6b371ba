//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn quoted(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Serialize the title line, commented out when unset
    fn title_to_toml(&self) -> String {
        match &self.title {
            Some(title) => format!("title = {}", quoted(title)),
            None => "# title = \"My Dashboard\"".to_string(),
        }
    }

    /// Serialize config to a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# tailpage configuration

# Page server bind address (TAILPAGE_BIND overrides)
bind_addr = {bind}

# Page title (TAILPAGE_TITLE overrides); the demo title is used when unset
{title}

# Starting theme: light, dark, auto (TAILPAGE_THEME overrides)
default_theme = {theme}

# Serve the built-in demo page (TAILPAGE_NO_DEMO=1 disables)
demo = {demo}

# Logging (RUST_LOG replaces the whole filter)
[logging]
# trace, debug, info, warn, error (TAILPAGE_LOG_LEVEL overrides)
level = {log_level}
# JSON file logging in addition to stdout (TAILPAGE_LOG_DIR sets the
# directory and turns it on)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            bind = quoted(&self.bind_addr.to_string()),
            title = self.title_to_toml(),
            theme = quoted(self.default_theme.as_str()),
            demo = self.demo,
            log_level = quoted(&self.logging.level_name()),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file.dir.display().to_string()),
            log_file_rotation = quoted(self.logging.file.rotation.as_str()),
            log_file_prefix = quoted(&self.logging.file.prefix),
        )
    }
}

use std::{env, path::PathBuf};

use super::schema::Settings;

const MAX_RETRY_DELAY_MS: u64 = 5_000;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `SHOWCASE__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SHOWCASE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.assets.cover_templates.is_empty() {
            return Err("assets.cover_templates must not be empty".to_string());
        }
        if self.assets.audio_templates.is_empty() {
            return Err("assets.audio_templates must not be empty".to_string());
        }
        if self.assets.album_templates.is_empty() {
            return Err("assets.album_templates must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.playback.volume) {
            return Err("playback.volume must be within 0.0..=2.0".to_string());
        }
        if self.playback.retry_delay_ms > MAX_RETRY_DELAY_MS {
            return Err(format!(
                "playback.retry_delay_ms must be <= {MAX_RETRY_DELAY_MS}"
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `SHOWCASE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SHOWCASE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/showcase/config.toml`
/// or `~/.config/showcase/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("showcase").join("config.toml"))
}

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/showcase/config.toml` or `~/.config/showcase/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SHOWCASE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub assets: AssetSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory that local candidates are resolved against.
    pub root: PathBuf,
    /// Candidate locations for card artwork, tried in order. `{name}` is
    /// replaced by the track's `file_base`.
    pub cover_templates: Vec<String>,
    /// Candidate locations for track audio. `{name}` is the track's `audio_base`.
    pub audio_templates: Vec<String>,
    /// Candidate locations for home carousel artwork.
    pub album_templates: Vec<String>,
    /// Candidate locations for platform and section icons.
    pub icon_templates: Vec<String>,
    /// Shown instead of artwork when no candidate exists.
    pub cover_fallback: Option<String>,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            cover_templates: vec![
                "players/image/{name}.png".into(),
                "players/image/{name}.webp".into(),
                "players/images/{name}.png".into(),
                "players/images/{name}.webp".into(),
            ],
            audio_templates: vec!["{name}.wav".into(), "{name}.mp3".into()],
            album_templates: vec![
                "{name}.png".into(),
                "{name}.jpg".into(),
                "{name}.jpeg".into(),
                "{name}.webp".into(),
            ],
            icon_templates: vec!["icons/{name}.svg".into(), "icons/{name}.png".into()],
            cover_fallback: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Delay before the single retry of a rejected start (milliseconds).
    pub retry_delay_ms: u64,
    /// Output volume applied to every started track (1.0 = unchanged).
    pub volume: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            retry_delay_ms: 50,
            volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Text rendered in the top navigation box.
    pub header_text: String,
    /// Section shown at start-up.
    pub start_section: SectionSetting,
    /// Whether the home section starts with the hero block.
    pub show_hero: bool,
    /// How many originals the home section lists.
    pub home_originals: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " Erness Official ".to_string(),
            start_section: SectionSetting::Home,
            show_hero: true,
            home_originals: 3,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionSetting {
    #[serde(alias = "inicio")]
    Home,
    Originals,
    Covers,
    #[serde(alias = "mbeats", alias = "m-beats")]
    Beats,
    Videos,
    #[serde(alias = "noticias")]
    News,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Optional TOML catalog replacing the built-in page content.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
    /// Log file. Logging is disabled when unset, since the terminal belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

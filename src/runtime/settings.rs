use log::warn;

use crate::catalog::{Catalog, CatalogError};
use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("showcase: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("showcase: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Load the configured catalog, or the built-in one when unset or broken.
pub fn load_catalog(settings: &config::CatalogSettings) -> Result<Catalog, CatalogError> {
    if let Some(path) = &settings.path {
        match Catalog::from_path(path) {
            Ok(c) => return Ok(c),
            Err(e) => {
                eprintln!("showcase: failed to load catalog, using built-in: {e}");
                warn!("catalog {}: {e}", path.display());
            }
        }
    }
    Catalog::builtin()
}

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use super::model::{Catalog, Track};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate id '{id}' in {list}")]
    DuplicateId { list: &'static str, id: String },
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Ids must be unique inside each list; they become handle ids and
    /// selection keys.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_tracks("originals", &self.originals)?;
        check_tracks("covers", &self.covers)?;
        check_tracks("beats", &self.beats)?;
        check_unique("videos", self.videos.iter().map(|v| v.id.clone()))?;
        check_unique("upcoming", self.upcoming.iter().map(|v| v.id.clone()))?;
        check_unique("news", self.news.iter().map(|n| n.id.to_string()))?;
        check_unique("albums", self.albums.iter().map(|a| a.id.clone()))?;
        Ok(())
    }
}

fn check_tracks(list: &'static str, tracks: &[Track]) -> Result<(), CatalogError> {
    check_unique(list, tracks.iter().map(|t| t.id.to_string()))
}

fn check_unique(
    list: &'static str,
    ids: impl Iterator<Item = String>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(CatalogError::DuplicateId { list, id });
        }
    }
    Ok(())
}

use std::path::{Path, PathBuf};

/// Something that can tell whether a candidate source loads.
pub trait AssetProbe {
    fn loads(&self, source: &str) -> bool;
}

/// Probes candidates as files below a root directory.
///
/// Remote sources (`scheme://...`) are never fetched; they count as loadable
/// and are shown as links.
#[derive(Debug, Clone)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location of a (local) source.
    pub fn locate(&self, source: &str) -> PathBuf {
        self.root.join(source.trim_start_matches('/'))
    }
}

impl AssetProbe for FsProbe {
    fn loads(&self, source: &str) -> bool {
        if is_remote(source) {
            return true;
        }
        self.locate(source).is_file()
    }
}

pub fn is_remote(source: &str) -> bool {
    source.contains("://")
}

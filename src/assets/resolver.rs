use log::debug;
use thiserror::Error;

use super::probe::AssetProbe;
use super::templates::{expand_templates, is_explicit_file};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("asset name is empty")]
    EmptyName,
    #[error("no candidate templates for asset '{name}'")]
    NoCandidates { name: String },
    #[error("no candidate loaded for asset '{name}' ({tried} tried)")]
    Exhausted { name: String, tried: usize },
}

/// Terminal outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAsset {
    /// First candidate that loaded, with its position in the list.
    Found { index: usize, source: String },
    /// Every candidate failed.
    Exhausted,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Probing,
    Found,
    Exhausted,
}

/// Resolution state for one logical asset name.
#[derive(Debug, Clone)]
pub struct ResolutionHandle {
    name: String,
    candidates: Vec<String>,
    index: usize,
    phase: Phase,
    fallback: Option<String>,
}

/// Start resolving `logical_name` through `templates`.
///
/// The handle initially exposes the first candidate. Resolving the same name
/// again starts over from the first candidate.
pub fn resolve<S: AsRef<str>>(
    logical_name: &str,
    templates: &[S],
) -> Result<ResolutionHandle, AssetError> {
    let name = logical_name.trim();
    if name.is_empty() {
        return Err(AssetError::EmptyName);
    }
    let candidates = if is_explicit_file(name) {
        vec![name.to_string()]
    } else {
        expand_templates(templates, name)
    };
    if candidates.is_empty() {
        return Err(AssetError::NoCandidates {
            name: name.to_string(),
        });
    }

    Ok(ResolutionHandle {
        name: name.to_string(),
        candidates,
        index: 0,
        phase: Phase::Probing,
        fallback: None,
    })
}

impl ResolutionHandle {
    /// Source exposed once every candidate has failed.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn logical_name(&self) -> &str {
        &self.name
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The source a renderer should use right now: the current candidate, or
    /// the fallback (possibly nothing) once exhausted.
    pub fn source(&self) -> Option<&str> {
        match self.phase {
            Phase::Exhausted => self.fallback.as_deref(),
            Phase::Probing | Phase::Found => self.candidates.get(self.index).map(String::as_str),
        }
    }

    /// The current candidate failed to load. Advances to the next one, or
    /// exhausts the list. Ignored once the resolution is settled.
    pub fn on_load_failure(&mut self) {
        if self.phase != Phase::Probing {
            return;
        }
        debug!(
            "asset '{}': candidate {} failed ({})",
            self.name, self.index, self.candidates[self.index]
        );
        if self.index + 1 < self.candidates.len() {
            self.index += 1;
        } else {
            self.phase = Phase::Exhausted;
        }
    }

    /// The current candidate loaded.
    pub fn on_load_success(&mut self) {
        if self.phase == Phase::Probing {
            self.phase = Phase::Found;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.phase != Phase::Probing
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// `None` while candidates are still being tried.
    pub fn outcome(&self) -> Option<ResolvedAsset> {
        match self.phase {
            Phase::Probing => None,
            Phase::Found => Some(ResolvedAsset::Found {
                index: self.index,
                source: self.candidates[self.index].clone(),
            }),
            Phase::Exhausted => Some(ResolvedAsset::Exhausted),
        }
    }

    /// Point the handle at another logical name. Same name keeps the current
    /// progress; a different name starts a fresh resolution.
    pub fn retarget<S: AsRef<str>>(
        &mut self,
        logical_name: &str,
        templates: &[S],
    ) -> Result<bool, AssetError> {
        if logical_name.trim() == self.name {
            return Ok(false);
        }
        let fresh = resolve(logical_name, templates)?;
        self.name = fresh.name;
        self.candidates = fresh.candidates;
        self.index = 0;
        self.phase = Phase::Probing;
        Ok(true)
    }

    /// Drive the resolution to a terminal state with `probe` standing in for
    /// the host's load events. Returns the found index.
    pub fn settle_with<P: AssetProbe + ?Sized>(&mut self, probe: &P) -> Result<usize, AssetError> {
        while self.phase == Phase::Probing {
            if probe.loads(&self.candidates[self.index]) {
                self.on_load_success();
            } else {
                self.on_load_failure();
            }
        }
        match self.phase {
            Phase::Exhausted => Err(AssetError::Exhausted {
                name: self.name.clone(),
                tried: self.candidates.len(),
            }),
            _ => Ok(self.index),
        }
    }
}

//! Embed URLs handed to third-party video players.

use super::model::{Video, VideoSource};

pub fn youtube_embed(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

pub fn youtube_thumbnail(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}

pub fn vimeo_embed(id: &str) -> String {
    format!("https://player.vimeo.com/video/{id}?title=0&byline=0&portrait=0&dnt=1")
}

pub fn screenpal_embed(id: &str) -> String {
    format!("https://go.screenpal.com/player/{id}?width=100%&height=100%&ff=1&title=0")
}

impl VideoSource {
    pub fn embed_url(&self) -> String {
        match self {
            Self::Youtube { id } => youtube_embed(id),
            Self::Vimeo { id } => vimeo_embed(id),
            Self::Screenpal { id } => screenpal_embed(id),
            Self::Embed { url } => url.clone(),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::Youtube { .. } => "YouTube",
            Self::Vimeo { .. } => "Vimeo",
            Self::Screenpal { .. } => "ScreenPal",
            Self::Embed { .. } => "Web",
        }
    }
}

impl Video {
    pub fn embed_url(&self) -> String {
        self.source.embed_url()
    }

    /// Only YouTube exposes a predictable thumbnail.
    pub fn thumbnail_url(&self) -> Option<String> {
        match &self.source {
            VideoSource::Youtube { id } => Some(youtube_thumbnail(id)),
            _ => None,
        }
    }
}

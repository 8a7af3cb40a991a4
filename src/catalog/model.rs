use serde::Deserialize;

use crate::playback::HandleId;

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub artist: ArtistProfile,
    #[serde(default)]
    pub originals: Vec<Track>,
    #[serde(default)]
    pub covers: Vec<Track>,
    #[serde(default)]
    pub beats: Vec<Track>,
    #[serde(default)]
    pub videos: Vec<Video>,
    /// Upcoming exclusives shown on the home section.
    #[serde(default)]
    pub upcoming: Vec<Video>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    /// Streaming platforms linked from the home section, by icon name.
    #[serde(default)]
    pub platforms: Vec<PlatformLink>,
    /// Album artwork carousel on the home section.
    #[serde(default)]
    pub albums: Vec<AlbumSlide>,
}

impl Catalog {
    pub fn tracks(&self, kind: TrackKind) -> &[Track] {
        match kind {
            TrackKind::Original => &self.originals,
            TrackKind::Cover => &self.covers,
            TrackKind::Beat => &self.beats,
        }
    }

    pub fn videos(&self, list: VideoList) -> &[Video] {
        match list {
            VideoList::Published => &self.videos,
            VideoList::Upcoming => &self.upcoming,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistProfile {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
    pub contact_email: String,
    #[serde(default)]
    pub copyright: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumSlide {
    pub id: String,
    /// Logical artwork name, resolved through `assets.album_templates`.
    pub file_base: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformLink {
    pub label: String,
    /// Logical icon name, resolved through `assets.icon_templates`.
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrackKind {
    Original,
    Cover,
    Beat,
}

impl TrackKind {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Original => "originals",
            Self::Cover => "covers",
            Self::Beat => "beats",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub original_artist: Option<String>,
    /// Logical artwork name.
    pub file_base: String,
    /// Logical audio name (no extension).
    pub audio_base: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub card_label: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genre: String,
}

impl Track {
    /// Handle id of this track's audio card, unique across track lists.
    pub fn handle_id(&self, kind: TrackKind) -> HandleId {
        HandleId::new(format!("{}:{}", kind.slug(), self.id))
    }

    /// `artist • album`, or just the artist when there is no album.
    pub fn byline(&self) -> String {
        let album = self.album.trim();
        if album.is_empty() {
            self.artist.clone()
        } else {
            format!("{} • {}", self.artist, album)
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VideoList {
    Published,
    Upcoming,
}

/// Where a video is hosted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum VideoSource {
    Youtube { id: String },
    Vimeo { id: String },
    Screenpal { id: String },
    Embed { url: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub channel: String,
    pub source: VideoSource,
    #[serde(default)]
    pub subtitles: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Release,
    Tour,
    Collaboration,
    #[serde(other)]
    Other,
}

impl NewsCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Release => "Release",
            Self::Tour => "Tour",
            Self::Collaboration => "Collaboration",
            Self::Other => "News",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: NewsCategory,
}

use crate::catalog::{Catalog, TrackKind, VideoList};
use crate::config::SectionSetting;

/// Top-level page sections, in navigation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Originals,
    Covers,
    Beats,
    Videos,
    News,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Originals,
        Section::Covers,
        Section::Beats,
        Section::Videos,
        Section::News,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Originals => "Originals",
            Self::Covers => "Covers",
            Self::Beats => "M-Beats",
            Self::Videos => "Videos",
            Self::News => "News",
        }
    }

    pub fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.position() + n - 1) % n]
    }

    /// Number keys `1`..`6` jump straight to a section.
    pub fn from_digit(c: char) -> Option<Self> {
        let d = c.to_digit(10)? as usize;
        d.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Banner image shown above the section's list.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("bannermermusicwebpng.png"),
            Self::Originals => Some("originalsbanner.png"),
            Self::Covers => Some("coversbanner.png"),
            Self::Beats => Some("mmbeats-banner.png"),
            Self::Videos => Some("videosweb-banner.png"),
            Self::News => None,
        }
    }

    /// Icon name of the section header.
    pub fn header_icon(self) -> &'static str {
        match self {
            Self::Home | Self::Originals | Self::Covers | Self::Beats => "album",
            Self::Videos => "video",
            Self::News => "clock",
        }
    }

    /// Cards shown in this section, top to bottom. Home lists at most
    /// `home_originals` originals.
    pub fn cards(self, catalog: &Catalog, home_originals: usize) -> Vec<Card> {
        let tracks = |kind: TrackKind| {
            (0..catalog.tracks(kind).len()).map(move |index| Card::Track { kind, index })
        };
        let videos = |list: VideoList| {
            (0..catalog.videos(list).len()).map(move |index| Card::Video { list, index })
        };
        let news = || (0..catalog.news.len()).map(|index| Card::News { index });

        match self {
            Self::Home => tracks(TrackKind::Original)
                .take(home_originals)
                .chain(videos(VideoList::Upcoming))
                .chain(news())
                .collect(),
            Self::Originals => tracks(TrackKind::Original).collect(),
            Self::Covers => tracks(TrackKind::Cover).collect(),
            Self::Beats => tracks(TrackKind::Beat).collect(),
            Self::Videos => videos(VideoList::Published).collect(),
            Self::News => news().collect(),
        }
    }
}

impl From<SectionSetting> for Section {
    fn from(s: SectionSetting) -> Self {
        match s {
            SectionSetting::Home => Self::Home,
            SectionSetting::Originals => Self::Originals,
            SectionSetting::Covers => Self::Covers,
            SectionSetting::Beats => Self::Beats,
            SectionSetting::Videos => Self::Videos,
            SectionSetting::News => Self::News,
        }
    }
}

/// One entry in a section's list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Card {
    /// An audio card backed by a registered playback handle.
    Track { kind: TrackKind, index: usize },
    Video { list: VideoList, index: usize },
    News { index: usize },
}

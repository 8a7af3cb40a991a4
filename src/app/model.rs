//! Application model: the page state driven by the TUI and runtime.
//!
//! `App` holds the catalog, the current section and selection, overlay state
//! and the playback coordinator for the audio cards mounted on screen.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::section::{Card, Section};
use crate::assets::{AssetProbe, NAME_PLACEHOLDER, ResolutionHandle, resolve};
use crate::catalog::{
    AlbumSlide, Catalog, NewsItem, PlatformLink, Track, TrackKind, Video, VideoList,
};
use crate::config::AssetSettings;
use crate::playback::{
    HandleId, MediaElement, PlayOutcome, PlaybackCoordinator, PlaybackError, RetryOutcome,
};

/// Icons drawn by the page chrome, resolved once through `assets.icon_templates`.
pub const UI_ICONS: [&str; 8] = [
    "album", "video", "clock", "calendar", "share", "youtube", "menu", "close",
];

/// Builds the media element for a resolved audio source.
pub type ElementFactory<E> = Box<dyn FnMut(&str) -> E>;

/// A track card currently registered with the coordinator.
pub struct MountedTrack {
    pub kind: TrackKind,
    pub index: usize,
    pub id: HandleId,
    pub artwork: Option<ResolutionHandle>,
    pub audio_source: String,
}

/// The main application model.
pub struct App<E> {
    pub catalog: Catalog,
    pub section: Section,
    pub selected: usize,

    pub menu_open: bool,
    pub menu_cursor: usize,
    /// Video whose embed overlay is open.
    pub open_video: Option<(VideoList, usize)>,

    pub show_hero: bool,
    /// How many originals the home section lists.
    pub home_originals: usize,
    /// Slide shown by the home album carousel.
    pub album_slide: usize,
    /// Last user-facing playback message (give-ups, unknown handles).
    pub status: Option<String>,

    pub coordinator: PlaybackCoordinator<E>,

    mounted_section: Option<Section>,
    mounted: Vec<MountedTrack>,
    banner: Option<ResolutionHandle>,
    icons: Vec<Option<ResolutionHandle>>,
    ui_icons: BTreeMap<&'static str, Option<ResolutionHandle>>,
    albums: Vec<Option<ResolutionHandle>>,
    assets: AssetSettings,
    probe: Box<dyn AssetProbe>,
    make_element: ElementFactory<E>,
}

impl<E: MediaElement> App<E> {
    pub fn new(
        catalog: Catalog,
        assets: AssetSettings,
        retry_delay: Duration,
        probe: Box<dyn AssetProbe>,
        make_element: ElementFactory<E>,
    ) -> Self {
        let icons = catalog
            .platforms
            .iter()
            .map(|p| resolve_settled(&p.icon, &assets.icon_templates, None, probe.as_ref()))
            .collect();
        let ui_icons = UI_ICONS
            .iter()
            .map(|name| {
                let handle =
                    resolve_settled(name, &assets.icon_templates, None, probe.as_ref());
                (*name, handle)
            })
            .collect();
        let albums = catalog
            .albums
            .iter()
            .map(|a| {
                resolve_settled(&a.file_base, &assets.album_templates, None, probe.as_ref())
            })
            .collect();

        Self {
            catalog,
            section: Section::Home,
            selected: 0,

            menu_open: false,
            menu_cursor: 0,
            open_video: None,

            show_hero: true,
            home_originals: 3,
            album_slide: 0,
            status: None,

            coordinator: PlaybackCoordinator::new(retry_delay),

            mounted_section: None,
            mounted: Vec::new(),
            banner: None,
            icons,
            ui_icons,
            albums,
            assets,
            probe,
            make_element,
        }
    }

    /// Switch to `section`, remounting its audio cards. Navigating to the
    /// section already on screen keeps playback untouched.
    pub fn navigate(&mut self, section: Section) {
        if self.mounted_section == Some(section) {
            return;
        }
        self.unmount();
        self.section = section;
        self.selected = 0;
        self.open_video = None;
        self.mount();
    }

    pub fn next_section(&mut self) {
        self.navigate(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.navigate(self.section.prev());
    }

    fn unmount(&mut self) {
        let removed = self.coordinator.unregister_all();
        if !removed.is_empty() {
            debug!("unmounted {} audio cards", removed.len());
        }
        self.mounted.clear();
        self.banner = None;
        self.mounted_section = None;
        // Messages about the unmounted cards no longer apply.
        self.status = None;
    }

    fn mount(&mut self) {
        self.banner = self.section.banner().and_then(|name| {
            resolve_settled(name, &[NAME_PLACEHOLDER], None, self.probe.as_ref())
        });

        for card in self.section.cards(&self.catalog, self.home_originals) {
            let Card::Track { kind, index } = card else {
                continue;
            };
            let Some(track) = self.catalog.tracks(kind).get(index) else {
                continue;
            };
            let id = track.handle_id(kind);

            let artwork = resolve_settled(
                &track.file_base,
                &self.assets.cover_templates,
                self.assets.cover_fallback.as_deref(),
                self.probe.as_ref(),
            );
            // Without a loadable candidate the element still mounts; its start
            // is rejected and the coordinator reports the give-up.
            let audio_source = resolve_settled(
                &track.audio_base,
                &self.assets.audio_templates,
                None,
                self.probe.as_ref(),
            )
            .and_then(|h| {
                h.source()
                    .or_else(|| h.candidates().first().map(String::as_str))
                    .map(str::to_string)
            })
            .unwrap_or_default();

            let element = (self.make_element)(&audio_source);
            let duration = element.status().duration;
            if let Err(e) = self.coordinator.register(id.clone(), element) {
                warn!("skipping audio card: {e}");
                continue;
            }
            // Known lengths show before the card is ever played.
            self.coordinator.report_metadata(&id, duration);
            self.mounted.push(MountedTrack {
                kind,
                index,
                id,
                artwork,
                audio_source,
            });
        }
        info!(
            "mounted section {} with {} audio cards",
            self.section.label(),
            self.mounted.len()
        );
        self.mounted_section = Some(self.section);
    }

    pub fn cards(&self) -> Vec<Card> {
        self.section.cards(&self.catalog, self.home_originals)
    }

    pub fn selected_card(&self) -> Option<Card> {
        self.cards().get(self.selected).copied()
    }

    /// Move selection to the next card, wrapping at the end.
    pub fn next(&mut self) {
        let n = self.cards().len();
        if n > 0 {
            self.selected = (self.selected + 1) % n;
        }
    }

    /// Move selection to the previous card, wrapping at the start.
    pub fn prev(&mut self) {
        let n = self.cards().len();
        if n > 0 {
            self.selected = (self.selected + n - 1) % n;
        }
    }

    /// Activate the selected card: toggle a track or open a video overlay.
    pub fn activate_selected(&mut self) -> Result<Option<PlayOutcome>, PlaybackError> {
        match self.selected_card() {
            Some(Card::Track { kind, index }) => {
                let Some(id) = self.mounted_track(kind, index).map(|m| m.id.clone()) else {
                    return Ok(None);
                };
                let outcome = self.coordinator.request_play(&id);
                match &outcome {
                    Ok(PlayOutcome::RetryScheduled) => {
                        self.status = Some(format!("{id}: start rejected, retrying"));
                    }
                    Ok(_) => self.status = None,
                    Err(e) => self.status = Some(e.to_string()),
                }
                outcome.map(Some)
            }
            Some(Card::Video { list, index }) => {
                self.open_video = Some((list, index));
                Ok(None)
            }
            Some(Card::News { .. }) | None => Ok(None),
        }
    }

    /// Advance playback bookkeeping: fire a due retry and mirror the active
    /// element's clock into the coordinator.
    pub fn tick(&mut self, now: Instant) {
        if let Some(outcome) = self.coordinator.fire_due_retry(now) {
            self.status = match outcome {
                RetryOutcome::Started => None,
                RetryOutcome::GaveUp => Some("playback could not start".to_string()),
            };
        }
        self.coordinator.sync_active();
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_cursor = self.section.position();
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1) % Section::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        let n = Section::ALL.len();
        self.menu_cursor = (self.menu_cursor + n - 1) % n;
    }

    /// Navigate to the entry under the menu cursor and close the menu.
    pub fn menu_choose(&mut self) {
        let section = Section::ALL[self.menu_cursor % Section::ALL.len()];
        self.menu_open = false;
        self.navigate(section);
    }

    /// Close the topmost overlay. Returns `false` when none was open.
    pub fn close_overlay(&mut self) -> bool {
        if self.open_video.take().is_some() {
            return true;
        }
        if self.menu_open {
            self.menu_open = false;
            return true;
        }
        false
    }

    pub fn track(&self, kind: TrackKind, index: usize) -> Option<&Track> {
        self.catalog.tracks(kind).get(index)
    }

    pub fn video(&self, list: VideoList, index: usize) -> Option<&Video> {
        self.catalog.videos(list).get(index)
    }

    pub fn news_item(&self, index: usize) -> Option<&NewsItem> {
        self.catalog.news.get(index)
    }

    pub fn mounted_track(&self, kind: TrackKind, index: usize) -> Option<&MountedTrack> {
        self.mounted
            .iter()
            .find(|m| m.kind == kind && m.index == index)
    }

    pub fn mounted_tracks(&self) -> &[MountedTrack] {
        &self.mounted
    }

    pub fn next_album(&mut self) {
        let n = self.catalog.albums.len();
        if n > 0 {
            self.album_slide = (self.album_slide + 1) % n;
        }
    }

    pub fn prev_album(&mut self) {
        let n = self.catalog.albums.len();
        if n > 0 {
            self.album_slide = (self.album_slide + n - 1) % n;
        }
    }

    /// The carousel slide on screen with its resolved artwork.
    pub fn current_album(&self) -> Option<(&AlbumSlide, Option<&str>)> {
        let slide = self.catalog.albums.get(self.album_slide)?;
        let source = self
            .albums
            .get(self.album_slide)
            .and_then(|h| h.as_ref())
            .and_then(|h| h.source());
        Some((slide, source))
    }

    /// Resolved banner of the mounted section, if its file exists.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_ref().and_then(|h| h.source())
    }

    /// Resolved source of one of [`UI_ICONS`]; `None` means draw the fallback glyph.
    pub fn icon(&self, name: &str) -> Option<&str> {
        self.ui_icons
            .get(name)
            .and_then(|h| h.as_ref())
            .and_then(|h| h.source())
    }

    /// Platform links paired with their resolved icon source.
    pub fn platforms(&self) -> impl Iterator<Item = (&PlatformLink, Option<&str>)> {
        self.catalog
            .platforms
            .iter()
            .zip(self.icons.iter())
            .map(|(p, icon)| (p, icon.as_ref().and_then(|h| h.source())))
    }
}

/// Resolve `name` and settle it against `probe`. Bad names are logged and
/// yield `None`; an exhausted handle is still returned so its fallback shows.
fn resolve_settled<S: AsRef<str>>(
    name: &str,
    templates: &[S],
    fallback: Option<&str>,
    probe: &dyn AssetProbe,
) -> Option<ResolutionHandle> {
    let mut handle = match resolve(name, templates) {
        Ok(h) => h,
        Err(e) => {
            warn!("cannot resolve asset '{name}': {e}");
            return None;
        }
    };
    if let Some(fb) = fallback {
        handle = handle.with_fallback(fb);
    }
    if let Err(e) = handle.settle_with(probe) {
        debug!("{e}");
    }
    Some(handle)
}

use super::*;
use crate::assets::AssetProbe;
use crate::catalog::{Catalog, TrackKind, VideoList};
use crate::config::{AssetSettings, SectionSetting};
use crate::playback::{ElementStatus, HandleId, MediaElement, PlayOutcome, StartRejected};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};

type Log = Rc<RefCell<Vec<String>>>;

struct FakeElement {
    source: String,
    log: Log,
    reject: bool,
    duration: f64,
}

impl MediaElement for FakeElement {
    fn start(&mut self) -> Result<(), StartRejected> {
        self.log.borrow_mut().push(format!("start {}", self.source));
        if self.reject {
            return Err(StartRejected::new("blocked"));
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push(format!("pause {}", self.source));
    }

    fn status(&self) -> ElementStatus {
        ElementStatus {
            duration: self.duration,
            ..ElementStatus::default()
        }
    }
}

struct SetProbe(HashSet<String>);

impl AssetProbe for SetProbe {
    fn loads(&self, source: &str) -> bool {
        self.0.contains(source)
    }
}

const CATALOG: &str = r#"
[artist]
name = "Erness"
tagline = "Music"
contact_email = "contacto@example.com"

[[albums]]
id = "al1"
file_base = "album-home01"
alt = "First"

[[albums]]
id = "al2"
file_base = "album-home02"
alt = "Second"

[[platforms]]
label = "Spotify"
icon = "spotify"
url = "https://open.spotify.com"

[[originals]]
id = 1
title = "One"
artist = "Erness"
file_base = "one"
audio_base = "one"

[[originals]]
id = 2
title = "Two"
artist = "Erness"
file_base = "two"
audio_base = "two"

[[covers]]
id = 1
title = "Cover"
artist = "Erness"
file_base = "cover"
audio_base = "cover"

[[upcoming]]
id = "up1"
title = "Soon"
source = { provider = "screenpal", id = "abc" }

[[news]]
id = 1
title = "Hello"
excerpt = "World"
date = "2024-01-01"
category = "release"
"#;

fn app_with(files: &[&str], reject: bool, log: &Log) -> App<FakeElement> {
    app_with_duration(files, reject, 0.0, log)
}

fn app_with_duration(
    files: &[&str],
    reject: bool,
    duration: f64,
    log: &Log,
) -> App<FakeElement> {
    let catalog = Catalog::from_toml_str(CATALOG).unwrap();
    let probe = SetProbe(files.iter().map(|s| s.to_string()).collect());
    let assets = AssetSettings {
        cover_fallback: Some("fallback.png".into()),
        ..AssetSettings::default()
    };
    let log = log.clone();
    let factory: ElementFactory<FakeElement> = Box::new(move |source: &str| FakeElement {
        source: source.to_string(),
        log: log.clone(),
        reject,
        duration,
    });
    App::new(
        catalog,
        assets,
        Duration::from_millis(50),
        Box::new(probe),
        factory,
    )
}

fn app(log: &Log) -> App<FakeElement> {
    app_with(&["one.wav", "two.mp3", "cover.wav"], false, log)
}

#[test]
fn sections_cycle_and_map_from_digits() {
    assert_eq!(Section::Home.next(), Section::Originals);
    assert_eq!(Section::Home.prev(), Section::News);
    assert_eq!(Section::News.next(), Section::Home);
    assert_eq!(Section::from_digit('4'), Some(Section::Beats));
    assert_eq!(Section::from_digit('0'), None);
    assert_eq!(Section::from_digit('7'), None);
    assert_eq!(Section::from(SectionSetting::Videos), Section::Videos);
}

#[test]
fn home_mounts_originals_and_lists_upcoming_and_news() {
    let log = Log::default();
    let mut a = app(&log);
    a.navigate(Section::Home);

    assert_eq!(a.coordinator.len(), 2);
    let cards = a.cards();
    assert_eq!(cards.len(), 4);
    assert_eq!(
        cards[2],
        Card::Video {
            list: VideoList::Upcoming,
            index: 0
        }
    );
    assert_eq!(cards[3], Card::News { index: 0 });
}

#[test]
fn audio_source_follows_template_fallbacks() {
    let log = Log::default();
    let mut a = app(&log);
    a.navigate(Section::Originals);

    assert_eq!(a.mounted_track(TrackKind::Original, 0).unwrap().audio_source, "one.wav");
    assert_eq!(a.mounted_track(TrackKind::Original, 1).unwrap().audio_source, "two.mp3");
}

#[test]
fn missing_artwork_shows_the_fallback() {
    let log = Log::default();
    let mut a = app_with(&["one.wav", "players/images/two.webp"], false, &log);
    a.navigate(Section::Originals);

    let one = a.mounted_track(TrackKind::Original, 0).unwrap();
    let art = one.artwork.as_ref().unwrap();
    assert!(art.is_exhausted());
    assert_eq!(art.source(), Some("fallback.png"));

    let two = a.mounted_track(TrackKind::Original, 1).unwrap();
    assert_eq!(
        two.artwork.as_ref().unwrap().source(),
        Some("players/images/two.webp")
    );
}

#[test]
fn activating_a_track_toggles_it() {
    let log = Log::default();
    let mut a = app(&log);
    a.navigate(Section::Originals);

    assert_eq!(a.activate_selected().unwrap(), Some(PlayOutcome::Started));
    assert!(a.coordinator.is_playing(&HandleId::from("originals:1")));
    assert_eq!(a.activate_selected().unwrap(), Some(PlayOutcome::Paused));
    assert_eq!(a.coordinator.playing_count(), 0);
    assert_eq!(*log.borrow(), vec!["start one.wav", "pause one.wav"]);
}

#[test]
fn playing_another_card_pauses_the_first() {
    let log = Log::default();
    let mut a = app(&log);
    a.navigate(Section::Originals);

    a.activate_selected().unwrap();
    a.next();
    a.activate_selected().unwrap();

    assert_eq!(a.coordinator.active(), Some(&HandleId::from("originals:2")));
    assert_eq!(a.coordinator.playing_count(), 1);
    assert_eq!(
        *log.borrow(),
        vec!["start one.wav", "pause one.wav", "start two.mp3"]
    );
}

#[test]
fn switching_sections_unmounts_and_stops_audio() {
    let log = Log::default();
    let mut a = app(&log);
    a.navigate(Section::Originals);
    a.activate_selected().unwrap();

    a.navigate(Section::Covers);

    assert_eq!(a.coordinator.active(), None);
    assert_eq!(a.coordinator.len(), 1);
    assert!(a.coordinator.is_registered(&HandleId::from("covers:1")));
    assert_eq!(log.borrow().last().unwrap(), "pause one.wav");
    assert_eq!(a.selected, 0);
}

#[test]
fn navigating_to_the_current_section_keeps_playback() {
    let log = Log::default();
    let mut a = app(&log);
    a.navigate(Section::Originals);
    a.activate_selected().unwrap();

    a.navigate(Section::Originals);

    assert!(a.coordinator.is_playing(&HandleId::from("originals:1")));
}

#[test]
fn selection_wraps_within_the_section() {
    let log = Log::default();
    let mut a = app(&log);
    a.navigate(Section::Originals);

    a.prev();
    assert_eq!(a.selected, 1);
    a.next();
    assert_eq!(a.selected, 0);
}

#[test]
fn video_cards_open_an_overlay_that_escape_closes() {
    let log = Log::default();
    let mut a = app(&log);
    a.navigate(Section::Home);
    a.selected = 2;

    assert_eq!(a.activate_selected().unwrap(), None);
    assert_eq!(a.open_video, Some((VideoList::Upcoming, 0)));
    assert!(a.close_overlay());
    assert_eq!(a.open_video, None);
    assert!(!a.close_overlay());
}

#[test]
fn menu_choice_navigates_and_closes() {
    let log = Log::default();
    let mut a = app(&log);
    a.navigate(Section::Home);

    a.toggle_menu();
    assert!(a.menu_open);
    assert_eq!(a.menu_cursor, 0);
    a.menu_next();
    a.menu_next();
    a.menu_choose();

    assert!(!a.menu_open);
    assert_eq!(a.section, Section::Covers);
}

#[test]
fn rejected_start_gives_up_after_one_retry() {
    let log = Log::default();
    let mut a = app_with(&["one.wav"], true, &log);
    a.navigate(Section::Originals);

    assert_eq!(
        a.activate_selected().unwrap(),
        Some(PlayOutcome::RetryScheduled)
    );
    assert!(a.status.is_some());

    a.tick(Instant::now() + Duration::from_secs(1));

    assert_eq!(a.status.as_deref(), Some("playback could not start"));
    assert_eq!(a.coordinator.playing_count(), 0);
    assert_eq!(*log.borrow(), vec!["start one.wav", "start one.wav"]);
}

#[test]
fn platform_icons_resolve_through_templates() {
    let log = Log::default();
    let a = app_with(&["icons/spotify.png"], false, &log);
    let platforms: Vec<_> = a.platforms().collect();
    assert_eq!(platforms.len(), 1);
    assert_eq!(platforms[0].0.label, "Spotify");
    assert_eq!(platforms[0].1, Some("icons/spotify.png"));
}

#[test]
fn album_slides_chase_their_artwork_candidates() {
    let log = Log::default();
    let mut a = app_with(&["album-home01.jpeg"], false, &log);

    let (slide, source) = a.current_album().unwrap();
    assert_eq!(slide.alt, "First");
    assert_eq!(source, Some("album-home01.jpeg"));

    a.next_album();
    let (slide, source) = a.current_album().unwrap();
    assert_eq!(slide.id, "al2");
    assert_eq!(source, None);

    a.next_album();
    assert_eq!(a.album_slide, 0);
    a.prev_album();
    assert_eq!(a.album_slide, 1);
}

#[test]
fn album_artwork_prefers_earlier_extensions() {
    let log = Log::default();
    let a = app_with(&["album-home01.webp", "album-home01.jpg"], false, &log);
    assert_eq!(a.current_album().unwrap().1, Some("album-home01.jpg"));
}

#[test]
fn section_banners_and_header_icons_resolve() {
    let log = Log::default();
    let mut a = app_with(
        &["originalsbanner.png", "icons/album.svg", "icons/calendar.png"],
        false,
        &log,
    );

    a.navigate(Section::Originals);
    assert_eq!(a.banner(), Some("originalsbanner.png"));
    assert_eq!(a.icon(a.section.header_icon()), Some("icons/album.svg"));

    a.navigate(Section::Covers);
    assert_eq!(a.banner(), None);

    a.navigate(Section::News);
    assert_eq!(a.banner(), None);
    assert_eq!(a.icon("calendar"), Some("icons/calendar.png"));
    assert_eq!(a.icon(a.section.header_icon()), None);
    assert_eq!(a.icon("not-a-ui-icon"), None);
}

#[test]
fn mounted_cards_show_known_duration_before_playing() {
    let log = Log::default();
    let mut a = app_with_duration(&["one.wav", "two.mp3"], false, 185.0, &log);
    a.navigate(Section::Originals);

    let progress = a.coordinator.progress(&HandleId::from("originals:2")).unwrap();
    assert_eq!(progress.duration, Some(185.0));
    assert_eq!(progress.current_time, 0.0);
    assert_eq!(a.coordinator.active(), None);
    assert!(log.borrow().is_empty());
}

#[test]
fn unknown_duration_stays_unknown_after_mount() {
    let log = Log::default();
    let mut a = app_with_duration(&["one.wav"], false, f64::NAN, &log);
    a.navigate(Section::Originals);

    let progress = a.coordinator.progress(&HandleId::from("originals:1")).unwrap();
    assert_eq!(progress.duration, None);
}

#[test]
fn leaving_a_section_clears_its_status_message() {
    let log = Log::default();
    let mut a = app_with(&["one.wav"], true, &log);
    a.navigate(Section::Originals);
    a.activate_selected().unwrap();
    assert!(a.status.is_some());

    a.navigate(Section::Covers);

    assert_eq!(a.status, None);
    a.tick(Instant::now() + Duration::from_secs(1));
    assert_eq!(a.status, None);
}

#[test]
fn home_lists_a_limited_number_of_originals() {
    let log = Log::default();
    let mut a = app(&log);
    a.home_originals = 1;
    a.navigate(Section::Home);

    assert_eq!(a.coordinator.len(), 1);
    assert!(a.coordinator.is_registered(&HandleId::from("originals:1")));
    assert!(!a.coordinator.is_registered(&HandleId::from("originals:2")));
    let cards = a.cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(
        cards[1],
        Card::Video {
            list: VideoList::Upcoming,
            index: 0
        }
    );

    a.navigate(Section::Originals);
    assert_eq!(a.coordinator.len(), 2);
}

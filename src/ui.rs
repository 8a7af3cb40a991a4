//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Tabs, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Card, MountedTrack, Section};
use crate::catalog::{Track, TrackKind, VideoList};
use crate::config::UiSettings;
use crate::playback::{HandleState, MediaElement, Progress, format_time};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("h/l", "prev/next section");
    map.insert("1-6", "jump to section");
    map.insert("enter/space", "play/pause or open");
    map.insert("m", "menu");
    map.insert("[/]", "album slide");
    map.insert("esc", "close");
    map.insert("q", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "j/k", "h/l", "1-6", "enter/space", "gg/G", "[/]", "m", "esc", "q",
    ];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{k}] {v}")))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// `m:ss / m:ss`; an unknown duration renders as `0:00`.
fn time_label(p: &Progress) -> String {
    format!(
        "{} / {}",
        format_time(p.current_time),
        format_time(p.duration.unwrap_or(0.0))
    )
}

/// A resolved icon is shown by its source; a missing one by `glyph`.
fn icon_or(source: Option<&str>, glyph: &str) -> String {
    match source {
        Some(s) => format!("[{s}]"),
        None => glyph.to_string(),
    }
}

/// Leading marker of a track card: playing, selected-but-idle, or neither.
fn card_marker(is_active: bool, state: Option<HandleState>) -> &'static str {
    match (is_active, state) {
        (true, Some(HandleState::Playing)) => "▶ ",
        (true, _) => "⏸ ",
        _ => "  ",
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller and avoid covering the entire UI.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

fn track_item<'a, E: MediaElement>(
    app: &'a App<E>,
    kind: TrackKind,
    track: &'a Track,
    mounted: Option<&'a MountedTrack>,
) -> ListItem<'a> {
    let is_active = mounted.is_some_and(|m| app.coordinator.active() == Some(&m.id));
    let state = mounted.and_then(|m| app.coordinator.state(&m.id));

    let mut first = vec![
        Span::raw(card_marker(is_active, state)),
        Span::styled(track.title.as_str(), Style::default().bold()),
    ];
    if !track.card_label.is_empty() {
        first.push(Span::raw(format!("  [{}]", track.card_label)));
    }
    if is_active && let Some(p) = mounted.and_then(|m| app.coordinator.progress(&m.id)) {
        first.push(Span::styled(
            format!("  {}", time_label(&p)),
            Style::default().fg(Color::Cyan),
        ));
    }

    let mut second = format!("    {}", track.byline());
    if kind == TrackKind::Cover
        && let Some(orig) = &track.original_artist
    {
        second.push_str(&format!(" (original: {orig})"));
    }
    for extra in [&track.subtitle, &track.genre, &track.release_date] {
        if !extra.is_empty() {
            second.push_str(&format!(" • {extra}"));
        }
    }
    if !track.platforms.is_empty() {
        second.push_str(&format!(" • on {}", track.platforms.join(", ")));
    }

    let art = mounted
        .and_then(|m| m.artwork.as_ref())
        .and_then(|h| h.source())
        .unwrap_or("no artwork");
    let audio = mounted.map_or("", |m| m.audio_source.as_str());
    let third = format!("    art: {art} • audio: {audio}");

    ListItem::new(Text::from(vec![
        Line::from(first),
        Line::from(second).dim(),
        Line::from(third).dim(),
    ]))
}

fn card_item<'a, E: MediaElement>(app: &'a App<E>, card: Card) -> ListItem<'a> {
    match card {
        Card::Track { kind, index } => match app.track(kind, index) {
            Some(track) => track_item(app, kind, track, app.mounted_track(kind, index)),
            None => ListItem::new(""),
        },
        Card::Video { list, index } => match app.video(list, index) {
            Some(video) => {
                let badge = match list {
                    VideoList::Published => "🎬",
                    VideoList::Upcoming => "⏳",
                };
                let mut lines = vec![Line::from(vec![
                    Span::raw(format!("{badge} ")),
                    Span::styled(video.title.as_str(), Style::default().bold()),
                ])];
                let meta = if video.channel.is_empty() {
                    video.source.provider_name().to_string()
                } else {
                    format!("{} • {}", video.channel, video.source.provider_name())
                };
                let share = icon_or(app.icon("share"), "⇪");
                lines.push(Line::from(format!("    {meta} • {share} share")).dim());
                ListItem::new(Text::from(lines))
            }
            None => ListItem::new(""),
        },
        Card::News { index } => match app.news_item(index) {
            Some(item) => ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", item.category.label()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(item.title.as_str(), Style::default().bold()),
                    Span::raw(format!(
                        "  {} {}",
                        icon_or(app.icon("calendar"), "📅"),
                        item.date
                    )),
                ]),
                Line::from(format!("    {}", item.excerpt)).dim(),
            ])),
            None => ListItem::new(""),
        },
    }
}

/// Carousel line: slide position, label and resolved artwork.
fn album_line<E: MediaElement>(app: &App<E>) -> String {
    let total = app.catalog.albums.len();
    match app.current_album() {
        Some((slide, source)) => format!(
            "‹ Album {}/{total}: {} {} ›",
            app.album_slide + 1,
            slide.alt,
            source.unwrap_or("(artwork missing)")
        ),
        None => String::new(),
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<E: MediaElement>(frame: &mut Frame, app: &App<E>, ui_settings: &UiSettings) {
    let hero_height = if app.section == Section::Home && app.show_hero {
        7
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(hero_height),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Navigation
    let tabs = Tabs::new(Section::ALL.iter().map(|s| s.label()).collect::<Vec<_>>())
        .select(app.section.position())
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .divider(" | ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(ui_settings.header_text.as_str())
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(tabs, chunks[0]);

    // Hero
    if hero_height > 0 {
        let artist = &app.catalog.artist;
        let platforms = app
            .platforms()
            .map(|(p, icon)| match icon {
                Some(icon) => format!("{} ({icon})", p.label),
                None => p.label.clone(),
            })
            .collect::<Vec<_>>()
            .join(" • ");
        let hero = Paragraph::new(Text::from(vec![
            Line::from(artist.tagline.as_str()).bold(),
            Line::from(artist.bio.as_str()),
            Line::from(format!("Listen on: {platforms}")).dim(),
            Line::from(album_line(app)),
        ]))
        .block(padded(format!(" {} ", artist.name)))
        .wrap(Wrap { trim: true });
        frame.render_widget(hero, chunks[1]);
    }

    // Now playing
    {
        let active = app.coordinator.active();
        let now = active.and_then(|id| {
            app.mounted_tracks()
                .iter()
                .find(|m| &m.id == id)
                .and_then(|m| app.track(m.kind, m.index))
                .zip(app.coordinator.progress(id))
        });
        let (ratio, label) = match now {
            Some((track, p)) => {
                let state = if active.is_some_and(|id| app.coordinator.is_playing(id)) {
                    "Playing"
                } else {
                    "Paused"
                };
                (
                    p.fraction(),
                    format!("{state}: {} [{}]", track.title, time_label(&p)),
                )
            }
            None => (0.0, "Stopped".to_string()),
        };
        let title = match &app.status {
            Some(msg) => format!(" {msg} "),
            None => " now playing ".to_string(),
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(title))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(label);
        frame.render_widget(gauge, chunks[2]);
    }

    // Cards
    {
        let cards = app.cards();
        let items: Vec<ListItem> = cards.iter().map(|c| card_item(app, *c)).collect();
        let glyph = match app.section.header_icon() {
            "video" => "🎬",
            "clock" => "🕒",
            _ => "💿",
        };
        let title = format!(
            " {} {} ",
            icon_or(app.icon(app.section.header_icon()), glyph),
            app.section.label().to_lowercase()
        );
        let mut block = Block::default().borders(Borders::ALL).title(title);
        if let Some(banner) = app.banner() {
            block = block.title_bottom(format!(" banner: {banner} "));
        }
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if !cards.is_empty() {
            state.select(Some(app.selected.min(cards.len() - 1)));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    // Video overlay (keeps the list visible under it)
    if let Some((list, index)) = app.open_video
        && let Some(video) = app.video(list, index)
    {
        let popup_area = centered_rect_sized(80, 11, chunks[3]);
        frame.render_widget(Clear, popup_area);

        let mut lines = vec![
            Line::from(video.title.as_str()).bold(),
            Line::from(format!("Provider: {}", video.source.provider_name())),
            Line::from(format!("Embed: {}", video.embed_url())),
        ];
        if let Some(thumb) = video.thumbnail_url() {
            lines.push(Line::from(format!("Thumbnail: {thumb}")));
        }
        if !video.subtitles.is_empty() {
            lines.push(Line::from(format!("Subtitles: {}", video.subtitles.join(", "))));
        }
        if !video.tags.is_empty() {
            lines.push(Line::from(format!("Tags: {}", video.tags.join(" "))).dim());
        }
        let popup = Paragraph::new(Text::from(lines))
            .block(padded(" video (esc closes) "))
            .wrap(Wrap { trim: true });
        frame.render_widget(popup, popup_area);
    }

    // Menu overlay
    if app.menu_open {
        let popup_area = centered_rect_sized(30, Section::ALL.len() as u16 + 2, frame.area());
        frame.render_widget(Clear, popup_area);
        let items: Vec<ListItem> = Section::ALL
            .iter()
            .map(|s| ListItem::new(s.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" menu "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(app.menu_cursor));
        frame.render_stateful_widget(menu, popup_area, &mut state);
    }

    // Footer
    let artist = &app.catalog.artist;
    let mut contact = format!("Contact: {}", artist.contact_email);
    if !artist.copyright.is_empty() {
        contact.push_str(&format!(" • {}", artist.copyright));
    }
    let footer = Paragraph::new(Text::from(vec![
        Line::from(contact),
        Line::from(controls_text()).dim(),
    ]))
    .block(padded(" controls "))
    .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests;

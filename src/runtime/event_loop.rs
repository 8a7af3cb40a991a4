use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Section};
use crate::audio::RodioElement;
use crate::config;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: advances playback bookkeeping, draws and handles
/// input. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<RodioElement>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Deferred start retries and the active element's clock are driven here.
        app.tick(Instant::now());

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, state) {
                    break;
                }
            }
        }
    }

    // Leave nothing playing behind the restored terminal.
    app.coordinator.unregister_all();
    Ok(())
}

/// Apply one key press to `app`. Returns `true` when the app should quit.
pub fn handle_key_event<E: crate::playback::MediaElement>(
    key: KeyEvent,
    app: &mut App<E>,
    state: &mut EventLoopState,
) -> bool {
    let gg = std::mem::take(&mut state.pending_gg);

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.menu_open {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('j') | KeyCode::Down => app.menu_next(),
            KeyCode::Char('k') | KeyCode::Up => app.menu_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => app.menu_choose(),
            KeyCode::Esc | KeyCode::Char('m') => {
                app.close_overlay();
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => {
            app.close_overlay();
        }
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => app.next_section(),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => app.prev_section(),
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(section) = Section::from_digit(c) {
                app.navigate(section);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('g') => {
            if gg {
                app.selected = 0;
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            app.selected = app.cards().len().saturating_sub(1);
        }
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('[') => app.prev_album(),
        KeyCode::Char(']') => app.next_album(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Err(e) = app.activate_selected() {
                warn!("{e}");
            }
        }
        _ => {}
    }

    false
}

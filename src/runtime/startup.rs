use std::time::Duration;

use log::info;

use crate::app::{App, ElementFactory, Section};
use crate::assets::FsProbe;
use crate::audio::{AudioOutput, RodioElement};
use crate::catalog::Catalog;
use crate::config;

/// Build the app from settings and mount the configured start section.
pub fn build_app(
    catalog: Catalog,
    output: &AudioOutput,
    settings: &config::Settings,
) -> App<RodioElement> {
    let root = settings.assets.root.clone();
    let mixer = output.mixer();
    let volume = settings.playback.volume;

    let locate = FsProbe::new(root.clone());
    let make_element: ElementFactory<RodioElement> = Box::new(move |source: &str| {
        RodioElement::new(locate.locate(source), mixer.clone(), volume)
    });

    let mut app = App::new(
        catalog,
        settings.assets.clone(),
        Duration::from_millis(settings.playback.retry_delay_ms),
        Box::new(FsProbe::new(root)),
        make_element,
    );

    // UI defaults
    app.show_hero = settings.ui.show_hero;
    app.home_originals = settings.ui.home_originals;

    let start = Section::from(settings.ui.start_section);
    app.navigate(start);
    info!(
        "started on {} (audio output {})",
        start.label(),
        if output.is_available() { "ready" } else { "missing" }
    );

    app
}

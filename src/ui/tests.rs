use super::*;

#[test]
fn controls_text_lists_every_binding_once() {
    let text = controls_text();
    assert!(text.starts_with("[j/k] up/down"));
    assert!(text.ends_with("[q] quit"));
    assert_eq!(text.matches(" | ").count(), CONTROLS_MAP.len() - 1);
}

#[test]
fn time_label_shows_zero_for_unknown_duration() {
    let p = Progress {
        current_time: 83.4,
        duration: None,
    };
    assert_eq!(time_label(&p), "1:23 / 0:00");

    let p = Progress {
        current_time: 5.0,
        duration: Some(200.0),
    };
    assert_eq!(time_label(&p), "0:05 / 3:20");
}

#[test]
fn only_the_active_card_gets_a_marker() {
    assert_eq!(card_marker(true, Some(HandleState::Playing)), "▶ ");
    assert_eq!(card_marker(true, Some(HandleState::Idle)), "⏸ ");
    assert_eq!(card_marker(false, Some(HandleState::Playing)), "  ");
    assert_eq!(card_marker(false, None), "  ");
}

#[test]
fn centered_rect_stays_inside_the_area() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 10,
    };
    let r = centered_rect_sized(80, 11, area);
    assert_eq!(r.width, 38);
    assert_eq!(r.height, 8);
    assert_eq!(r.x, 1);
    assert_eq!(r.y, 1);
}

#[test]
fn missing_icons_fall_back_to_a_glyph() {
    assert_eq!(icon_or(Some("icons/album.svg"), "💿"), "[icons/album.svg]");
    assert_eq!(icon_or(None, "💿"), "💿");
}

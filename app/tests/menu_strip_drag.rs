use storefront::app::{DragEnd, Extent, MenuStrip, SectionId};

/// Twenty entries, 10 wide, 2 apart: 238 columns of content.
fn wide_strip(viewport: i32) -> MenuStrip {
    let entries = (0..20)
        .map(|i| (SectionId::new("entry"), Extent::new(i * 12, 10)))
        .collect();
    MenuStrip::new(entries, viewport, 2, 0.35)
}

#[test]
fn drag_from_100_to_80_moves_offset_50_to_90() {
    let mut strip = wide_strip(50);
    strip.pan_by(50);
    assert_eq!(strip.scroll_left(), 50);

    strip.pointer_down(100);
    assert!(strip.is_dragging());
    assert!(strip.pointer_move(80));
    assert_eq!(strip.scroll_left(), 90);
    assert_eq!(strip.pointer_up(), Some(DragEnd::Panned));
    assert!(!strip.is_dragging());
}

#[test]
fn drag_offset_matches_formula_and_is_clamped() {
    let max = 238 - 50;
    for (start, p0, p1) in [(0, 10, 5), (50, 100, 130), (120, 40, 0), (10, 60, 70), (0, 0, -200)] {
        let mut strip = wide_strip(50);
        strip.pan_by(start);
        strip.pointer_down(p0);
        strip.pointer_move(p1);
        let expected = (start - (p1 - p0) * 2).clamp(0, max);
        assert_eq!(strip.scroll_left(), expected, "start {} p0 {} p1 {}", start, p0, p1);
    }
}

#[test]
fn moves_are_relative_to_drag_start_not_previous_move() {
    let mut strip = wide_strip(50);
    strip.pointer_down(60);
    strip.pointer_move(50);
    strip.pointer_move(40);
    assert_eq!(strip.scroll_left(), 40);
}

#[test]
fn leaving_the_strip_ends_the_drag() {
    let mut strip = wide_strip(50);
    strip.pointer_down(60);
    strip.pointer_move(55);
    strip.pointer_leave();
    assert!(!strip.is_dragging());
    assert!(!strip.pointer_move(0));
    assert_eq!(strip.scroll_left(), 10);
    // Leaving is never reported as a click.
    assert_eq!(strip.pointer_up(), None);
}

#[test]
fn drag_aborts_in_flight_auto_follow_and_is_counted() {
    let mut strip = wide_strip(50);
    assert_eq!(strip.follow(Extent::new(120, 10)), Some(120));
    strip.tick();
    let mid = strip.scroll_left();
    assert!(mid > 0 && mid < 120);

    strip.pointer_down(30);
    strip.pointer_move(35);
    assert_eq!(strip.scroll_left(), mid - 10);
    assert_eq!(strip.destination(), strip.scroll_left());
    assert_eq!(strip.contended_adjustments(), 1);
}

#[test]
fn auto_follow_during_drag_still_runs_and_is_counted() {
    let mut strip = wide_strip(50);
    strip.pointer_down(30);
    assert_eq!(strip.follow(Extent::new(180, 10)), Some(180));
    assert_eq!(strip.contended_adjustments(), 1);
    assert!(strip.is_dragging());
}

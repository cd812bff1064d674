use ratatui::layout::Rect;
use storefront::app::settings::Settings;
use storefront::app::SectionId;
use storefront::input::mouse::mouse_event;
use storefront::input::{MouseButton, MouseEventKind};
use storefront::runner::handlers::handle_mouse;
use storefront::ui::viewport_for;
use storefront::App;

const TERM: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn app() -> App {
    App::new(Settings::default(), viewport_for(TERM))
}

fn send(app: &mut App, kind: MouseEventKind, col: u16, row: u16) {
    handle_mouse(app, mouse_event(kind, col, row), TERM);
}

#[test]
fn dragging_the_strip_pans_by_twice_the_pointer_travel() {
    let mut app = app();
    send(&mut app, MouseEventKind::Down(MouseButton::Left), 50, 1);
    assert!(app.menu.is_dragging());
    send(&mut app, MouseEventKind::Drag(MouseButton::Left), 40, 1);
    assert_eq!(app.menu.scroll_left(), 20.min(app.menu.max_scroll()));
    send(&mut app, MouseEventKind::Up(MouseButton::Left), 40, 1);
    assert!(!app.menu.is_dragging());
    // A pan is not a click: the page stays put.
    assert_eq!(app.page.destination(), 0);
}

#[test]
fn dragging_out_of_the_strip_ends_the_drag() {
    let mut app = app();
    send(&mut app, MouseEventKind::Down(MouseButton::Left), 50, 1);
    send(&mut app, MouseEventKind::Drag(MouseButton::Left), 40, 5);
    assert!(!app.menu.is_dragging());
    assert_eq!(app.menu.scroll_left(), 0);
    send(&mut app, MouseEventKind::Drag(MouseButton::Left), 30, 1);
    assert_eq!(app.menu.scroll_left(), 0);
}

#[test]
fn clicking_an_entry_scrolls_to_its_section() {
    let mut app = app();
    let section2 = SectionId::new("section2");
    let entry = app.layout.get(section2).unwrap().menu_entry;
    let col = 1 + entry.start as u16 + 1;

    send(&mut app, MouseEventKind::Down(MouseButton::Left), col, 1);
    send(&mut app, MouseEventKind::Up(MouseButton::Left), col, 1);
    app.settle();
    assert_eq!(app.page.current(), app.layout.get(section2).unwrap().region.start);
    assert_eq!(app.active_section(), Some(section2));
}

#[test]
fn toggle_opens_side_panel() {
    let mut app = app();
    send(&mut app, MouseEventKind::Down(MouseButton::Left), 76, 1);
    assert!(app.side_panel.is_open());
    assert!(!app.menu.is_dragging());
    app.settle();
    assert!(app.side_panel.visible_width() > 0);
}

#[test]
fn wheel_scrolls_page_or_pans_strip() {
    let mut app = app();
    send(&mut app, MouseEventKind::ScrollDown, 10, 10);
    assert_eq!(app.page.current(), 3);
    send(&mut app, MouseEventKind::ScrollDown, 10, 1);
    assert_eq!(app.menu.scroll_left(), 4);
    send(&mut app, MouseEventKind::ScrollUp, 10, 1);
    assert_eq!(app.menu.scroll_left(), 0);
}

#[test]
fn wheel_over_open_side_panel_does_not_scroll_page() {
    let mut app = app();
    send(&mut app, MouseEventKind::Down(MouseButton::Left), 76, 1);
    app.settle();
    send(&mut app, MouseEventKind::ScrollDown, 75, 10);
    assert_eq!(app.page.current(), 0);
    // The part of the page left of the panel still scrolls.
    send(&mut app, MouseEventKind::ScrollDown, 10, 10);
    assert_eq!(app.page.current(), 3);
}

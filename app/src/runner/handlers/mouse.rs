use ratatui::layout::Rect;
use tracing::trace;

use crate::app::core::navigation::{WHEEL_COLUMNS, WHEEL_ROWS};
use crate::app::App;
use crate::input::mouse::is_inside;
use crate::input::{MouseButton, MouseEvent, MouseEventKind};
use crate::ui::{screen_areas, side_panel_area};

/// Dispatch a mouse event, mapping coordinates to screen regions for a
/// terminal of size `term`.
///
/// Left button down/drag/up on the menu strip drive drag-panning; a press
/// and release without movement is a click on the entry under the pointer.
/// Leaving the strip mid-drag ends the drag.
pub fn handle_mouse(app: &mut App, me: MouseEvent, term: Rect) {
    let areas = screen_areas(term);
    let in_strip = is_inside(&me, areas.strip);
    // The open side panel sits on top of the page and swallows the wheel.
    let on_panel = side_panel_area(&areas, app.side_panel.visible_width())
        .is_some_and(|panel| is_inside(&me, panel));
    let on_page = is_inside(&me, areas.content) && !on_panel;
    let x = me.column as i32;

    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if is_inside(&me, areas.toggle) {
                app.side_panel.toggle();
            } else if in_strip {
                app.menu.pointer_down(x);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if app.menu.is_dragging() => {
            if in_strip {
                app.menu.pointer_move(x);
            } else {
                app.menu.pointer_leave();
            }
        }
        MouseEventKind::Moved if app.menu.is_dragging() && !in_strip => {
            app.menu.pointer_leave();
        }
        MouseEventKind::Up(MouseButton::Left) if app.menu.is_dragging() => {
            if in_strip {
                let origin = areas.strip.x as i32;
                let scroll = app.menu.scroll_left();
                if let Some(id) = app.release_menu_pointer(move |col| col - origin + scroll) {
                    trace!(section = %id, "menu entry clicked");
                }
            } else {
                app.menu.pointer_leave();
            }
        }
        MouseEventKind::ScrollDown => {
            if in_strip {
                app.menu.pan_by(WHEEL_COLUMNS);
            } else if on_page {
                app.scroll_page_by(WHEEL_ROWS);
            }
        }
        MouseEventKind::ScrollUp => {
            if in_strip {
                app.menu.pan_by(-WHEEL_COLUMNS);
            } else if on_page {
                app.scroll_page_by(-WHEEL_ROWS);
            }
        }
        MouseEventKind::ScrollRight if in_strip => {
            app.menu.pan_by(WHEEL_COLUMNS);
        }
        MouseEventKind::ScrollLeft if in_strip => {
            app.menu.pan_by(-WHEEL_COLUMNS);
        }
        _ => {}
    }
}

// Mouse input type aliases and small geometry helpers.
pub use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use crossterm::event::KeyModifiers;
use ratatui::layout::{Position, Rect};

/// True when the event happened inside `area`.
pub fn is_inside(me: &MouseEvent, area: Rect) -> bool {
    area.contains(Position::new(me.column, me.row))
}

/// Build a mouse event without modifiers.
pub fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

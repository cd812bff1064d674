pub mod async_input;
pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use mouse::{MouseButton, MouseEvent, MouseEventKind};

use crossterm::event::Event;

/// Terminal events the runner reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Ignore key releases/repeats reported by terminals with the
            // kitty keyboard protocol enabled.
            Event::Key(k) if k.kind == crossterm::event::KeyEventKind::Press => InputEvent::Key(k),
            Event::Mouse(m) => InputEvent::Mouse(m),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

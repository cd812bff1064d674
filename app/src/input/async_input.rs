use crossterm::event::EventStream;
use futures_util::stream::StreamExt;
use tracing::warn;

use super::InputEvent;

/// Async stream of terminal events.
///
/// Thin wrapper around `crossterm::event::EventStream` that maps raw events
/// into [`InputEvent`]. Errors from the underlying stream are treated as
/// best-effort: they are logged and the listener keeps going, so transient
/// errors do not terminate the UI.
pub struct InputStream {
    inner: EventStream,
}

impl InputStream {
    pub fn new() -> Self {
        InputStream {
            inner: EventStream::new(),
        }
    }

    /// Next event, or `None` once the terminal stream has ended.
    pub async fn next_event(&mut self) -> Option<InputEvent> {
        while let Some(result) = self.inner.next().await {
            match result {
                Ok(event) => return Some(event.into()),
                Err(e) => warn!("input event stream error (continuing): {}", e),
            }
        }
        None
    }
}

impl Default for InputStream {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    #[test]
    fn key_release_maps_to_other() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(InputEvent::from(Event::Key(release)), InputEvent::Other);
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(InputEvent::from(Event::Key(press)), InputEvent::Key(press));
    }
}

use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use crate::app::settings::Settings;
use crate::app::App;
use crate::catalog::{CatalogLoader, HttpProductSource};
use crate::input::async_input::InputStream;
use crate::input::InputEvent;
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, Tui};
use crate::ui;

/// Entry point for the TUI: set up the terminal, run the event loop and
/// restore the terminal even when the loop fails.
pub async fn run_app(settings: Settings) -> anyhow::Result<()> {
    let mut terminal = init_terminal(settings.mouse_enabled)?;
    let result = event_loop(&mut terminal, settings).await;
    restore_terminal(terminal)?;
    result
}

async fn event_loop(terminal: &mut Tui, settings: Settings) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let mut term_rect = Rect::new(0, 0, size.width, size.height);
    let tick = Duration::from_millis(settings.tick_ms.max(1));

    let mut app = App::new(settings, ui::viewport_for(term_rect));

    // The one catalog fetch. The loader lives until this function returns;
    // dropping it cancels a fetch that is still in flight.
    let (tx, mut catalog_rx) = mpsc::unbounded_channel();
    let _loader = match HttpProductSource::new(&app.settings.catalog_url) {
        Ok(source) => {
            app.catalog.mark_pending();
            Some(CatalogLoader::spawn(Arc::new(source), tx))
        }
        Err(e) => {
            error!("error fetching products: {}", e);
            None
        }
    };

    let mut input = InputStream::new();
    let mut ticker = time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| ui::ui(f, &app))?;
            needs_render = false;
        }

        tokio::select! {
            maybe_event = input.next_event() => {
                let Some(event) = maybe_event else {
                    info!("input stream closed");
                    break;
                };
                match event {
                    InputEvent::Key(key) => {
                        if handlers::handle_key(&mut app, key) {
                            break;
                        }
                    }
                    InputEvent::Mouse(me) => handlers::handle_mouse(&mut app, me, term_rect),
                    InputEvent::Resize(w, h) => {
                        term_rect = Rect::new(0, 0, w, h);
                        app.resize(ui::viewport_for(term_rect));
                    }
                    InputEvent::Other => {}
                }
                needs_render = true;
            }

            Some(outcome) = catalog_rx.recv() => {
                app.catalog.apply(outcome);
                needs_render = true;
            }

            _ = ticker.tick() => {
                needs_render = app.tick();
            }
        }
    }

    Ok(())
}

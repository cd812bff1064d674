use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::{App, Viewport};

pub mod colors;
pub mod themes;
pub mod widgets;

pub use themes::Theme;

/// Nav bar: top border, the strip line, bottom border.
pub const NAV_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
/// Width of the side panel toggle at the right end of the nav bar.
pub const TOGGLE_WIDTH: u16 = 5;

/// Screen regions shared by the renderer and the mouse handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub nav: Rect,
    pub strip: Rect,
    pub toggle: Rect,
    pub content: Rect,
    pub footer: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    // Nav bar (3), section pages (min), footer help (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let nav = chunks[0];
    let inner = Block::bordered().inner(nav);
    let line_height = inner.height.min(1);
    let toggle_width = TOGGLE_WIDTH.min(inner.width);
    let strip = Rect::new(inner.x, inner.y, inner.width - toggle_width, line_height);
    let toggle = Rect::new(strip.right(), inner.y, toggle_width, line_height);

    ScreenAreas {
        nav,
        strip,
        toggle,
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Core viewport sizes for a terminal of `area`.
pub fn viewport_for(area: Rect) -> Viewport {
    let areas = screen_areas(area);
    Viewport::new(areas.strip.width as i32, areas.content.height as i32)
}

/// Where the side panel currently sits, if any of it is on screen. It
/// overlays the content area and slides in from the right edge.
pub fn side_panel_area(areas: &ScreenAreas, visible_width: i32) -> Option<Rect> {
    let content = areas.content;
    let width = (visible_width.max(0) as u16).min(content.width);
    if width == 0 || content.height == 0 {
        return None;
    }
    Some(Rect::new(content.right() - width, content.y, width, content.height))
}

pub fn ui(f: &mut Frame, app: &App) {
    let areas = screen_areas(f.area());

    widgets::nav_bar::render(f, &areas, app);
    widgets::section_panel::render_page(f, areas.content, app);
    widgets::footer::render(f, areas.footer, app);

    if let Some(area) = side_panel_area(&areas, app.side_panel.visible_width()) {
        widgets::side_panel::render(f, area, &app.side_panel);
    }
}

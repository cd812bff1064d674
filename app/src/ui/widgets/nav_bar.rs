use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::layout::{MENU_GAP, MENU_PADDING};
use crate::app::App;
use crate::ui::colors::current as current_colors;
use crate::ui::ScreenAreas;

/// Build the full (unscrolled) strip line. Entry widths match the section
/// map so column `x` of this line is strip-content column `x`.
pub fn strip_line(app: &App) -> Line<'static> {
    let colors = current_colors();
    let active = app.active_section();
    let pad = " ".repeat(MENU_PADDING as usize);
    let gap = " ".repeat(MENU_GAP as usize);
    let mut spans = Vec::with_capacity(app.sections.len() * 2);
    for (i, section) in app.sections.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(gap.clone(), colors.nav_style));
        }
        let style = if active == Some(section.id) { colors.nav_active_style } else { colors.nav_style };
        spans.push(Span::styled(format!("{}{}{}", pad, section.menu_label(), pad), style));
    }
    Line::from(spans)
}

/// Render the bordered nav bar: scrolled menu strip plus the side panel
/// toggle.
pub fn render(f: &mut Frame, areas: &ScreenAreas, app: &App) {
    let colors = current_colors();
    f.render_widget(Block::bordered().style(colors.nav_style), areas.nav);

    let offset = app.menu.scroll_left().max(0) as u16;
    let strip = Paragraph::new(strip_line(app)).scroll((0, offset)).style(colors.nav_style);
    f.render_widget(strip, areas.strip);

    let toggle = Paragraph::new("🔍").alignment(Alignment::Center).style(colors.toggle_style);
    f.render_widget(toggle, areas.toggle);
}

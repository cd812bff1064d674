use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::app::SidePanel;
use crate::ui::colors::current as current_colors;

/// Render the slide-in panel into `area` (already clipped to the part that
/// is on screen).
pub fn render(f: &mut Frame, area: Rect, panel: &SidePanel) {
    let colors = current_colors();
    let items: Vec<ListItem> = panel.items.iter().map(|s| ListItem::new(s.as_str())).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::LEFT).style(colors.side_panel_style))
        .style(colors.side_panel_style);
    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::app::App;
use crate::ui::colors::current as current_colors;

const HELP: &str = "↑/↓ wheel:scroll  drag menu:pan  click:jump  s:panel  q:quit";

pub fn status_text(app: &App) -> String {
    let products = if app.catalog.is_pending() {
        "loading products…".to_string()
    } else {
        format!("{} products", app.products().len())
    };
    let active = app.active_section().map(|s| s.as_str()).unwrap_or("-");
    format!("{}  |  active: {}  |  {}", products, active, HELP)
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let p = Paragraph::new(status_text(app)).style(colors.footer_style);
    f.render_widget(p, area);
}

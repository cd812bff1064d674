use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::catalog::Product;
use crate::ui::colors::current as current_colors;

/// Rows taken by one card: border, title, price, image, border.
pub const CARD_HEIGHT: u16 = 5;

/// One product in a section grid.
pub struct ProductCard<'a> {
    pub product: &'a Product,
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = current_colors();
        let lines = vec![
            Line::from(Span::styled(self.product.title.as_str(), colors.card_title_style)),
            Line::from(Span::styled(self.product.price_label(), colors.price_style)),
            Line::from(Span::styled(self.product.image.as_str(), colors.image_style)),
        ];
        Paragraph::new(lines)
            .block(Block::bordered().style(colors.card_style))
            .render(area, buf);
    }
}

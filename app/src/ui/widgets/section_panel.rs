use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Widget},
    Frame,
};

use super::product_card::{ProductCard, CARD_HEIGHT};
use crate::app::types::Section;
use crate::app::App;
use crate::catalog::Product;
use crate::ui::colors::current as current_colors;

/// Number of grid columns for a panel of `width` (1 / 2 / 3, like a
/// responsive `grid-cols-*`).
pub fn grid_columns(width: u16) -> u16 {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    }
}

/// A full-height section panel with its product grid.
pub struct SectionPanel<'a> {
    pub section: &'a Section,
    pub products: &'a [Product],
    pub active: bool,
}

impl Widget for SectionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = current_colors();
        let style = if self.active { colors.section_active_block_style } else { colors.section_block_style };
        let block = Block::bordered()
            .title(format!(" {} {} ", self.section.icon, self.section.title))
            .style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        let cols = grid_columns(inner.width);
        let card_width = inner.width / cols;
        if card_width == 0 {
            return;
        }
        for (i, product) in self.products.iter().enumerate() {
            let row = (i as u16) / cols;
            let col = (i as u16) % cols;
            let y = inner.y + row * CARD_HEIGHT;
            // Cards that do not fit the panel are clipped.
            if y + CARD_HEIGHT > inner.bottom() {
                break;
            }
            let card = Rect::new(inner.x + col * card_width, y, card_width, CARD_HEIGHT);
            ProductCard { product }.render(card, buf);
        }
    }
}

/// Copy `dst_area.height` rows of `src`, starting at `src_row`, into `dst`.
fn blit(src: &Buffer, src_row: u16, dst: &mut Buffer, dst_area: Rect) {
    for dy in 0..dst_area.height {
        for dx in 0..dst_area.width {
            let Some(cell) = src.cell((dx, src_row + dy)) else {
                continue;
            };
            if let Some(target) = dst.cell_mut((dst_area.x + dx, dst_area.y + dy)) {
                *target = cell.clone();
            }
        }
    }
}

/// Render the visible slice of the stacked section panels into `area`.
///
/// Each visible panel is drawn offscreen at full region height and the rows
/// inside the page viewport are copied over, so panels cut by the top or
/// bottom edge clip instead of squashing.
pub fn render_page(f: &mut Frame, area: Rect, app: &App) {
    let viewport = app.page_viewport();
    let active = app.active_section();
    for section in &app.sections {
        let Some(handles) = app.layout.get(section.id) else {
            continue;
        };
        let region = handles.region;
        let visible = region.overlap(&viewport);
        if visible == 0 {
            continue;
        }
        let first_row = region.start.max(viewport.start);
        let mut offscreen = Buffer::empty(Rect::new(0, 0, area.width, region.len as u16));
        SectionPanel {
            section,
            products: app.products(),
            active: active == Some(section.id),
        }
        .render(offscreen.area, &mut offscreen);

        let top = (first_row - viewport.start) as u16;
        if top >= area.height {
            continue;
        }
        let dst = Rect::new(area.x, area.y + top, area.width, (visible as u16).min(area.height - top));
        blit(&offscreen, (first_row - region.start) as u16, f.buffer_mut(), dst);
    }
}

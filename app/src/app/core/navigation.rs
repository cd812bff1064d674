use super::*;
use crate::app::core::menu_strip::DragEnd;

/// Rows moved by one mouse wheel notch.
pub const WHEEL_ROWS: i32 = 3;
/// Columns panned by one wheel notch over the menu strip.
pub const WHEEL_COLUMNS: i32 = 4;

impl App {
    /// Scroll the page by `delta` rows immediately.
    pub fn scroll_page_by(&mut self, delta: i32) -> bool {
        let target = self.page.current() + delta;
        self.scroll_page_to(target)
    }

    /// Jump the page to row `offset` (clamped).
    pub fn scroll_page_to(&mut self, offset: i32) -> bool {
        let moved = self.page.jump_to(offset);
        if moved {
            self.sync_active();
        }
        moved
    }

    /// Move down by one row.
    pub fn next(&mut self) -> bool {
        self.scroll_page_by(1)
    }

    /// Move up by one row.
    pub fn previous(&mut self) -> bool {
        self.scroll_page_by(-1)
    }

    /// Move down by one screen.
    pub fn page_down(&mut self) -> bool {
        self.scroll_page_by(self.viewport.content_height.max(1))
    }

    /// Move up by one screen, saturating at the top.
    pub fn page_up(&mut self) -> bool {
        self.scroll_page_by(-self.viewport.content_height.max(1))
    }

    pub fn scroll_home(&mut self) -> bool {
        self.scroll_page_to(0)
    }

    pub fn scroll_end(&mut self) -> bool {
        self.scroll_page_to(self.page.max())
    }

    /// Smoothly scroll the page so section `id` starts at the top.
    pub fn scroll_to_section(&mut self, id: SectionId) -> bool {
        match self.layout.get(id) {
            Some(handles) => self.page.animate_to(handles.region.start),
            None => false,
        }
    }

    /// Finish a drag gesture on the menu strip. A gesture that never moved
    /// is a click on the entry under the pointer; `strip_x` converts the
    /// pointer column into a strip-content column.
    pub fn release_menu_pointer(&mut self, strip_x: impl Fn(i32) -> i32) -> Option<SectionId> {
        match self.menu.pointer_up()? {
            DragEnd::Click { x } => {
                let id = self.menu.entry_at(strip_x(x))?;
                self.scroll_to_section(id);
                Some(id)
            }
            DragEnd::Panned => None,
        }
    }
}

use super::smooth::SmoothOffset;

/// Width of the slide-in panel, in columns.
pub const SIDE_PANEL_WIDTH: i32 = 32;

/// Slide-in panel state. The smooth offset counts how many of the panel's
/// columns are still hidden past the right edge of the screen.
#[derive(Debug, Clone)]
pub struct SidePanel {
    open: bool,
    hidden: SmoothOffset,
    pub items: Vec<String>,
}

impl SidePanel {
    pub fn new(items: Vec<String>, speed: f64) -> Self {
        let mut hidden = SmoothOffset::new(speed);
        hidden.set_max(SIDE_PANEL_WIDTH);
        hidden.jump_to(SIDE_PANEL_WIDTH);
        SidePanel {
            open: false,
            hidden,
            items,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        let target = if open { 0 } else { SIDE_PANEL_WIDTH };
        self.hidden.animate_to(target);
    }

    /// Columns of the panel currently on screen.
    pub fn visible_width(&self) -> i32 {
        SIDE_PANEL_WIDTH - self.hidden.current()
    }

    pub fn tick(&mut self) -> bool {
        self.hidden.tick()
    }
}

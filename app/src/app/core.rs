use tracing::trace;

use super::layout::{SectionMap, Viewport};
use super::sections::{sections, side_panel_items};
use super::settings::Settings;
use super::types::{Extent, Section, SectionId};
use crate::catalog::{Catalog, Product};

use self::menu_strip::MenuStrip;
use self::side_panel::SidePanel;
use self::smooth::SmoothOffset;
use self::visibility::{Observation, VisibilityTracker};

// submodules live in `app/src/app/core/`
pub mod menu_strip;
pub mod navigation;
pub mod side_panel;
pub mod smooth;
pub mod visibility;

/// Upper bound on animation frames `settle` will run.
const MAX_SETTLE_FRAMES: usize = 1_000;

/// Application state: everything the renderer reads and the handlers mutate.
///
/// The section map is owned here and its handles are handed to the
/// visibility tracker (regions) and the menu strip (entries). Whenever the
/// viewport changes the map is rebuilt and the old observations are dropped
/// before the new ones are registered.
pub struct App {
    pub settings: Settings,
    pub sections: Vec<Section>,
    pub catalog: Catalog,
    pub layout: SectionMap,
    pub tracker: VisibilityTracker,
    observations: Vec<Observation>,
    pub menu: MenuStrip,
    /// Vertical scroll offset of the page, in rows.
    pub page: SmoothOffset,
    pub side_panel: SidePanel,
    viewport: Viewport,
}

impl App {
    pub fn new(settings: Settings, viewport: Viewport) -> Self {
        let sections = sections(settings.locale);
        let layout = SectionMap::build(&sections, viewport.content_height);
        let speed = settings.smooth_scroll_speed;
        let mut app = App {
            tracker: VisibilityTracker::new(settings.visibility_threshold),
            menu: MenuStrip::new(
                layout.menu_entries(),
                viewport.strip_width,
                settings.drag_gain,
                speed,
            ),
            page: SmoothOffset::new(speed),
            side_panel: SidePanel::new(side_panel_items(settings.locale), speed),
            catalog: Catalog::default(),
            observations: Vec::new(),
            sections,
            layout,
            settings,
            viewport,
        };
        app.page
            .set_max(app.layout.page_height() - viewport.content_height);
        app.observe_sections();
        app.sync_active();
        app
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Rebuild the section map for a new terminal size.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.layout = SectionMap::build(&self.sections, viewport.content_height);
        self.menu
            .set_layout(self.layout.menu_entries(), viewport.strip_width);
        self.page
            .set_max(self.layout.page_height() - viewport.content_height);
        self.observe_sections();
        self.sync_active();
    }

    fn observe_sections(&mut self) {
        // Old registrations go first so a relayout never double-observes.
        self.observations.clear();
        self.observations = self
            .layout
            .iter()
            .map(|(id, handles)| self.tracker.observe(id, handles.region))
            .collect();
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.tracker.active()
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Rows of the page currently on screen.
    pub fn page_viewport(&self) -> Extent {
        Extent::new(self.page.current(), self.viewport.content_height)
    }

    /// Re-evaluate section visibility for the current page offset and, if
    /// the active section changed, let the menu strip follow it.
    pub fn sync_active(&mut self) -> Option<SectionId> {
        let changed = self.tracker.update(self.page_viewport())?;
        if let Some(delta) = self.menu.follow_section(changed) {
            trace!(section = %changed, delta, "menu strip following active section");
        }
        Some(changed)
    }

    /// Advance all animations by one frame. Returns true when anything moved.
    pub fn tick(&mut self) -> bool {
        let page_moved = self.page.tick();
        if page_moved {
            self.sync_active();
        }
        let menu_moved = self.menu.tick();
        let panel_moved = self.side_panel.tick();
        page_moved || menu_moved || panel_moved
    }

    /// Run animation frames until everything is at rest.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.tick() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Settings::default(), Viewport::new(30, 20))
    }

    #[test]
    fn first_section_is_active_after_mount() {
        let app = app();
        assert_eq!(app.active_section(), Some(SectionId::new("section1")));
        assert_eq!(app.tracker.observed_count(), app.sections.len());
        assert_eq!(app.menu.scroll_left(), 0);
    }

    #[test]
    fn resize_does_not_leak_observations() {
        let mut app = app();
        for h in [10, 25, 40, 12] {
            app.resize(Viewport::new(30, h));
            assert_eq!(app.tracker.observed_count(), app.sections.len());
        }
    }

    #[test]
    fn resize_keeps_active_section_when_nothing_crosses() {
        let mut app = app();
        app.resize(Viewport::new(60, 20));
        assert_eq!(app.active_section(), Some(SectionId::new("section1")));
    }
}

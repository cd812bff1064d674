//! Mapping from section id to the handles of its content region and menu
//! entry.
//!
//! The map is rebuilt whenever the viewport changes and is the only place
//! that knows where a section lives on the page and in the menu strip. The
//! visibility tracker and the menu strip receive their handles from here
//! instead of looking anything up by synthetic id.

use ratatui::text::Span;

use super::types::{Extent, Section, SectionId};

/// Columns between two adjacent menu entries.
pub const MENU_GAP: i32 = 2;
/// Blank column on each side of a menu label.
pub const MENU_PADDING: i32 = 1;

/// Size of the two scrollable viewports the core cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Visible width of the menu strip, in columns.
    pub strip_width: i32,
    /// Visible height of the page content area, in rows.
    pub content_height: i32,
}

impl Viewport {
    pub fn new(strip_width: i32, content_height: i32) -> Self {
        Viewport {
            strip_width: strip_width.max(0),
            content_height: content_height.max(0),
        }
    }
}

/// Handles for one section: where its panel sits on the page and where its
/// entry sits in the menu strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHandles {
    pub region: Extent,
    pub menu_entry: Extent,
}

#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    entries: Vec<(SectionId, SectionHandles)>,
    region_height: i32,
}

/// Display width of a padded menu label.
pub fn menu_entry_width(section: &Section) -> i32 {
    Span::raw(section.menu_label()).width() as i32 + 2 * MENU_PADDING
}

impl SectionMap {
    /// Lay sections out top to bottom (one screen each) and their menu
    /// entries left to right. A region is exactly as tall as the content
    /// viewport so a fully scrolled-to section is always 100% visible.
    pub fn build(sections: &[Section], content_height: i32) -> Self {
        let region_height = content_height.max(1);
        let mut column = 0;
        let entries = sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let width = menu_entry_width(section);
                let handles = SectionHandles {
                    region: Extent::new(i as i32 * region_height, region_height),
                    menu_entry: Extent::new(column, width),
                };
                column += width + MENU_GAP;
                (section.id, handles)
            })
            .collect();
        SectionMap {
            entries,
            region_height,
        }
    }

    pub fn get(&self, id: SectionId) -> Option<&SectionHandles> {
        self.entries.iter().find(|(sid, _)| *sid == id).map(|(_, h)| h)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &SectionHandles)> {
        self.entries.iter().map(|(id, h)| (*id, h))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn region_height(&self) -> i32 {
        self.region_height
    }

    /// Total height of the stacked section panels.
    pub fn page_height(&self) -> i32 {
        self.entries.last().map(|(_, h)| h.region.end()).unwrap_or(0)
    }

    /// Menu entry handles in menu order, as handed to the menu strip.
    pub fn menu_entries(&self) -> Vec<(SectionId, Extent)> {
        self.entries.iter().map(|(id, h)| (*id, h.menu_entry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::sections::sections;
    use crate::app::types::Locale;

    #[test]
    fn regions_stack_one_screen_per_section() {
        let list = sections(Locale::En);
        let map = SectionMap::build(&list, 20);
        assert_eq!(map.len(), list.len());
        let h5 = map.get(SectionId::new("section5")).unwrap();
        assert_eq!(h5.region, Extent::new(80, 20));
        assert_eq!(map.page_height(), 20 * list.len() as i32);
    }

    #[test]
    fn menu_entries_are_separated_by_gap() {
        let list = sections(Locale::En);
        let map = SectionMap::build(&list, 20);
        let entries = map.menu_entries();
        for pair in entries.windows(2) {
            assert_eq!(pair[0].1.end() + MENU_GAP, pair[1].1.start);
        }
        assert_eq!(entries[0].1.start, 0);
    }

    #[test]
    fn tiny_viewport_regions_match_content_height() {
        let list = sections(Locale::En);
        let map = SectionMap::build(&list, 3);
        assert_eq!(map.region_height(), 3);
        assert_eq!(map.page_height(), 3 * list.len() as i32);
        // A zero-height content area still yields non-empty regions.
        assert_eq!(SectionMap::build(&list, 0).region_height(), 1);
    }
}

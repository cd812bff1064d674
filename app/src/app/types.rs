use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a page section (for example `section5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(&'static str);

impl SectionId {
    pub const fn new(id: &'static str) -> Self {
        SectionId(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Identifier of the menu entry derived from this section id.
    pub fn menu_entry_id(&self) -> String {
        format!("menu-{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One static, named content region of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub icon: &'static str,
}

impl Section {
    /// Label shown for this section in the menu strip.
    pub fn menu_label(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

/// Half-open interval `[start, start + len)` along one axis, in terminal cells.
///
/// Used for section regions (rows of the page), menu entries (columns of
/// the strip) and the viewports looking at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub start: i32,
    pub len: i32,
}

impl Extent {
    pub const fn new(start: i32, len: i32) -> Self {
        Extent { start, len }
    }

    pub fn end(&self) -> i32 {
        self.start + self.len
    }

    pub fn contains(&self, pos: i32) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Number of cells shared by both extents.
    pub fn overlap(&self, other: &Extent) -> i32 {
        (self.end().min(other.end()) - self.start.max(other.start)).max(0)
    }

    /// True when `inner` lies entirely within `self`.
    pub fn covers(&self, inner: &Extent) -> bool {
        inner.start >= self.start && inner.end() <= self.end()
    }
}

/// Display language for section titles and side panel items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Fa => f.write_str("fa"),
        }
    }
}

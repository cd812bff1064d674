pub mod core;
pub mod layout;
pub mod sections;
pub mod settings;
pub mod types;

pub use core::menu_strip::{DragEnd, MenuStrip};
pub use core::side_panel::SidePanel;
pub use core::smooth::SmoothOffset;
pub use core::visibility::{IntersectionEntry, Observation, VisibilityTracker};
pub use core::App;
pub use layout::{SectionHandles, SectionMap, Viewport};
pub use types::{Extent, Locale, Section, SectionId};

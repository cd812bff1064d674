//! The fixed, ordered list of page sections shipped with the binary.

use super::types::{Locale, Section, SectionId};

const SECTION_ICONS: [(&str, &str); 8] = [
    ("section1", "🍎"),
    ("section2", "🍊"),
    ("section3", "🍇"),
    ("section4", "🍌"),
    ("section5", "🍓"),
    ("section6", "🍍"),
    ("section7", "🥝"),
    ("section8", "🍒"),
];

const SIDE_PANEL_ITEMS: usize = 3;

/// Build the section list with titles in the requested locale. Order is
/// significant: it defines both page order and menu order.
pub fn sections(locale: Locale) -> Vec<Section> {
    SECTION_ICONS
        .iter()
        .enumerate()
        .map(|(i, &(id, icon))| Section {
            id: SectionId::new(id),
            title: match locale {
                Locale::En => format!("Product {}", i + 1),
                Locale::Fa => format!("محصول {}", i + 1),
            },
            icon,
        })
        .collect()
}

/// Static entries of the slide-in side panel.
pub fn side_panel_items(locale: Locale) -> Vec<String> {
    (1..=SIDE_PANEL_ITEMS)
        .map(|n| match locale {
            Locale::En => format!("Item {}", n),
            Locale::Fa => format!("آیتم {}", n),
        })
        .collect()
}

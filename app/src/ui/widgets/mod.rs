pub mod footer;
pub mod nav_bar;
pub mod product_card;
pub mod section_panel;
pub mod side_panel;

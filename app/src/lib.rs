pub mod app;
pub mod catalog;
pub mod input;
pub mod runner;
pub mod ui;

pub use crate::app::{App, Extent, Section, SectionId, Viewport};
pub use crate::catalog::{Catalog, Product};

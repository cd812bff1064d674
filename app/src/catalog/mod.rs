//! Product catalog: the record type, the source seam, the one-shot loader
//! and the replace-or-keep store consumed by the renderer.

pub mod error;
pub mod loader;
pub mod product;
pub mod source;

pub use error::CatalogError;
pub use loader::{CatalogLoader, FetchOutcome};
pub use product::{decode_products, Product};
pub use source::{HttpProductSource, ProductSource, DEFAULT_CATALOG_URL};

use tracing::{error, info};

/// Products shared by every section panel.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    pending: bool,
}

impl Catalog {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// A fetch has been issued and has not reported yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn mark_pending(&mut self) {
        self.pending = true;
    }

    /// Apply a fetch outcome: success replaces the list wholesale, failure
    /// is logged and leaves the current list untouched.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        self.pending = false;
        match outcome {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded");
                self.products = products;
            }
            Err(e) => error!("error fetching products: {}", e),
        }
    }
}

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::error::CatalogError;
use super::product::Product;
use super::source::ProductSource;

/// Result of the one catalog fetch, as delivered to the event loop.
pub type FetchOutcome = Result<Vec<Product>, CatalogError>;

/// Owns the single in-flight catalog fetch.
///
/// The fetch runs on its own task and reports once over `tx`. Dropping the
/// loader cancels the task; an outcome that resolves after that is
/// discarded and never reaches the receiver.
#[derive(Debug)]
pub struct CatalogLoader {
    token: CancellationToken,
}

impl CatalogLoader {
    /// Spawn the fetch on the current tokio runtime.
    pub fn spawn(source: Arc<dyn ProductSource>, tx: UnboundedSender<FetchOutcome>) -> Self {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    debug!("catalog fetch cancelled before completion");
                }
                outcome = source.fetch_products() => {
                    if cancelled.is_cancelled() {
                        debug!("discarding catalog outcome after teardown");
                        return;
                    }
                    if tx.send(outcome).is_err() {
                        debug!("catalog receiver closed, outcome dropped");
                    }
                }
            }
        });
        CatalogLoader { token }
    }

    /// Cancel the fetch if it is still running.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for CatalogLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

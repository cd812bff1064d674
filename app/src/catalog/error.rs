use thiserror::Error;

/// Failures of the single catalog fetch. All of them are logged at the
/// catalog boundary and otherwise absorbed.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("`{url}` answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not a JSON array of products.
    #[error("could not decode product list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid catalog URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use tracing::debug;

use super::error::CatalogError;
use super::product::{decode_products, Product};

/// Default public demo catalog.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Something that can produce the product list once.
#[async_trait]
pub trait ProductSource: Send + Sync + 'static {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Plain HTTP GET against a fixed URL returning a JSON array.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    url: Url,
}

impl HttpProductSource {
    pub fn new(url: &str) -> Result<Self, CatalogError> {
        let parsed = Url::parse(url).map_err(|e| CatalogError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(default_headers)
            .build()?;
        Ok(HttpProductSource {
            client,
            url: parsed,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(url = %self.url, "fetching catalog");
        let resp = self.client.get(self.url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().await?;
        decode_products(&body)
    }
}

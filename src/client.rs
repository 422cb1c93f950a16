use eyre::{bail, Result, WrapErr};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::cards::{BusinessCardDirectory, BusinessCardRecord};
use crate::catalog::{ProductCatalog, ProductRecord};

/// Product document, relative to the site root.
pub const PRODUCTS_RESOURCE: &str = "product_specifications_simplified.json";
/// Card document, relative to the site root.
pub const CARDS_RESOURCE: &str = "business_cards.json";

/// Reads the site's static JSON documents.
///
/// Every call is a single GET; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct SiteClient {
    base: Url,
    client: Client,
}

impl SiteClient {
    /// Creates a client for the site rooted at `base`.
    ///
    /// ```rust
    /// use watch_catalog::{SiteClient, Url};
    ///
    /// let client = SiteClient::new(Url::parse("http://localhost:5173/shop").unwrap()).unwrap();
    /// assert_eq!(
    ///     client.resource_url("business_cards.json").unwrap().as_str(),
    ///     "http://localhost:5173/shop/business_cards.json"
    /// );
    /// ```
    pub fn new(mut base: Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            bail!("{base} cannot be used as a site root");
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .default_headers(crate::build_headers())
            .build()?;

        Ok(Self { base, client })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn resource_url(&self, resource: &str) -> Result<Url> {
        self.base
            .join(resource)
            .wrap_err_with(|| format!("cannot resolve {resource} against {}", self.base))
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let url = self.resource_url(resource)?;
        debug!(%url, "fetching document");

        let response = self
            .client
            .get(url.to_owned())
            .send()
            .await
            .wrap_err_with(|| format!("request to {url} failed"))?;
        let status = response.status();
        if !status.is_success() {
            bail!("{url} answered {status}");
        }

        let body = response.text().await?;
        serde_json::from_str(&body).wrap_err_with(|| format!("{url} is not valid JSON"))
    }

    /// Fetches and parses the product document.
    pub async fn fetch_products(&self) -> Result<ProductCatalog> {
        let catalog: ProductCatalog = self.get_json(PRODUCTS_RESOURCE).await?;
        debug!(count = catalog.products.len(), "loaded products");
        Ok(catalog)
    }

    /// Fetches and parses the card document.
    pub async fn fetch_cards(&self) -> Result<BusinessCardDirectory> {
        let directory: BusinessCardDirectory = self.get_json(CARDS_RESOURCE).await?;
        debug!(count = directory.cards.len(), "loaded cards");
        Ok(directory)
    }

    /// The product list, or nothing if it could not be loaded.
    pub async fn products(&self) -> Vec<ProductRecord> {
        match self.fetch_products().await {
            Ok(catalog) => catalog.products,
            Err(err) => {
                warn!(error = %err, "showing no products");
                Vec::new()
            }
        }
    }

    /// The card list, or nothing if it could not be loaded.
    pub async fn cards(&self) -> Vec<BusinessCardRecord> {
        match self.fetch_cards().await {
            Ok(directory) => directory.cards,
            Err(err) => {
                warn!(error = %err, "showing no cards");
                Vec::new()
            }
        }
    }

    /// The card routed at `path`. A failed fetch reads as "not found".
    pub async fn card(&self, path: &str) -> Option<BusinessCardRecord> {
        match self.fetch_cards().await {
            Ok(directory) => directory.find(path).cloned(),
            Err(err) => {
                warn!(error = %err, path, "card lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_gains_trailing_slash() {
        let client = SiteClient::new(Url::parse("https://example.com/catalog").unwrap()).unwrap();
        assert_eq!(client.base().as_str(), "https://example.com/catalog/");
        assert_eq!(
            client.resource_url(PRODUCTS_RESOURCE).unwrap().as_str(),
            "https://example.com/catalog/product_specifications_simplified.json"
        );
    }

    #[test]
    fn opaque_urls_are_rejected() {
        assert!(SiteClient::new(Url::parse("mailto:team@example.com").unwrap()).is_err());
    }
}

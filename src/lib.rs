//! Normalize smart-watch catalog and business-card records for display.
//!
//! `extract_display_specs` turns a `ProductRecord` into the ordered
//! label-value rows of its specification table, and `SiteClient` loads
//! the static JSON documents the site is built from.
//!
//! Feature Flags:
//! - `serde_io`: Enables `Serialize` for the display types. (default)

mod cards;
mod catalog;
mod client;
pub mod config;
pub mod telemetry;
mod value;

pub use cards::{
    BusinessCardDirectory, BusinessCardRecord, ContactKind, ContactRow, SocialKind, SocialLink,
    DETAIL_ROUTE,
};
pub use catalog::{
    extract_display_specs, grouped_display_specs, resolve_image_path, split_colour_list,
    DisplaySpec, LabelDictionary, LabelScheme, ProductCatalog, ProductRecord, Section,
    SectionKind, SpecGroup, Stripe, FALLBACK_TITLE,
};
pub use client::{SiteClient, CARDS_RESOURCE, PRODUCTS_RESOURCE};
pub use config::Config;
use header::{HeaderMap, HeaderValue};
use reqwest::header;
pub use url::Url;
pub use value::{is_present, SENTINELS};

/// Builds the default headers for the client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!("watch_catalog/", env!("CARGO_PKG_VERSION"))),
    );
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/json"),
    );
    headers
}

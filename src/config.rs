use eyre::{eyre, Result, WrapErr};
use url::Url;

use crate::catalog::LabelScheme;
use crate::telemetry::DEFAULT_FILTER;

pub const BASE_URL_VAR: &str = "CATALOG_BASE_URL";
pub const LABELS_VAR: &str = "CATALOG_LABELS";
pub const LOG_VAR: &str = "CATALOG_LOG";

/// Where the static site is served during development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Site root the JSON documents are fetched from.
    pub base_url: Url,
    /// Label preset used to render specifications.
    pub labels: LabelScheme,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys take
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let base_url = Url::parse(base_url.trim())
            .wrap_err_with(|| format!("{BASE_URL_VAR} is not a valid URL: {base_url}"))?;

        let labels = match get(LABELS_VAR) {
            Some(name) => LabelScheme::from_name(&name).ok_or_else(|| {
                eyre!("{LABELS_VAR} must be `table` or `compact`, got `{name}`")
            })?,
            None => LabelScheme::default(),
        };

        let log_filter = get(LOG_VAR).unwrap_or_else(|| DEFAULT_FILTER.into());

        Ok(Config {
            base_url,
            labels,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.labels, LabelScheme::TABLE);
        assert_eq!(config.log_filter, DEFAULT_FILTER);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[(LABELS_VAR, "  "), (LOG_VAR, "")]).unwrap();
        assert_eq!(config.labels, LabelScheme::TABLE);
        assert_eq!(config.log_filter, DEFAULT_FILTER);
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            (BASE_URL_VAR, "https://watches.example.com/site/"),
            (LABELS_VAR, "compact"),
            (LOG_VAR, "watch_catalog=debug"),
        ])
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://watches.example.com/site/");
        assert_eq!(config.labels, LabelScheme::COMPACT);
        assert_eq!(config.log_filter, "watch_catalog=debug");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[(BASE_URL_VAR, "not a url")]).is_err());
        let err = config(&[(LABELS_VAR, "grid")]).unwrap_err();
        assert!(err.to_string().contains(LABELS_VAR));
    }
}

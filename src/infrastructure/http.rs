//! Country data source over HTTP.
//!
//! [`RestCountriesClient`] issues a single `GET` for the complete record set with
//! a fixed field selection. There is no authentication, caching, or retry: a
//! failure is reported once and the caller decides what to show.

use crate::domain::error::{ExplorerError, Result};
use crate::domain::Country;
use async_trait::async_trait;
use std::time::Duration;

/// Public endpoint of the REST Countries API, version 3.1.
pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Field selection sent with every request.
pub const COUNTRY_FIELDS: &str =
    "name,capital,region,population,flags,subregion,languages,tld,currencies,borders";

/// Source of the full country record set.
///
/// The directory store only needs "give me everything"; implementations decide
/// where it comes from.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetches every country record, in the order the source returns them.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::Http`] if the request could not be completed
    /// - [`ExplorerError::Status`] for a non-success response
    /// - [`ExplorerError::Decode`] if the body is not a list of records
    async fn fetch_all(&self) -> Result<Vec<Country>>;
}

/// HTTP client for the REST Countries API.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestCountriesClient {
    /// Creates a client for `base_url` with the given request timeout.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Http`] if the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Full URL of the "all countries" request.
    #[must_use]
    pub fn all_countries_url(&self) -> String {
        format!("{}/all?fields={COUNTRY_FIELDS}", self.base_url)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<Country>> {
        let url = self.all_countries_url();
        tracing::debug!(url = %url, "requesting countries");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "country request rejected");
            return Err(ExplorerError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let countries: Vec<Country> = serde_json::from_slice(&body)
            .map_err(|e| ExplorerError::Decode(e.to_string()))?;

        tracing::debug!(count = countries.len(), bytes = body.len(), "countries received");
        Ok(countries)
    }
}

//! HTTP client for the taxi statistics API.
//!
//! Every public fetch returns `Option<T>`: `Some` with the decoded body, or
//! `None` when the request failed for any reason. Failures are logged here
//! and never surface to the caller, so one broken endpoint cannot take the
//! rest of the dashboard down with it. There are no retries.

use crate::error::ApiError;
use crate::filter::Filter;
use crate::models::{HealthStatus, HourlyFare, SummaryStats, Trip, ZoneCount};
use log::{debug, error};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// Local API service the dashboard talks to.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Number of zones requested from `/top-zones` when no limit is given.
pub const DEFAULT_TOP_ZONES: usize = 10;

/// Client for the taxi statistics API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ApiError::Scheme(trimmed.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            http: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` with the given query pairs. No `?` is added
    /// when `query` is empty.
    pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    pub fn summary_url(&self) -> Result<Url, ApiError> {
        self.endpoint("/summary", &[])
    }

    pub fn trips_url(&self, filter: &Filter) -> Result<Url, ApiError> {
        self.endpoint("/trips", &filter.query_pairs())
    }

    pub fn hourly_fares_url(&self) -> Result<Url, ApiError> {
        self.endpoint("/average-fare-by-hour", &[])
    }

    pub fn top_zones_url(&self, limit: usize) -> Result<Url, ApiError> {
        self.endpoint("/top-zones", &[("n", limit.to_string())])
    }

    /// Dataset summary, or `None` if unavailable.
    pub async fn summary(&self) -> Option<SummaryStats> {
        self.get_or_log("summary", self.summary_url()).await
    }

    /// Trips matching `filter`, or `None` if unavailable.
    pub async fn trips(&self, filter: &Filter) -> Option<Vec<Trip>> {
        self.get_or_log("trips", self.trips_url(filter)).await
    }

    /// Average fare per pickup hour, or `None` if unavailable.
    pub async fn hourly_fares(&self) -> Option<Vec<HourlyFare>> {
        self.get_or_log("fare data", self.hourly_fares_url()).await
    }

    /// The `limit` busiest pickup zones, or `None` if unavailable.
    pub async fn top_zones(&self, limit: usize) -> Option<Vec<ZoneCount>> {
        self.get_or_log("top zones", self.top_zones_url(limit)).await
    }

    /// Health check at the API root, or `None` if the service is down.
    pub async fn health(&self) -> Option<HealthStatus> {
        self.get_or_log("health", self.endpoint("/", &[])).await
    }

    async fn get_or_log<T: DeserializeOwned>(
        &self,
        what: &str,
        url: Result<Url, ApiError>,
    ) -> Option<T> {
        let result = match url {
            Ok(url) => self.get_json(url).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error getting {}: {}", what, e);
                None
            }
        }
    }

    /// GET `url` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_url_without_filter_has_no_query() {
        let client = ApiClient::default();
        let url = client.trips_url(&Filter::default()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/trips");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn trips_url_with_hour_only() {
        let client = ApiClient::default();
        let url = client.trips_url(&Filter::from_selection("", "5")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/trips?hour=5");
    }

    #[test]
    fn trips_url_with_both_fields() {
        let client = ApiClient::default();
        let url = client
            .trips_url(&Filter::from_selection("Staten Island", "23"))
            .unwrap();
        assert_eq!(url.query(), Some("borough=Staten+Island&hour=23"));
    }

    #[test]
    fn top_zones_url_carries_limit() {
        let client = ApiClient::default();
        let url = client.top_zones_url(DEFAULT_TOP_ZONES).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/top-zones?n=10");
    }

    #[test]
    fn base_url_trailing_slash_and_path_are_kept() {
        let client = ApiClient::new("http://example.test/api/").unwrap();
        assert_eq!(client.base_url(), "http://example.test/api");
        let url = client.summary_url().unwrap();
        assert_eq!(url.as_str(), "http://example.test/api/summary");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::Url(_))
        ));
        for raw in ["localhost:5000", "ftp://example.test", "mailto:someone"] {
            assert!(
                matches!(ApiClient::new(raw), Err(ApiError::Scheme(_))),
                "{} should be rejected",
                raw
            );
        }
        assert!(ApiClient::new("https://taxi.example.test").is_ok());
    }
}

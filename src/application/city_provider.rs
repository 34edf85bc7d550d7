// Provider trait for backend city data access
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::city::{CityIdentity, CitySummary};
use crate::domain::filter::Timeframe;
use crate::domain::timeseries::TimeSeriesPoint;

/// Errors surfaced by a backend provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The request never produced a response.
    #[error("request to backend failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body did not deserialize.
    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait CityProvider: Send + Sync {
    /// List the cities the dashboard tracks.
    async fn list_cities(&self) -> Result<Vec<CityIdentity>, ProviderError>;

    /// Fetch the current summary for one city, addressed by name.
    async fn fetch_summary(&self, name: &str) -> Result<CitySummary, ProviderError>;

    /// Fetch one city's time series for the given timeframe, oldest point
    /// first.
    async fn fetch_timeseries(
        &self,
        name: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError>;
}

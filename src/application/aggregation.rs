// City aggregation - join identities with per-city summaries
use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::application::city_provider::{CityProvider, ProviderError};
use crate::domain::city::{CityIdentity, CitySummary};

/// Upper bound on in-flight summary fetches.
const MAX_IN_FLIGHT_FETCHES: usize = 4;

/// Outcome of aggregating one city. The identity always survives; the
/// summary only when its fetch succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct CityReport {
    pub identity: CityIdentity,
    pub summary: Result<CitySummary, ProviderError>,
}

#[derive(Clone)]
pub struct CityAggregator {
    provider: Arc<dyn CityProvider>,
}

impl CityAggregator {
    pub fn new(provider: Arc<dyn CityProvider>) -> Self {
        Self { provider }
    }

    /// Fetch a summary for every identity and join it back onto the
    /// identity, whose name and coordinates take precedence over the
    /// backend's echo.
    ///
    /// Fetches fan out with at most MAX_IN_FLIGHT_FETCHES in flight, and
    /// output order matches input order regardless of completion order. A
    /// city whose fetch fails keeps its slot in the output, carrying the
    /// error in place of a summary.
    pub async fn aggregate(&self, identities: Vec<CityIdentity>) -> Vec<CityReport> {
        stream::iter(identities)
            .map(|identity| {
                let provider = self.provider.clone();
                async move {
                    let summary = provider
                        .fetch_summary(&identity.name)
                        .await
                        .map(|summary| summary.merged_with(&identity));

                    if let Err(e) = &summary {
                        tracing::warn!("summary fetch for {} failed: {}", identity.name, e);
                    }

                    CityReport { identity, summary }
                }
            })
            .buffered(MAX_IN_FLIGHT_FETCHES)
            .collect()
            .await
    }
}

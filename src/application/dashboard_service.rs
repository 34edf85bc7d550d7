// Dashboard service - use case for building the aggregated overview
use std::sync::Arc;

use crate::application::aggregation::CityAggregator;
use crate::application::city_provider::{CityProvider, ProviderError};
use crate::domain::air_quality;
use crate::domain::dashboard::{CityStatus, Dashboard};
use crate::domain::geo::{self, Canvas};

#[derive(Clone)]
pub struct DashboardService {
    provider: Arc<dyn CityProvider>,
    aggregator: CityAggregator,
}

impl DashboardService {
    pub fn new(provider: Arc<dyn CityProvider>) -> Self {
        let aggregator = CityAggregator::new(provider.clone());
        Self {
            provider,
            aggregator,
        }
    }

    /// Build the overview the card grid and map views render from: one
    /// entry per tracked city with its AQI classification and projected
    /// pin. A city whose summary fetch failed still appears, carrying the
    /// error in place of its metrics. Only the city listing itself can fail
    /// the whole view.
    pub async fn overview(&self, canvas: Canvas) -> Result<Dashboard, ProviderError> {
        let identities = self.provider.list_cities().await?;
        let reports = self.aggregator.aggregate(identities).await;

        let cities = reports
            .into_iter()
            .map(|report| {
                let pin = geo::project(report.identity.latitude, report.identity.longitude, canvas);
                let (summary, error) = match report.summary {
                    Ok(summary) => (Some(summary), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                let air_quality = air_quality::classify(summary.as_ref().and_then(|s| s.aqi));

                CityStatus {
                    name: report.identity.name,
                    latitude: report.identity.latitude,
                    longitude: report.identity.longitude,
                    summary,
                    error,
                    air_quality,
                    pin,
                }
            })
            .collect();

        Ok(Dashboard::new(cities))
    }
}

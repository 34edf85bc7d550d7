// Time series domain model
use serde::{Deserialize, Serialize};

/// One sample in a city's time series. Points arrive oldest first, one per
/// sampling interval (24 points for the 24h timeframe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub timestamp: String,
    pub temperature: f64,
    pub aqi: f64,
    pub energy_consumption: f64,
    pub transport_activity: f64,
}

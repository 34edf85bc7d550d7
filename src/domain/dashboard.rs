// Dashboard overview domain model
use serde::Serialize;

use super::air_quality::AirQuality;
use super::city::CitySummary;
use super::geo::MapPoint;

/// One city's entry in the aggregated overview: the identity joined with
/// either its fetched summary or the error that prevented it, plus the
/// classification and projected map pin the views render from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStatus {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CitySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub air_quality: AirQuality,
    pub pin: MapPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub cities: Vec<CityStatus>,
}

impl Dashboard {
    pub fn new(cities: Vec<CityStatus>) -> Self {
        Self { cities }
    }
}

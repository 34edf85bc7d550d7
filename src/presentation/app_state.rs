// Application state for HTTP handlers
use crate::application::city_service::CityService;
use crate::application::dashboard_service::DashboardService;

#[derive(Clone)]
pub struct AppState {
    pub city_service: CityService,
    pub dashboard_service: DashboardService,
}

//! Weather fetch service - dispatches to the live API or the mock provider

use chrono::Local;

use crate::api::{self, FetchError};
use crate::config::ServiceConfig;
use crate::mock;
use crate::state::WeatherBundle;

/// Single-attempt fetch service. Mode is fixed at construction by the
/// presence of a credential in the config.
#[derive(Clone, Debug)]
pub struct WeatherService {
    config: ServiceConfig,
}

impl WeatherService {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub async fn by_city(&self, city: &str) -> Result<WeatherBundle, FetchError> {
        match &self.config.credential {
            Some(key) => api::fetch_by_city(key, city).await,
            None => Ok(mock::by_city(city, Local::now().date_naive())),
        }
    }

    pub async fn by_coords(&self, lat: f64, lon: f64) -> Result<WeatherBundle, FetchError> {
        match &self.config.credential {
            Some(key) => api::fetch_by_coords(key, lat, lon).await,
            None => Ok(mock::by_coords(lat, lon, Local::now().date_naive())),
        }
    }
}

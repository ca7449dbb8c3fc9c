//! OpenWeatherMap API client and response normalization

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::state::{Condition, CurrentConditions, ForecastDay, WeatherBundle, FORECAST_DAYS_MAX};

const API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Fetch failure, converted to a displayable string at the reducer boundary.
#[derive(Debug)]
pub enum FetchError {
    /// City search returned a non-success status
    NotFound(String),
    /// Coordinate search returned a non-success status
    LocationUnavailable,
    /// Transport or decode failure
    Network(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound(city) => write!(f, "City not found: {}", city),
            FetchError::LocationUnavailable => {
                write!(f, "Unable to fetch weather for this location")
            }
            FetchError::Network(message) => write!(f, "Weather request failed: {}", message),
        }
    }
}

impl std::error::Error for FetchError {}

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    sys: SysInfo,
    main: MainInfo,
    weather: Vec<ConditionInfo>,
    wind: WindInfo,
    coord: CoordInfo,
}

#[derive(Debug, Deserialize)]
struct SysInfo {
    country: String,
}

#[derive(Debug, Deserialize)]
struct MainInfo {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionInfo {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WindInfo {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct CoordInfo {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

/// One sub-daily forecast sample from the flat chronological list.
#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: EntryMain,
    weather: Vec<ConditionInfo>,
}

#[derive(Debug, Deserialize)]
struct EntryMain {
    temp: f64,
}

// ============================================================================
// Fetching
// ============================================================================

/// Fetch current conditions and forecast for a named city.
pub async fn fetch_by_city(key: &str, city: &str) -> Result<WeatherBundle, FetchError> {
    let query = format!("q={}", urlencoding::encode(city));
    fetch_bundle(key, &query, || FetchError::NotFound(city.to_string())).await
}

/// Fetch current conditions and forecast for geolocation coordinates.
pub async fn fetch_by_coords(key: &str, lat: f64, lon: f64) -> Result<WeatherBundle, FetchError> {
    let query = format!("lat={}&lon={}", lat, lon);
    fetch_bundle(key, &query, || FetchError::LocationUnavailable).await
}

/// Two sequential calls: current conditions first, then the forecast.
/// A non-success status on the first call fails without attempting the second.
async fn fetch_bundle(
    key: &str,
    query: &str,
    not_found: impl FnOnce() -> FetchError,
) -> Result<WeatherBundle, FetchError> {
    let url = format!("{}/weather?{}&appid={}&units=metric", API_BASE, query, key);
    let response = reqwest::get(&url).await.map_err(network)?;
    if !response.status().is_success() {
        return Err(not_found());
    }
    let current: CurrentResponse = response.json().await.map_err(network)?;

    let url = format!("{}/forecast?{}&appid={}&units=metric", API_BASE, query, key);
    let response = reqwest::get(&url).await.map_err(network)?;
    let forecast: ForecastResponse = response.json().await.map_err(network)?;

    Ok(WeatherBundle {
        current: into_current(current),
        forecast: normalize_forecast(forecast.list),
    })
}

fn network(error: reqwest::Error) -> FetchError {
    FetchError::Network(error.to_string())
}

fn into_current(data: CurrentResponse) -> CurrentConditions {
    let leading = data.weather.first();
    CurrentConditions {
        city: data.name,
        country: data.sys.country,
        temp: data.main.temp.round() as i32,
        feels_like: data.main.feels_like.round() as i32,
        temp_min: data.main.temp_min.round() as i32,
        temp_max: data.main.temp_max.round() as i32,
        description: leading.map(|w| w.description.clone()).unwrap_or_default(),
        condition: leading.map_or(Condition::Other, |w| Condition::from_label(&w.main)),
        humidity: data.main.humidity,
        wind_speed: data.wind.speed,
        lat: data.coord.lat,
        lon: data.coord.lon,
    }
}

/// Collapse the flat sub-daily list to one entry per calendar date (UTC),
/// keeping the first sample seen for each date, truncated to the first
/// seven distinct dates in chronological order.
fn normalize_forecast(list: Vec<ForecastEntry>) -> Vec<ForecastDay> {
    let mut days = Vec::new();
    let mut seen: HashSet<NaiveDate> = HashSet::new();

    for entry in list {
        if days.len() == FORECAST_DAYS_MAX {
            break;
        }
        let Some(stamp) = DateTime::from_timestamp(entry.dt, 0) else {
            continue;
        };
        let date = stamp.date_naive();
        if !seen.insert(date) {
            continue;
        }
        let leading = entry.weather.first();
        days.push(ForecastDay {
            date: date.format("%m/%d/%Y").to_string(),
            day_name: date.format("%a").to_string(),
            temp: entry.main.temp.round() as i32,
            description: leading.map(|w| w.description.clone()).unwrap_or_default(),
            condition: leading.map_or(Condition::Other, |w| Condition::from_label(&w.main)),
            icon: leading.map(|w| w.icon.clone()).unwrap_or_default(),
        });
    }

    days
}

//! Deterministic fallback dataset used when no API credential is configured

use chrono::{Days, NaiveDate};

use crate::state::{Condition, CurrentConditions, ForecastDay, WeatherBundle, FORECAST_DAYS_MAX};

pub const MOCK_HUMIDITY: u8 = 65;
pub const MOCK_WIND_SPEED: f64 = 5.5;

/// The icon is held constant across all mock forecast days regardless of
/// condition, matching the upstream dataset (see DESIGN.md).
const MOCK_ICON: &str = "01d";

struct CityRecord {
    name: &'static str,
    temp: i32,
    condition: Condition,
    description: &'static str,
    country: &'static str,
    lat: f64,
    lon: f64,
}

const CITY_TABLE: [CityRecord; 9] = [
    CityRecord {
        name: "kerala",
        temp: 29,
        condition: Condition::Rain,
        description: "light rain",
        country: "IN",
        lat: 10.8505,
        lon: 76.2711,
    },
    CityRecord {
        name: "london",
        temp: 12,
        condition: Condition::Clouds,
        description: "overcast clouds",
        country: "GB",
        lat: 51.5074,
        lon: -0.1278,
    },
    CityRecord {
        name: "paris",
        temp: 15,
        condition: Condition::Clear,
        description: "clear sky",
        country: "FR",
        lat: 48.8566,
        lon: 2.3522,
    },
    CityRecord {
        name: "new york",
        temp: 18,
        condition: Condition::Rain,
        description: "light rain",
        country: "US",
        lat: 40.7128,
        lon: -74.006,
    },
    CityRecord {
        name: "tokyo",
        temp: 22,
        condition: Condition::Clear,
        description: "clear sky",
        country: "JP",
        lat: 35.6762,
        lon: 139.6503,
    },
    CityRecord {
        name: "sydney",
        temp: 25,
        condition: Condition::Clouds,
        description: "few clouds",
        country: "AU",
        lat: -33.8688,
        lon: 151.2093,
    },
    CityRecord {
        name: "dubai",
        temp: 35,
        condition: Condition::Clear,
        description: "clear sky",
        country: "AE",
        lat: 25.2048,
        lon: 55.2708,
    },
    CityRecord {
        name: "moscow",
        temp: 5,
        condition: Condition::Snow,
        description: "light snow",
        country: "RU",
        lat: 55.7558,
        lon: 37.6173,
    },
    CityRecord {
        name: "mumbai",
        temp: 28,
        condition: Condition::Rain,
        description: "moderate rain",
        country: "IN",
        lat: 19.076,
        lon: 72.8777,
    },
];

/// Unknown city names fall back to this record.
const DEFAULT_CITY: &str = "kerala";

fn lookup(name: &str) -> &'static CityRecord {
    let key = name.to_lowercase();
    CITY_TABLE
        .iter()
        .find(|record| record.name == key)
        .or_else(|| CITY_TABLE.iter().find(|record| record.name == DEFAULT_CITY))
        .unwrap_or(&CITY_TABLE[0])
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn forecast_for(record: &CityRecord, today: NaiveDate) -> Vec<ForecastDay> {
    (0..FORECAST_DAYS_MAX as u64)
        .map(|i| {
            let date = today + Days::new(i);
            let variation = 5.0 * (i as f64).sin();
            ForecastDay {
                date: date.format("%m/%d/%Y").to_string(),
                day_name: date.format("%a").to_string(),
                temp: (record.temp as f64 + variation).round() as i32,
                description: record.description.to_string(),
                condition: record.condition,
                icon: MOCK_ICON.to_string(),
            }
        })
        .collect()
}

/// Synthesize weather for a named city. Pure and deterministic given `today`.
pub fn by_city(name: &str, today: NaiveDate) -> WeatherBundle {
    let record = lookup(name);
    let current = CurrentConditions {
        city: capitalize(name),
        country: record.country.to_string(),
        temp: record.temp,
        feels_like: record.temp - 2,
        temp_min: record.temp - 3,
        temp_max: record.temp + 4,
        description: record.description.to_string(),
        condition: record.condition,
        humidity: MOCK_HUMIDITY,
        wind_speed: MOCK_WIND_SPEED,
        lat: record.lat,
        lon: record.lon,
    };
    WeatherBundle {
        current,
        forecast: forecast_for(record, today),
    }
}

/// Classify the point into one of seven hand-tuned bounding boxes and
/// delegate to the city table; London when no box matches.
pub fn by_coords(lat: f64, lon: f64, today: NaiveDate) -> WeatherBundle {
    by_city(nearest_city(lat, lon), today)
}

fn nearest_city(lat: f64, lon: f64) -> &'static str {
    if lat > 40.0 && lat < 50.0 && lon > -5.0 && lon < 10.0 {
        "Paris"
    } else if lat > 35.0 && lat < 45.0 && lon > -80.0 && lon < -70.0 {
        "New York"
    } else if lat > 30.0 && lat < 40.0 && lon > 135.0 && lon < 145.0 {
        "Tokyo"
    } else if lat < -30.0 && lat > -35.0 && lon > 145.0 && lon < 155.0 {
        "Sydney"
    } else if lat > 20.0 && lat < 30.0 && lon > 50.0 && lon < 60.0 {
        "Dubai"
    } else if lat > 50.0 && lat < 60.0 && lon > 35.0 && lon < 40.0 {
        "Moscow"
    } else if lat > 15.0 && lat < 25.0 && lon > 70.0 && lon < 75.0 {
        "Mumbai"
    } else {
        "London"
    }
}

//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// Maximum entries in the recent-cities buffer.
pub const RECENT_CITIES_MAX: usize = 4;

/// Maximum distinct calendar days in a forecast.
pub const FORECAST_DAYS_MAX: usize = 7;

/// Spinner timing while a fetch is in flight.
pub const SPINNER_TICK_MS: u64 = 120;
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Coarse weather classifier, distinct from the free-text description.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Storm,
    Mist,
    #[default]
    Other,
}

impl Condition {
    /// Classify the API's `main` label by case-insensitive substring.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("rain") || label.contains("drizzle") {
            Condition::Rain
        } else if label.contains("cloud") {
            Condition::Clouds
        } else if label.contains("clear") {
            Condition::Clear
        } else if label.contains("storm") || label.contains("thunder") {
            Condition::Storm
        } else if label.contains("snow") {
            Condition::Snow
        } else if label.contains("mist") || label.contains("fog") {
            Condition::Mist
        } else {
            Condition::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Storm => "Storm",
            Condition::Mist => "Mist",
            Condition::Other => "Other",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::Clear => "☀️",
            Condition::Clouds => "☁️",
            Condition::Rain => "🌧️",
            Condition::Snow => "❄️",
            Condition::Storm => "⛈️",
            Condition::Mist => "🌫️",
            Condition::Other => "🌤️",
        }
    }
}

/// A snapshot of weather at one location and time.
///
/// `temp_min ≤ temp ≤ temp_max` is expected but not guaranteed by the
/// source data; violations are display-only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    pub temp: i32,
    pub feels_like: i32,
    pub temp_min: i32,
    pub temp_max: i32,
    pub description: String,
    pub condition: Condition,
    pub humidity: u8,
    pub wind_speed: f64,
    pub lat: f64,
    pub lon: f64,
}

/// One day's projected weather summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    pub date: String,
    pub day_name: String,
    pub temp: i32,
    pub description: String,
    pub condition: Condition,
    pub icon: String,
}

/// Unit of a successful fetch: current conditions plus the daily forecast.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherBundle {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Core data (visible in debug) ---
    /// Weather data lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherBundle>,

    /// Whether a refresh is in progress (keeps showing current data during fetch)
    #[debug(section = "Weather", label = "Refreshing")]
    pub is_refreshing: bool,

    /// Monotonic fetch sequence; completions carrying an older value are stale
    #[debug(section = "Weather", label = "Request")]
    pub request_seq: u64,

    /// Recently viewed cities, most recent first, capped at four
    #[debug(section = "History", label = "Recent", debug_fmt)]
    pub recent: Vec<CurrentConditions>,

    /// Index into the forecast selected on the timeline
    #[debug(section = "Timeline", label = "Selected")]
    pub selected_day: usize,

    /// Transient highlight on the timeline, cleared by selection
    #[debug(skip)]
    pub hovered_day: Option<usize>,

    // --- Spinner internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,

    // --- Search mode (skipped) ---
    /// Whether the search overlay is open
    #[debug(skip)]
    pub search_mode: bool,

    /// Current search query
    #[debug(skip)]
    pub search_query: String,
}

impl AppState {
    /// Begin a fetch attempt: bump the request sequence, flip into
    /// Loading (or refreshing when data is already on screen), reset the
    /// spinner. Returns the sequence number to tag the effect with.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        if self.weather.is_loaded() {
            self.is_refreshing = true;
        } else {
            self.weather = DataResource::Loading;
        }
        self.tick_count = 0;
        self.request_seq
    }

    /// Insert into the recent-cities buffer: case-insensitive dedupe by
    /// city name, most recent first, truncated to capacity.
    pub fn remember_city(&mut self, current: CurrentConditions) {
        let needle = current.city.to_lowercase();
        self.recent.retain(|c| c.city.to_lowercase() != needle);
        self.recent.insert(0, current);
        self.recent.truncate(RECENT_CITIES_MAX);
    }

    pub fn forecast_len(&self) -> usize {
        self.weather.data().map_or(0, |b| b.forecast.len())
    }

    pub fn selected_forecast(&self) -> Option<&ForecastDay> {
        self.weather
            .data()
            .and_then(|b| b.forecast.get(self.selected_day))
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            weather: DataResource::Empty,
            is_refreshing: false,
            request_seq: 0,
            recent: Vec::new(),
            selected_day: 0,
            hovered_day: None,
            tick_count: 0,
            search_mode: false,
            search_query: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str) -> CurrentConditions {
        CurrentConditions {
            city: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_condition_from_label() {
        assert_eq!(Condition::from_label("Rain"), Condition::Rain);
        assert_eq!(Condition::from_label("Drizzle"), Condition::Rain);
        assert_eq!(Condition::from_label("Clouds"), Condition::Clouds);
        assert_eq!(Condition::from_label("clear"), Condition::Clear);
        assert_eq!(Condition::from_label("Thunderstorm"), Condition::Storm);
        assert_eq!(Condition::from_label("Snow"), Condition::Snow);
        assert_eq!(Condition::from_label("Fog"), Condition::Mist);
        assert_eq!(Condition::from_label("Haze"), Condition::Other);
    }

    #[test]
    fn test_remember_city_moves_duplicate_to_front() {
        let mut state = AppState::default();
        state.remember_city(city("A"));
        state.remember_city(city("B"));
        state.remember_city(city("C"));
        state.remember_city(city("A"));

        let names: Vec<&str> = state.recent.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_remember_city_dedupe_is_case_insensitive() {
        let mut state = AppState::default();
        state.remember_city(city("london"));
        state.remember_city(city("London"));

        assert_eq!(state.recent.len(), 1);
        assert_eq!(state.recent[0].city, "London");
    }

    #[test]
    fn test_remember_city_never_exceeds_capacity() {
        let mut state = AppState::default();
        for name in ["A", "B", "C", "D", "E"] {
            state.remember_city(city(name));
        }

        assert_eq!(state.recent.len(), RECENT_CITIES_MAX);
        let names: Vec<&str> = state.recent.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, vec!["E", "D", "C", "B"]);
    }

    #[test]
    fn test_begin_fetch_bumps_sequence_and_sets_loading() {
        let mut state = AppState::default();
        let seq = state.begin_fetch();
        assert_eq!(seq, 1);
        assert!(state.weather.is_loading());
        assert!(!state.is_refreshing);

        state.weather = DataResource::Loaded(WeatherBundle::default());
        let seq = state.begin_fetch();
        assert_eq!(seq, 2);
        assert!(state.weather.is_loaded());
        assert!(state.is_refreshing);
    }

    #[test]
    fn test_state_json_round_trip() {
        let mut state = AppState::default();
        state.remember_city(city("Tokyo"));
        state.weather = DataResource::Loaded(WeatherBundle::default());
        state.selected_day = 3;

        let json = serde_json::to_string(&state).expect("serialize");
        let back: AppState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.recent.len(), 1);
        assert_eq!(back.selected_day, 3);
        assert!(back.weather.is_loaded());
    }
}

//! Actions - user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherBundle;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: fetch weather for a named city (triggers async task)
    WeatherFetchCity(String),

    /// Intent: fetch weather for geolocation coordinates
    WeatherFetchCoords { lat: f64, lon: f64 },

    /// Result: fetch completed; `seq` identifies the originating request
    WeatherDidLoad { seq: u64, bundle: WeatherBundle },

    /// Result: fetch failed
    WeatherDidError { seq: u64, message: String },

    // ===== Search category =====
    /// Open the city search overlay
    SearchOpen,

    /// Close the search overlay (cancel)
    SearchClose,

    /// Search query text changed
    SearchQueryChange(String),

    /// Submit the search query
    SearchQuerySubmit(String),

    // ===== Timeline category =====
    /// Select a forecast day (clamped to the forecast length)
    DaySelect(usize),

    /// Move the transient hover highlight by one step
    DayHoverStep(i8),

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}

//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetchCity(city) => {
            let city = city.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            let seq = state.begin_fetch();
            DispatchResult::changed_with(Effect::FetchByCity { seq, city })
        }

        Action::WeatherFetchCoords { lat, lon } => {
            let seq = state.begin_fetch();
            DispatchResult::changed_with(Effect::FetchByCoords { seq, lat, lon })
        }

        Action::WeatherDidLoad { seq, bundle } => {
            if seq != state.request_seq {
                // Stale completion from an overtaken request
                return DispatchResult::unchanged();
            }
            state.remember_city(bundle.current.clone());
            state.weather = DataResource::Loaded(bundle);
            state.is_refreshing = false;
            state.selected_day = 0;
            state.hovered_day = None;
            DispatchResult::changed()
        }

        Action::WeatherDidError { seq, message } => {
            if seq != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(message);
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.search_query.clear();
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            state.search_query.clear();
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.search_query = query;
            DispatchResult::changed()
        }

        Action::SearchQuerySubmit(query) => {
            let query = query.trim().to_string();
            if query.is_empty() {
                return DispatchResult::unchanged();
            }
            state.search_mode = false;
            state.search_query.clear();
            let seq = state.begin_fetch();
            DispatchResult::changed_with(Effect::FetchByCity { seq, city: query })
        }

        // ===== Timeline actions =====
        Action::DaySelect(index) => {
            let len = state.forecast_len();
            if len == 0 {
                return DispatchResult::unchanged();
            }
            let clamped = index.min(len - 1);
            let hover_cleared = state.hovered_day.take().is_some();
            if clamped != state.selected_day {
                state.selected_day = clamped;
                DispatchResult::changed()
            } else if hover_cleared {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::DayHoverStep(step) => {
            let len = state.forecast_len();
            if len == 0 || step == 0 {
                return DispatchResult::unchanged();
            }
            let base = state.hovered_day.unwrap_or(state.selected_day) as i64;
            let next = (base + i64::from(step)).clamp(0, len as i64 - 1) as usize;
            if state.hovered_day == Some(next) {
                DispatchResult::unchanged()
            } else {
                state.hovered_day = Some(next);
                DispatchResult::changed()
            }
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.weather.is_loading() || state.is_refreshing {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

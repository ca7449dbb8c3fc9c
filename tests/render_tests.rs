//! Render snapshot tests using RenderHarness
//!
//! FRAMEWORK PATTERN: RenderHarness
//! - Create harness with terminal dimensions
//! - Render component to test buffer
//! - Convert to string for snapshot testing

use chrono::NaiveDate;
use tui_dispatch::{testing::*, DataResource};
use weatherbrew::{
    components::{
        CityCards, CityCardsProps, Component, Dashboard, DashboardProps, SearchOverlay,
        SearchOverlayProps, WeekTimeline, WeekTimelineProps,
    },
    mock,
    state::{AppState, WeatherBundle},
};

fn mock_bundle() -> WeatherBundle {
    mock::by_city("Kerala", NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date"))
}

fn loaded_state() -> AppState {
    AppState {
        weather: DataResource::Loaded(mock_bundle()),
        ..Default::default()
    }
}

#[test]
fn test_render_loading_state() {
    // PATTERN: RenderHarness for visual testing
    let mut render = RenderHarness::new(80, 24);
    let mut component = Dashboard;

    let state = AppState {
        weather: DataResource::Loading,
        tick_count: 0,
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = DashboardProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(
        output.contains("Fetching weather"),
        "Should show loading message:\n{}",
        output
    );
}

#[test]
fn test_render_loaded_dashboard() {
    let mut render = RenderHarness::new(100, 30);
    let mut component = Dashboard;

    let state = loaded_state();

    let output = render.render_to_string_plain(|frame| {
        let props = DashboardProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Kerala"), "Should show city name");
    assert!(output.contains("light rain"), "Should show description");
    assert!(
        output.contains("Comfort Status"),
        "Should show the status panel"
    );
}

#[test]
fn test_render_error_state() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = Dashboard;

    let state = AppState {
        weather: DataResource::Failed("City not found: Gotham".into()),
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = DashboardProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Error"), "Should show error label");
    assert!(
        output.contains("City not found: Gotham"),
        "Should show error message"
    );
    assert!(output.contains("search again"), "Should show search hint");
}

#[test]
fn test_render_initial_state() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = Dashboard;

    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = DashboardProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    // Empty state should prompt user to search
    assert!(
        output.contains("to search for a city"),
        "Should show search prompt"
    );
}

#[test]
fn test_render_help_bar() {
    let mut render = RenderHarness::new(100, 24);
    let mut component = Dashboard;

    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = DashboardProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    // Should show keybinding hints
    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("refresh"), "Should show refresh hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_timeline_labels() {
    let mut render = RenderHarness::new(80, 16);
    let mut component = WeekTimeline;

    let bundle = mock_bundle();

    let output = render.render_to_string_plain(|frame| {
        let props = WeekTimelineProps {
            forecast: &bundle.forecast,
            selected: 0,
            hovered: None,
        };
        component.render(frame, frame.area(), props);
    });

    // Fixed start date is a Monday, so labels run Mon..Sun
    for day in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] {
        assert!(output.contains(day), "Should show {} label:\n{}", day, output);
    }
    // Temperature labels ride above the curve
    assert!(output.contains('°'), "Should show temperature labels");
}

#[test]
fn test_render_timeline_tiny_area_is_blank() {
    let mut render = RenderHarness::new(20, 2);
    let mut component = WeekTimeline;

    let bundle = mock_bundle();

    let output = render.render_to_string_plain(|frame| {
        let props = WeekTimelineProps {
            forecast: &bundle.forecast,
            selected: 0,
            hovered: None,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(
        output.trim().is_empty(),
        "Too-small area should render nothing:\n{}",
        output
    );
}

#[test]
fn test_render_city_cards() {
    let mut render = RenderHarness::new(30, 20);
    let mut component = CityCards;

    let date = NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date");
    let cities = vec![
        mock::by_city("London", date).current,
        mock::by_city("Tokyo", date).current,
    ];

    let output = render.render_to_string_plain(|frame| {
        let props = CityCardsProps { cities: &cities };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Recently Searched"), "Should show title");
    assert!(output.contains("London"), "Should show first card");
    assert!(output.contains("Tokyo"), "Should show second card");
}

#[test]
fn test_render_city_cards_empty() {
    let mut render = RenderHarness::new(30, 10);
    let mut component = CityCards;

    let output = render.render_to_string_plain(|frame| {
        let props = CityCardsProps { cities: &[] };
        component.render(frame, frame.area(), props);
    });

    assert!(
        output.contains("No recent searches"),
        "Should show empty placeholder"
    );
}

#[test]
fn test_render_search_overlay() {
    let mut render = RenderHarness::new(60, 20);
    let mut component = SearchOverlay::new();
    component.set_open(true);

    let output = render.render_to_string_plain(|frame| {
        let props = SearchOverlayProps {
            query: "Lond",
            is_focused: true,
            on_query_change: weatherbrew::action::Action::SearchQueryChange,
            on_query_submit: weatherbrew::action::Action::SearchQuerySubmit,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Lond"), "Should show typed query");
    assert!(output.contains("Esc"), "Should show cancel hint");
}

//! Action and state tests using TestHarness
//!
//! FRAMEWORK PATTERN: TestHarness
//! - Create harness with initial state
//! - Emit actions to simulate user/async events
//! - Drain and assert emitted actions
//! - Use fluent assertions for readable tests

use chrono::NaiveDate;
use tui_dispatch::testing::*;
use tui_dispatch::{assert_emitted, assert_not_emitted, EffectStore, NumericComponentId};
use weatherbrew::{
    action::Action,
    components::{Component, Dashboard, DashboardProps},
    effect::Effect,
    mock,
    reducer::reducer,
    state::{AppState, WeatherBundle},
};

fn mock_bundle() -> WeatherBundle {
    mock::by_city("Kerala", NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date"))
}

#[test]
fn test_reducer_city_fetch() {
    // PATTERN: Create store with reducer, dispatch actions, verify state
    let mut store = EffectStore::new(AppState::default(), reducer);

    // Initial state
    assert!(store.state().weather.is_empty());

    // Dispatch fetch - should set loading and return a fetch effect
    let result = store.dispatch(Action::WeatherFetchCity("Kerala".into()));
    assert!(result.changed, "State should change");
    assert!(store.state().weather.is_loading());
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        result.effects[0],
        Effect::FetchByCity { seq: 1, ref city } if city == "Kerala"
    ));
}

#[test]
fn test_reducer_weather_load() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::WeatherFetchCity("Kerala".into()));
    store.dispatch(Action::WeatherDidLoad {
        seq: 1,
        bundle: mock_bundle(),
    });

    assert!(store.state().weather.is_loaded());
    let bundle = store.state().weather.data().expect("loaded");
    assert_eq!(bundle.current.city, "Kerala");
    assert_eq!(bundle.forecast.len(), 7);

    // Loading a city also records it in the recents list
    assert_eq!(store.state().recent.len(), 1);
    assert_eq!(store.state().recent[0].city, "Kerala");
}

#[test]
fn test_reducer_discards_overtaken_response() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    // Two fetches in flight; only the second may land
    store.dispatch(Action::WeatherFetchCity("Kerala".into()));
    store.dispatch(Action::WeatherFetchCity("London".into()));

    let stale = store.dispatch(Action::WeatherDidLoad {
        seq: 1,
        bundle: mock_bundle(),
    });
    assert!(!stale.changed, "Overtaken response must be dropped");
    assert!(store.state().weather.is_loading());

    let bundle = mock::by_city("London", NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date"));
    store.dispatch(Action::WeatherDidLoad { seq: 2, bundle });
    assert_eq!(
        store.state().weather.data().expect("loaded").current.city,
        "London"
    );
}

#[test]
fn test_component_keyboard_events() {
    // PATTERN: TestHarness for component testing
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = Dashboard;

    // PATTERN: send_keys helper - parse key strings, call handler
    // NumericComponentId is a simple built-in ComponentId type
    let actions = harness.send_keys::<NumericComponentId, _, _>("/", |state, event| {
        let props = DashboardProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    // PATTERN: Fluent assertions
    actions.assert_count(1);
    actions.assert_first(Action::SearchOpen);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = Dashboard;

    // When not focused, events should be ignored
    let actions = harness.send_keys::<NumericComponentId, _, _>("/ r q", |state, event| {
        let props = DashboardProps {
            state,
            is_focused: false, // Not focused!
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    // PATTERN: Category is accessible via the ActionCategory trait
    let did_load = Action::WeatherDidLoad {
        seq: 1,
        bundle: mock_bundle(),
    };
    let search = Action::SearchOpen;
    let tick = Action::Tick;

    // Categories are inferred from naming convention
    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(search.category(), Some("search"));
    assert_eq!(tick.category(), None); // Uncategorized

    // Generated predicates for categorized actions
    assert!(did_load.is_weather_did());
    assert!(search.is_search());
}

#[test]
fn test_harness_emit_and_drain() {
    // PATTERN: Emit actions and drain them
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::WeatherFetchCity("Tokyo".into()));
    harness.emit(Action::DaySelect(2));
    harness.emit(Action::WeatherDidError {
        seq: 1,
        message: "oops".into(),
    });

    // Drain all emitted actions
    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::WeatherFetchCity("Kerala".into()),
        Action::WeatherDidLoad {
            seq: 1,
            bundle: mock_bundle(),
        },
    ];

    // PATTERN: assert_emitted! macro for pattern matching
    assert_emitted!(actions, Action::WeatherFetchCity(_));
    assert_emitted!(actions, Action::WeatherDidLoad { .. });
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidError { .. });
}

#[test]
fn test_recent_cities_ring() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let date = NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date");

    for (seq, city) in ["Kerala", "London", "Paris", "Tokyo", "Dubai"]
        .iter()
        .enumerate()
    {
        store.dispatch(Action::WeatherFetchCity(city.to_string()));
        store.dispatch(Action::WeatherDidLoad {
            seq: seq as u64 + 1,
            bundle: mock::by_city(city, date),
        });
    }

    // Capacity is four, most recent first
    let recents: Vec<_> = store.state().recent.iter().map(|c| c.city.as_str()).collect();
    assert_eq!(recents, vec!["Dubai", "Tokyo", "Paris", "London"]);
}

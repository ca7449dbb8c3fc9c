//! WeatherBrew - terminal weather dashboard

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weatherbrew::action::Action;
use weatherbrew::components::{
    Component, Dashboard, DashboardProps, SearchOverlay, SearchOverlayProps,
};
use weatherbrew::config::ServiceConfig;
use weatherbrew::effect::Effect;
use weatherbrew::reducer::reducer;
use weatherbrew::service::WeatherService;
use weatherbrew::state::{AppState, SPINNER_TICK_MS};

/// WeatherBrew - weather dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "weatherbrew")]
#[command(about = "A weather dashboard TUI with OpenWeatherMap and offline mock data")]
struct Args {
    /// City to load on startup
    #[arg(long, short, default_value = "Kerala")]
    city: String,

    /// Latitude for a coordinate lookup (requires --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude for a coordinate lookup (requires --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// OpenWeatherMap API key; falls back to OPENWEATHER_API_KEY,
    /// then to bundled mock data
    #[arg(long)]
    api_key: Option<String>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum BrewComponentId {
    Dashboard,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum BrewContext {
    Main,
    Search,
}

impl EventRoutingState<BrewComponentId, BrewContext> for AppState {
    fn focused(&self) -> Option<BrewComponentId> {
        if self.search_mode {
            Some(BrewComponentId::Search)
        } else {
            Some(BrewComponentId::Dashboard)
        }
    }

    fn modal(&self) -> Option<BrewComponentId> {
        if self.search_mode {
            Some(BrewComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: BrewComponentId) -> BrewContext {
        match id {
            BrewComponentId::Dashboard => BrewContext::Main,
            BrewComponentId::Search => BrewContext::Search,
        }
    }

    fn default_context(&self) -> BrewContext {
        BrewContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        lat,
        lon,
        api_key,
        debug: debug_args,
    } = Args::parse();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let config = ServiceConfig::new(api_key.or_else(|| std::env::var("OPENWEATHER_API_KEY").ok()));
    let service = WeatherService::new(config);

    let initial_action = match (lat, lon) {
        (Some(lat), Some(lon)) => Action::WeatherFetchCoords { lat, lon },
        _ => Action::WeatherFetchCity(city),
    };

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        service,
        initial_action,
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct BrewUi {
    dashboard: Dashboard,
    search: SearchOverlay,
}

impl BrewUi {
    fn new() -> Self {
        Self {
            dashboard: Dashboard,
            search: SearchOverlay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<BrewComponentId>,
    ) {
        event_ctx.set_component_area(BrewComponentId::Dashboard, area);

        let props = DashboardProps {
            state,
            is_focused: render_ctx.is_focused() && !state.search_mode,
        };
        self.dashboard.render(frame, area, props);

        self.search.set_open(state.search_mode);
        if state.search_mode {
            let modal_area = centered_rect(50, 8, area);
            event_ctx.set_component_area(BrewComponentId::Search, modal_area);
            let props = SearchOverlayProps {
                query: &state.search_query,
                is_focused: render_ctx.is_focused(),
                on_query_change: Action::SearchQueryChange,
                on_query_submit: Action::SearchQuerySubmit,
            };
            self.search.render(frame, area, props);
        } else {
            event_ctx.component_areas.remove(&BrewComponentId::Search);
        }
    }

    fn handle_dashboard_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = DashboardProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .dashboard
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.search.set_open(state.search_mode);
        let props = SearchOverlayProps {
            query: &state.search_query,
            is_focused: true,
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
        };
        let actions: Vec<_> = self.search.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    service: WeatherService,
    initial_action: Action,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(BrewUi::new()));
    let mut bus: EventBus<AppState, Action, BrewComponentId, BrewContext> = EventBus::new();
    let keybindings: Keybindings<BrewContext> = Keybindings::new();

    let ui_dashboard = Rc::clone(&ui);
    bus.register(BrewComponentId::Dashboard, move |event, state| {
        ui_dashboard
            .borrow_mut()
            .handle_dashboard_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(BrewComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(initial_action),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &service),
        )
        .await
}

/// Handle effects by spawning fetch tasks. Responses carry the request
/// sequence number so the reducer can discard overtaken completions.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, service: &WeatherService) {
    match effect {
        Effect::FetchByCity { seq, city } => {
            let service = service.clone();
            ctx.tasks().spawn("weather", async move {
                match service.by_city(&city).await {
                    Ok(bundle) => Action::WeatherDidLoad { seq, bundle },
                    Err(e) => Action::WeatherDidError {
                        seq,
                        message: e.to_string(),
                    },
                }
            });
        }
        Effect::FetchByCoords { seq, lat, lon } => {
            let service = service.clone();
            ctx.tasks().spawn("weather", async move {
                match service.by_coords(lat, lon).await {
                    Ok(bundle) => Action::WeatherDidLoad { seq, bundle },
                    Err(e) => Action::WeatherDidError {
                        seq,
                        message: e.to_string(),
                    },
                }
            });
        }
    }
}

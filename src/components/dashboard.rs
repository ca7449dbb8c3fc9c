use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::{DataResource, EventKind};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    CityCards, CityCardsProps, Component, HeroWeather, HeroWeatherProps, StatusPanel,
    StatusPanelProps, TopBar, TopBarProps, WeekTimeline, WeekTimelineProps,
};
use crate::action::Action;
use crate::state::{AppState, WeatherBundle};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for Dashboard - read-only view of state
pub struct DashboardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The root dashboard component
#[derive(Default)]
pub struct Dashboard;

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        let state = props.state;
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('/') => Some(Action::SearchOpen),
                KeyCode::Char('r') | KeyCode::F(5) => state
                    .weather
                    .data()
                    .map(|bundle| Action::WeatherFetchCity(bundle.current.city.clone())),
                KeyCode::Left => Some(Action::DaySelect(state.selected_day.saturating_sub(1))),
                KeyCode::Right => Some(Action::DaySelect(state.selected_day.saturating_add(1))),
                KeyCode::Char(c @ '1'..='7') => {
                    Some(Action::DaySelect(c as usize - '1' as usize))
                }
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            EventKind::Scroll { delta, .. } => {
                if *delta == 0 {
                    None
                } else {
                    Some(Action::DayHoverStep((*delta).signum() as i8))
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Top bar
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let state = props.state;
        let mut top_bar = TopBar;
        top_bar.render(
            frame,
            chunks[0],
            TopBarProps {
                current: state.weather.data().map(|b| &b.current),
            },
        );

        match &state.weather {
            DataResource::Loaded(bundle) => render_ready(frame, chunks[1], state, bundle),
            DataResource::Failed(error) => render_error(frame, chunks[1], state, error),
            DataResource::Loading => render_loading(frame, chunks[1], state),
            DataResource::Empty => render_empty(frame, chunks[1]),
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("/", "search"),
                    StatusBarHint::new("←→", "day"),
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn dashboard_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::horizontal([
        Constraint::Length(30), // Status panel
        Constraint::Min(30),    // Hero + timeline
        Constraint::Length(30), // Recent cities
    ])
    .split(area)
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, bundle: &WeatherBundle) {
    let columns = dashboard_columns(area);

    let mut status = StatusPanel;
    status.render(
        frame,
        columns[0],
        StatusPanelProps {
            current: &bundle.current,
        },
    );

    let center = Layout::vertical([
        Constraint::Percentage(45), // Hero
        Constraint::Percentage(55), // Timeline
    ])
    .split(columns[1]);

    let mut hero = HeroWeather;
    hero.render(
        frame,
        center[0],
        HeroWeatherProps {
            current: &bundle.current,
        },
    );

    let mut timeline = WeekTimeline;
    timeline.render(
        frame,
        center[1],
        WeekTimelineProps {
            forecast: &bundle.forecast,
            selected: state.selected_day,
            hovered: state.hovered_day,
        },
    );

    let mut cards = CityCards;
    cards.render(
        frame,
        columns[2],
        CityCardsProps {
            cities: &state.recent,
        },
    );
}

/// Error banner replaces the dashboard panels; the recent-cities column
/// stays visible.
fn render_error(frame: &mut Frame, area: Rect, state: &AppState, error: &str) {
    let columns = dashboard_columns(area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(columns[1]);

    frame.render_widget(Paragraph::new(Line::from(ERROR_ICON).centered()), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled("Error", Style::default().fg(Color::Red).bold())).centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            ))
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("/", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to search again", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[4],
    );

    let mut cards = CityCards;
    cards.render(
        frame,
        columns[2],
        CityCardsProps {
            cities: &state.recent,
        },
    );
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let line = Line::from(vec![
        Span::styled(
            state.spinner_frame(),
            Style::default().fg(Color::Rgb(199, 183, 163)),
        ),
        Span::styled(" Fetching weather...", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), chunks[0]);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("/", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to search for a city", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

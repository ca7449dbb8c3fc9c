use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::CurrentConditions;

pub struct StatusPanel;

pub struct StatusPanelProps<'a> {
    pub current: &'a CurrentConditions,
}

pub struct ComfortLevel {
    pub label: &'static str,
    pub color: Color,
    pub level: u8,
}

const COMFORT_BARS: u8 = 5;

/// Seven temperature bands, coldest to hottest.
pub fn comfort_level(temp: i32) -> ComfortLevel {
    if temp < 0 {
        ComfortLevel {
            label: "Freezing",
            color: Color::Rgb(74, 144, 226),
            level: 1,
        }
    } else if temp < 10 {
        ComfortLevel {
            label: "Cold",
            color: Color::Rgb(123, 163, 204),
            level: 2,
        }
    } else if temp < 20 {
        ComfortLevel {
            label: "Cool",
            color: Color::Rgb(199, 183, 163),
            level: 3,
        }
    } else if temp < 26 {
        ComfortLevel {
            label: "Comfortable",
            color: Color::Rgb(168, 208, 141),
            level: 4,
        }
    } else if temp < 32 {
        ComfortLevel {
            label: "Warm",
            color: Color::Rgb(244, 185, 66),
            level: 4,
        }
    } else if temp < 38 {
        ComfortLevel {
            label: "Hot",
            color: Color::Rgb(224, 123, 57),
            level: 3,
        }
    } else {
        ComfortLevel {
            label: "Dangerous",
            color: Color::Rgb(214, 69, 69),
            level: 2,
        }
    }
}

pub fn humidity_level(humidity: u8) -> &'static str {
    if humidity < 30 {
        "Low"
    } else if humidity < 60 {
        "Moderate"
    } else {
        "High"
    }
}

pub fn wind_level(speed: f64) -> &'static str {
    if speed < 5.0 {
        "Calm"
    } else if speed < 15.0 {
        "Moderate"
    } else if speed < 25.0 {
        "Strong"
    } else {
        "Very Strong"
    }
}

fn comfort_bar(comfort: &ComfortLevel) -> Line<'static> {
    let mut spans = Vec::with_capacity(COMFORT_BARS as usize + 1);
    for level in 1..=COMFORT_BARS {
        let style = if level <= comfort.level {
            Style::default().fg(comfort.color)
        } else {
            Style::default().fg(Color::Rgb(60, 55, 49))
        };
        spans.push(Span::styled("▰ ", style));
    }
    spans.push(Span::styled(
        comfort.label,
        Style::default().fg(comfort.color).bold(),
    ));
    Line::from(spans)
}

fn metric(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::Gray)),
    ])
}

impl Component<Action> for StatusPanel {
    type Props<'a> = StatusPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let current = props.current;
        let comfort = comfort_level(current.temp);

        let lines = vec![
            comfort_bar(&comfort),
            Line::default(),
            metric("Feels Like", format!("{}°C", current.feels_like)),
            metric(
                "Humidity",
                format!("{}% · {}", current.humidity, humidity_level(current.humidity)),
            ),
            metric(
                "Wind",
                format!(
                    "{:.1} m/s · {}",
                    current.wind_speed,
                    wind_level(current.wind_speed)
                ),
            ),
            Line::default(),
            metric(
                "Location",
                format!("{:.2}°, {:.2}°", current.lat, current.lon),
            ),
        ];

        let block = Block::bordered()
            .title(" Comfort Status ")
            .border_style(Style::default().fg(Color::Rgb(60, 55, 49)))
            .padding(Padding::uniform(1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

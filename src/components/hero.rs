use artbox::{
    fonts, integrations::ratatui::ArtBox, Alignment as ArtAlignment, Color as ArtColor, Fill,
    LinearGradient, Renderer,
};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::CurrentConditions;

/// Hero display: condition glyph, large temperature, min/max pills,
/// description line.
pub struct HeroWeather;

pub struct HeroWeatherProps<'a> {
    pub current: &'a CurrentConditions,
}

fn temperature_gradient(temp: i32) -> Fill {
    let (start, end) = match temp {
        t if t < 0 => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(200, 230, 255)),
        t if t < 15 => (ArtColor::rgb(100, 180, 255), ArtColor::rgb(150, 220, 200)),
        t if t < 25 => (ArtColor::rgb(100, 200, 150), ArtColor::rgb(255, 220, 100)),
        t if t < 35 => (ArtColor::rgb(255, 180, 80), ArtColor::rgb(255, 120, 80)),
        _ => (ArtColor::rgb(255, 100, 80), ArtColor::rgb(255, 60, 60)),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

impl Component<Action> for HeroWeather {
    type Props<'a> = HeroWeatherProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let current = props.current;
        let chunks = Layout::vertical([
            Constraint::Length(1), // Glyph
            Constraint::Length(1),
            Constraint::Max(6), // FIGlet temperature
            Constraint::Length(1), // Min/max pills
            Constraint::Length(1), // Description
        ])
        .flex(Flex::Center)
        .split(area);

        let glyph = Line::from(current.condition.glyph()).centered();
        frame.render_widget(Paragraph::new(glyph), chunks[0]);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(current.temp));
        let temp_text = format!("{}°C", current.temp);
        frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[2]);

        let pills = Line::from(vec![
            Span::styled(
                format!(" Min {}° ", current.temp_min),
                Style::default().fg(Color::Rgb(150, 200, 255)),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" Max {}° ", current.temp_max),
                Style::default().fg(Color::Rgb(255, 180, 80)),
            ),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(Paragraph::new(pills), chunks[3]);

        let description = Line::from(vec![Span::styled(
            format!("{} with {}", current.condition.label(), current.description),
            Style::default().fg(Color::Gray).italic(),
        )])
        .centered();
        frame.render_widget(Paragraph::new(description), chunks[4]);
    }
}

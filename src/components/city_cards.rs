use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::CurrentConditions;

/// Recently searched cities, most recent first.
pub struct CityCards;

pub struct CityCardsProps<'a> {
    pub cities: &'a [CurrentConditions],
}

const CARD_HEIGHT: u16 = 5;

fn render_card(frame: &mut Frame, area: Rect, city: &CurrentConditions) {
    let block = Block::bordered().border_style(Style::default().fg(Color::Rgb(60, 55, 49)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                city.city.clone(),
                Style::default().fg(Color::Rgb(232, 219, 196)).bold(),
            ),
            Span::styled(format!(" {}", city.country), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("  {}", city.condition.glyph())),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}°C", city.temp),
                Style::default().fg(Color::Rgb(199, 183, 163)).bold(),
            ),
            Span::styled(
                format!("  {}", city.condition.label()),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "feels {}° · {}°–{}°",
                city.feels_like, city.temp_min, city.temp_max
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

impl Component<Action> for CityCards {
    type Props<'a> = CityCardsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let title = Line::from(Span::styled(
            "Recently Searched",
            Style::default().fg(Color::Rgb(199, 183, 163)).bold(),
        ));
        let chunks =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        if props.cities.is_empty() {
            let empty = Line::from(Span::styled(
                "No recent searches",
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(Paragraph::new(empty), chunks[1]);
            return;
        }

        let mut remaining = chunks[1];
        for city in props.cities {
            if remaining.height < CARD_HEIGHT {
                break;
            }
            let card = Rect {
                height: CARD_HEIGHT,
                ..remaining
            };
            render_card(frame, card, city);
            remaining.y += CARD_HEIGHT;
            remaining.height -= CARD_HEIGHT;
        }
    }
}

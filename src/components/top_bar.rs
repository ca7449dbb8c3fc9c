use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::CurrentConditions;

pub struct TopBar;

pub struct TopBarProps<'a> {
    pub current: Option<&'a CurrentConditions>,
}

impl Component<Action> for TopBar {
    type Props<'a> = TopBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(24)]).split(area);

        let mut left = vec![Span::styled(
            "WeatherBrew",
            Style::default().fg(Color::Rgb(199, 183, 163)).bold(),
        )];
        if let Some(current) = props.current {
            left.push(Span::raw("  "));
            left.push(Span::styled(
                format!("{}, {}", current.city, current.country),
                Style::default().fg(Color::Gray),
            ));
            left.push(Span::styled(
                format!("  {}", Local::now().format("%A, %B %e, %Y")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(left)), chunks[0]);

        let hint = Line::from(vec![
            Span::styled("press ", Style::default().fg(Color::DarkGray)),
            Span::styled("/", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to search", Style::default().fg(Color::DarkGray)),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(hint), chunks[1]);
    }
}

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Paragraph,
    },
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::chart::{self, CurveLayout};
use crate::state::ForecastDay;

/// Week timeline: a row of weekday labels above the forecast curve.
pub struct WeekTimeline;

pub struct WeekTimelineProps<'a> {
    pub forecast: &'a [ForecastDay],
    pub selected: usize,
    pub hovered: Option<usize>,
}

const CURVE: Color = Color::Rgb(199, 183, 163);
const ACCENT: Color = Color::Rgb(109, 41, 50);
const OUTLINE: Color = Color::Rgb(232, 219, 196);

/// Label inset in braille pixels (a cell is 2x4 dots).
const CHART_PADDING: f64 = 6.0;

/// Vertical distance between fill scanlines, in braille pixels.
const SCANLINE_STEP: f64 = 2.0;

impl Component<Action> for WeekTimeline {
    type Props<'a> = WeekTimelineProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.forecast.is_empty() || area.height < 3 {
            return;
        }

        let chunks =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);

        render_day_row(frame, chunks[0], &props);
        render_curve(frame, chunks[1], &props);
    }
}

fn render_day_row(frame: &mut Frame, area: Rect, props: &WeekTimelineProps<'_>) {
    let constraints =
        vec![Constraint::Ratio(1, props.forecast.len() as u32); props.forecast.len()];
    let columns = Layout::horizontal(constraints).split(area);

    for (index, day) in props.forecast.iter().enumerate() {
        let style = if index == props.selected {
            Style::default().fg(Color::Black).bg(CURVE).bold()
        } else if Some(index) == props.hovered {
            Style::default().fg(OUTLINE).underlined()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label = Line::from(Span::styled(format!(" {} ", day.day_name), style)).centered();
        frame.render_widget(Paragraph::new(label), columns[index]);
    }
}

/// Project into braille-dot space (2x4 dots per cell, the terminal's
/// device-pixel-ratio analogue), then paint: gradient fill, smoothed
/// stroke, sample dots with selection glow, temperature labels.
fn render_curve(frame: &mut Frame, area: Rect, props: &WeekTimelineProps<'_>) {
    let layout = CurveLayout {
        width: f64::from(area.width) * 2.0,
        height: f64::from(area.height) * 4.0,
        padding: CHART_PADDING,
    };
    if layout.graph_height() <= 0.0 {
        return;
    }

    let temps: Vec<i32> = props.forecast.iter().map(|day| day.temp).collect();
    let points = chart::project(&temps, layout);
    let path = chart::smooth_path(&points);
    let flip = |y: f64| layout.height - y;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, layout.width])
        .y_bounds([0.0, layout.height])
        .paint(|ctx| {
            // Filled area under the curve, one scanline at a time
            let mut row = layout.padding;
            while row < layout.baseline() {
                let shade = chart::gradient_shade(row, layout.height);
                for (x1, x2) in chart::scanline_runs(&path, row) {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1: flip(row),
                        x2,
                        y2: flip(row),
                        color: shade,
                    });
                }
                row += SCANLINE_STEP;
            }

            // Stroked curve
            for pair in path.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].0,
                    y1: flip(pair[0].1),
                    x2: pair[1].0,
                    y2: flip(pair[1].1),
                    color: CURVE,
                });
            }

            // Sample dots, enlarged with a glow ring when active
            for (index, point) in points.iter().enumerate() {
                let active = index == props.selected || Some(index) == props.hovered;
                if active {
                    ctx.draw(&Circle {
                        x: point.x,
                        y: flip(point.y),
                        radius: 3.0,
                        color: ACCENT,
                    });
                }
                ctx.draw(&Circle {
                    x: point.x,
                    y: flip(point.y),
                    radius: if active { 2.0 } else { 1.5 },
                    color: OUTLINE,
                });
                ctx.draw(&Points {
                    coords: &[(point.x, flip(point.y))],
                    color: if index == props.selected { ACCENT } else { CURVE },
                });

                let label_style = if active {
                    Style::default().fg(OUTLINE).bold()
                } else {
                    Style::default().fg(OUTLINE)
                };
                let label = format!("{}°", point.temp);
                // A printed cell spans two braille columns; pull the label
                // left when it would run off the right edge.
                let label_width = label.chars().count() as f64 * 2.0;
                let label_x = point.x.min(layout.width - label_width).max(0.0);
                let label_y = (point.y - 4.0).max(1.0);
                ctx.print(
                    label_x,
                    flip(label_y),
                    Line::from(Span::styled(label, label_style)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use chrono::NaiveDate;
    use tui_dispatch::testing::RenderHarness;

    #[test]
    fn test_render_last_label_stays_inside_the_canvas() {
        let mut render = RenderHarness::new(80, 16);
        let mut component = WeekTimeline;

        // Paris temps oscillate 15,19,20,16,11,10,14; the final sample
        // projects onto the right edge, where its label must pull left
        let forecast = mock::by_city(
            "paris",
            NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date"),
        )
        .forecast;

        let output = render.render_to_string_plain(|frame| {
            component.render(
                frame,
                frame.area(),
                WeekTimelineProps {
                    forecast: &forecast,
                    selected: 0,
                    hovered: None,
                },
            );
        });

        assert!(
            output.contains("14°"),
            "rightmost temperature label should be fully visible:\n{}",
            output
        );
    }
}

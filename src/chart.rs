//! Forecast curve geometry
//!
//! Projects a sequence of daily temperatures onto a pixel surface and
//! produces the smoothed path, fill scanlines, and gradient shades the
//! timeline paints onto a braille canvas. Everything here is pure; the
//! drawing happens in `components::timeline`.

use ratatui::style::Color;

/// Pixel surface the curve is projected onto, with a fixed inset
/// reserved for the temperature labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl CurveLayout {
    pub fn graph_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// Screen y of the zero-temperature baseline (bottom inset).
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

/// One projected sample. `y` is in screen coordinates: smaller is higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
    pub temp: i32,
}

/// Flattening resolution for each Bezier segment.
const SEGMENT_STEPS: usize = 12;

/// Min/max-normalize the samples onto the layout. The range is clamped
/// to at least one degree so an all-equal sequence does not divide by
/// zero; those points all land on the same row.
pub fn project(temps: &[i32], layout: CurveLayout) -> Vec<CurvePoint> {
    if temps.is_empty() {
        return Vec::new();
    }
    let min = temps.iter().copied().min().unwrap_or(0);
    let max = temps.iter().copied().max().unwrap_or(0);
    let range = (f64::from(max - min)).max(1.0);
    let span = layout.graph_height();
    let count = temps.len();

    temps
        .iter()
        .enumerate()
        .map(|(i, &temp)| {
            let x = if count == 1 {
                0.0
            } else {
                layout.width * i as f64 / (count - 1) as f64
            };
            let normalized = f64::from(temp - min) / range;
            CurvePoint {
                x,
                y: layout.height - layout.padding - normalized * span,
                temp,
            }
        })
        .collect()
}

fn cubic(p0: f64, c0: f64, c1: f64, p1: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * c0 + 3.0 * u * t * t * c1 + t * t * t * p1
}

/// Soften the polyline with pairwise cubic Bezier segments. Both control
/// points sit at the horizontal midpoint between consecutive samples,
/// each keeping its own endpoint's y. This visually smooths the line but
/// is not an interpolating spline.
pub fn smooth_path(points: &[CurvePoint]) -> Vec<(f64, f64)> {
    if points.is_empty() {
        return Vec::new();
    }
    let mut path = vec![(points[0].x, points[0].y)];
    for pair in points.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let mid_x = (prev.x + next.x) / 2.0;
        for step in 1..=SEGMENT_STEPS {
            let t = step as f64 / SEGMENT_STEPS as f64;
            path.push((
                cubic(prev.x, mid_x, mid_x, next.x, t),
                cubic(prev.y, prev.y, next.y, next.y, t),
            ));
        }
    }
    path
}

/// Horizontal runs of the area under the curve at screen row `row`:
/// x-intervals where the path sits at or above that row. Used to fill
/// the gradient area one scanline at a time.
pub fn scanline_runs(path: &[(f64, f64)], row: f64) -> Vec<(f64, f64)> {
    let mut runs = Vec::new();
    let mut open: Option<f64> = None;

    for &(x, y) in path {
        let covered = y <= row;
        match (covered, open) {
            (true, None) => open = Some(x),
            (false, Some(start)) => {
                runs.push((start, x));
                open = None;
            }
            _ => {}
        }
    }
    if let (Some(start), Some(&(x, _))) = (open, path.last()) {
        runs.push((start, x));
    }
    runs
}

/// Vertical gradient for the filled area: strongest at the top of the
/// surface, fading toward the baseline. Terminal cells have no alpha,
/// so opacity is emulated by fading the fill color toward black.
pub fn gradient_shade(y: f64, height: f64) -> Color {
    let t = if height > 0.0 {
        (y / height).clamp(0.0, 1.0)
    } else {
        0.0
    };
    // 30% and 5% of the curve color #C7B7A3
    let top = (60.0, 55.0, 49.0);
    let bottom = (10.0, 9.0, 8.0);
    Color::Rgb(
        (top.0 + (bottom.0 - top.0) * t) as u8,
        (top.1 + (bottom.1 - top.1) * t) as u8,
        (top.2 + (bottom.2 - top.2) * t) as u8,
    )
}

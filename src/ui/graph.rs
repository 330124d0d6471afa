//! Character-cell rendering of the recent-times line graph.

use crate::core::report::{GraphPoint, PlotArea};
use crate::utils::formatting::format_minutes;

const POINT: char = 'o';
const LINE: char = '.';

/// Character grid sized `columns` x `rows`.
struct Canvas {
    cells: Vec<Vec<char>>,
}

impl Canvas {
    fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec![' '; columns]; rows],
        }
    }

    fn set(&mut self, col: usize, row: usize, c: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            // points win over line segments
            if *cell != POINT {
                *cell = c;
            }
        }
    }

    /// Straight segment between two cells.
    fn line(&mut self, from: (usize, usize), to: (usize, usize)) {
        let (c0, r0) = (from.0 as i64, from.1 as i64);
        let (c1, r1) = (to.0 as i64, to.1 as i64);
        let steps = (c1 - c0).abs().max((r1 - r0).abs());
        for s in 1..steps {
            let col = c0 + (c1 - c0) * s / steps;
            let row = r0 + (r1 - r0) * s / steps;
            self.set(col as usize, row as usize, LINE);
        }
    }
}

/// Map a plot coordinate onto a cell index in `0..cells`.
fn to_cell(v: f64, extent: f64, cells: usize) -> usize {
    if cells <= 1 || extent <= 0.0 {
        return 0;
    }
    let ratio = (v / extent).clamp(0.0, 1.0);
    (ratio * (cells - 1) as f64).round() as usize
}

/// Draw `points` (as produced by `graph_points` for `area`) on a
/// `columns` x `rows` character canvas, with a min/max gutter on the left
/// and the display labels underneath. Empty input draws nothing.
pub fn draw(points: &[GraphPoint], area: PlotArea, columns: usize, rows: usize) -> String {
    if points.is_empty() || columns == 0 || rows == 0 {
        return String::new();
    }

    let cells: Vec<(usize, usize)> = points
        .iter()
        .map(|p| {
            (
                to_cell(p.x, area.width, columns),
                to_cell(p.y, area.height, rows),
            )
        })
        .collect();

    let mut canvas = Canvas::new(columns, rows);
    for &(col, row) in &cells {
        canvas.set(col, row, POINT);
    }
    for pair in cells.windows(2) {
        canvas.line(pair[0], pair[1]);
    }

    let max_time = points.iter().map(|p| p.total_5k).fold(f64::NEG_INFINITY, f64::max);
    let min_time = points.iter().map(|p| p.total_5k).fold(f64::INFINITY, f64::min);
    let top_label = format_minutes(max_time);
    let bottom_label = format_minutes(min_time);
    let gutter = top_label.len().max(bottom_label.len());

    // rows holding the slowest and fastest points
    let top_row = cells.iter().map(|c| c.1).min().unwrap_or(0);
    let bottom_row = cells.iter().map(|c| c.1).max().unwrap_or(0);

    let mut out = String::new();
    for (r, row) in canvas.cells.iter().enumerate() {
        let label = if r == top_row {
            top_label.as_str()
        } else if r == bottom_row {
            bottom_label.as_str()
        } else {
            ""
        };
        let line: String = row.iter().collect();
        out.push_str(&format!("{label:>gutter$} |{}\n", line.trim_end()));
    }

    out.push_str(&format!("{:>gutter$} +{}\n", "", "-".repeat(columns)));

    // 1-based display labels under each point
    let mut axis = vec![' '; columns + 4];
    for (p, &(col, _)) in points.iter().zip(&cells) {
        for (k, ch) in p.label.to_string().chars().enumerate() {
            if let Some(slot) = axis.get_mut(col + k)
                && *slot == ' '
            {
                *slot = ch;
            }
        }
    }
    let axis: String = axis.into_iter().collect();
    out.push_str(&format!("{:>gutter$}  {}\n", "", axis.trim_end()));

    out
}

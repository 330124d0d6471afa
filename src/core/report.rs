//! Report queries over the loaded records: fastest totals, most recent runs,
//! and the line-graph projection of the recent totals.

use crate::models::SessionRecord;
use serde::Serialize;

/// One row of the fastest-times table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedTime {
    pub rank: usize,
    pub total_5k: f64,
}

/// Plotting rectangle in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            margin: 40.0,
        }
    }
}

/// A projected graph point. `label` is the 1-based display position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
    pub label: usize,
    pub total_5k: f64,
}

/// Fastest `n` totals, lowest first. Runs without a numeric total are
/// skipped; equal totals keep their insertion order.
pub fn top_n(records: &[SessionRecord], n: usize) -> Vec<RankedTime> {
    let mut totals: Vec<f64> = records.iter().filter_map(|r| r.total_5k().minutes()).collect();

    // sort_by is stable
    totals.sort_by(|a, b| a.total_cmp(b));

    totals
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, total_5k)| RankedTime {
            rank: i + 1,
            total_5k,
        })
        .collect()
}

/// Last `n` records, newest first. No filtering.
pub fn recent_n(records: &[SessionRecord], n: usize) -> Vec<&SessionRecord> {
    let start = records.len().saturating_sub(n);
    records[start..].iter().rev().collect()
}

/// Project the numeric totals of `recent` (newest first) into `area`.
///
/// The newest point sits on the right inset edge and the oldest on the left;
/// a single point is centred. The slowest total is drawn at the top inset
/// edge and the fastest at the bottom one. When all totals are equal the
/// value range falls back to `1.0`.
pub fn graph_points(recent: &[&SessionRecord], area: PlotArea) -> Vec<GraphPoint> {
    let values: Vec<f64> = recent.iter().filter_map(|r| r.total_5k().minutes()).collect();
    if values.is_empty() {
        return Vec::new();
    }

    let min_time = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max_time == min_time {
        1.0
    } else {
        max_time - min_time
    };

    let inner_w = area.width - 2.0 * area.margin;
    let inner_h = area.height - 2.0 * area.margin;
    let count = values.len();

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if count == 1 {
                area.width / 2.0
            } else {
                area.width - area.margin - i as f64 * inner_w / (count - 1) as f64
            };
            let y = area.height - area.margin - (v - min_time) / range * inner_h;

            GraphPoint {
                x,
                y,
                label: i + 1,
                total_5k: v,
            }
        })
        .collect()
}

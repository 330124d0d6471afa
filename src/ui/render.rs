//! Stateless text rendering of the screens and reports.

use crate::config::Config;
use crate::core::report::{self, RankedTime};
use crate::errors::AppResult;
use crate::models::SessionRecord;
use crate::models::record::FIELD_LABELS;
use crate::ui::graph;
use crate::ui::state::{AppState, FormState, MenuButton, Screen};
use crate::utils::colors::{RESET, color_for_rank, colorize_split};
use crate::utils::formatting::{bold, minutes_to_clock};
use crate::utils::table::{Column, Table};

pub fn render_menu() -> String {
    let mut out = format!("{}\n\n", bold(Screen::Menu.title()));
    for (i, button) in MenuButton::ALL.iter().enumerate() {
        out.push_str(&format!("  [{}] {}\n", i + 1, button.label()));
    }
    out.push_str("\n  [q] Quit\n");
    out
}

pub fn render_input(form: &FormState) -> String {
    let mut out = format!("{}\n\n", bold(Screen::Input.title()));
    let label_w = FIELD_LABELS.iter().map(|l| l.len()).max().unwrap_or(0);

    for (i, label) in FIELD_LABELS.iter().enumerate() {
        let marker = if form.active == Some(i) { '>' } else { ' ' };
        out.push_str(&format!(
            "{marker} :{} {label:<label_w$}  [{}]\n",
            i + 1,
            form.fields[i]
        ));
    }

    out.push_str("\n  :submit  Submit    :back  Back    :bs  Backspace\n");
    out
}

pub fn render_coming_soon(screen: Screen) -> String {
    format!("{}\n\nComing Soon!\n\n  :back  Back\n", bold(screen.title()))
}

/// Fastest totals as a ranked table.
pub fn render_top(ranked: &[RankedTime]) -> String {
    if ranked.is_empty() {
        return "No numeric 5K totals recorded yet.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::right("#"),
        Column::right("Total (min)"),
        Column::right("Time"),
    ]);
    for r in ranked {
        let color = color_for_rank(r.rank);
        table.add_row(vec![
            format!("{color}{}{RESET}", r.rank),
            crate::utils::formatting::format_minutes(r.total_5k),
            minutes_to_clock(r.total_5k),
        ]);
    }
    table.render()
}

/// Recent runs (newest first) as a table, optionally followed by the graph.
pub fn render_recent(recent: &[&SessionRecord], cfg: &Config, with_graph: bool) -> String {
    if recent.is_empty() {
        return "No runs recorded yet.\n".to_string();
    }

    let mut headers = vec![Column::right("#"), Column::left("Date")];
    headers.extend(FIELD_LABELS.iter().map(|l| Column::right(l)));
    let mut table = Table::new(headers);

    for (i, rec) in recent.iter().enumerate() {
        let mut row = vec![(i + 1).to_string(), rec.date.to_string()];
        row.extend(
            rec.times
                .as_array()
                .iter()
                .map(|v| colorize_split(&v.to_string())),
        );
        table.add_row(row);
    }

    let mut out = table.render();

    if with_graph {
        let area = cfg.plot_area();
        let points = report::graph_points(recent, area);
        if points.is_empty() {
            out.push_str("\nNo numeric 5K totals to graph.\n");
        } else {
            out.push_str("\n5K total (min), newest on the right:\n\n");
            out.push_str(&graph::draw(
                &points,
                area,
                cfg.graph_columns,
                cfg.graph_rows,
            ));
        }
    }

    out
}

/// Render the current screen. `records` is only read on report screens.
pub fn render_screen(
    state: &AppState,
    records: &AppResult<Vec<SessionRecord>>,
    cfg: &Config,
) -> String {
    let mut out = match state.screen {
        Screen::Menu => render_menu(),
        Screen::Input => render_input(&state.form),
        Screen::AverageScores | Screen::PredictedScores => render_coming_soon(state.screen),
        Screen::TopScores | Screen::RecentScores => {
            let mut body = format!("{}\n\n", bold(state.screen.title()));
            match records {
                Ok(all) if state.screen == Screen::TopScores => {
                    body.push_str(&render_top(&report::top_n(all, cfg.top_count)));
                }
                Ok(all) => {
                    let recent = report::recent_n(all, cfg.recent_count);
                    body.push_str(&render_recent(&recent, cfg, true));
                }
                Err(e) => body.push_str(&format!("{e}\n")),
            }
            body.push_str("\n  :back  Back\n");
            body
        }
    };

    if let Some(notice) = &state.notice {
        out.push_str(&format!("\n{notice}\n"));
    }
    out
}

//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI escape pattern is valid")
});

/// Remove ANSI color/erase sequences.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    ANSI_RE.replace_all(s, "")
}

/// Display width of `s`, ignoring ANSI color sequences.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn pad(s: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_width(s)));
    if right_align {
        format!("{fill}{s}")
    } else {
        format!("{s}{fill}")
    }
}

pub struct Column {
    pub header: String,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| pad(&col.header, *w, col.right_align))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (col, w))| {
                    pad(row.get(i).map(String::as_str).unwrap_or(""), *w, col.right_align)
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_sequences_have_no_width() {
        assert_eq!(visible_width("\x1b[90mN/A\x1b[0m"), 3);
        assert_eq!(visible_width("22.5"), 4);
    }

    #[test]
    fn coloured_cells_align_like_plain_ones() {
        let green = "\x1b[1;32m22.1\x1b[0m";
        assert_eq!(strip_ansi(green), "22.1");
        assert_eq!(strip_ansi("\x1b[2K4.4"), "4.4");

        let mut t = Table::new(vec![Column::right("#"), Column::left("Total")]);
        t.add_row(vec!["1".into(), green.into()]);
        t.add_row(vec!["2".into(), "23.05".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "-  -----");
        assert_eq!(lines[2], format!("1  {green}"));
        assert_eq!(lines[3], "2  23.05");
    }

    #[test]
    fn columns_fit_widest_cell() {
        let mut t = Table::new(vec![Column::right("#"), Column::left("Total")]);
        t.add_row(vec!["1".into(), "22.10".into()]);
        t.add_row(vec!["10".into(), "N/A".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " #  Total");
        assert_eq!(lines[1], "--  -----");
        assert_eq!(lines[2], " 1  22.10");
        assert_eq!(lines[3], "10  N/A");
    }
}

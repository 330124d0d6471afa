use crate::errors::AppResult;
use crate::store::log::read_entries;
use ansi_term::Colour;
use std::path::Path;

const MAX_OP_WIDTH: usize = 40;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

/// Column text `operation (target)`, cut to `MAX_OP_WIDTH` visible chars.
fn op_target_cell(operation: &str, target: &str) -> String {
    let full = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    if full.chars().count() > MAX_OP_WIDTH {
        let mut s: String = full.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        full
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_entries(path)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let cells: Vec<String> = entries
            .iter()
            .map(|e| op_target_cell(&e.operation, &e.target))
            .collect();

        let op_w = cells.iter().map(|c| c.chars().count()).max().unwrap_or(10);
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for (idx, (entry, cell)) in entries.iter().zip(cells).enumerate() {
            let color = color_for_operation(&entry.operation);

            // solo l'operazione è colorata
            let visible_len = cell.chars().count();
            let recolored = match cell.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(cell.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(visible_len));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                idx + 1,
                entry.date,
                recolored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

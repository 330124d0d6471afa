//! Interactive session: reads one line at a time, turns it into input
//! events for the screen state machine and redraws after each line.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::render::render_screen;
use crate::ui::state::{AppState, InputEvent, MenuButton, Outcome, Screen};
use crate::utils::date;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Menu = cmd {
        let store = RecordStore::new(cfg.data_path());
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_session(&mut stdin.lock(), &mut stdout.lock(), &store, cfg, date::today())?;
    }
    Ok(())
}

fn menu_button(word: &str) -> Option<MenuButton> {
    let button = match word {
        "1" | "top" => MenuButton::TopScores,
        "2" | "recent" => MenuButton::RecentScores,
        "3" | "average" => MenuButton::AverageScores,
        "4" | "predicted" => MenuButton::PredictedScores,
        "5" | "enter" => MenuButton::EnterTimes,
        _ => return None,
    };
    Some(button)
}

/// Translate one input line into events for the current screen.
pub fn translate(line: &str, state: &AppState) -> Vec<InputEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    let cmd = line.trim().to_lowercase();

    if cmd == ":q" || (state.screen == Screen::Menu && (cmd == "q" || cmd == "quit")) {
        return vec![InputEvent::Quit];
    }
    if cmd == ":back" {
        return vec![InputEvent::ClickBack];
    }

    match state.screen {
        Screen::Menu => menu_button(&cmd)
            .map(|b| vec![InputEvent::ClickMenu(b)])
            .unwrap_or_default(),
        Screen::Input => {
            if cmd == ":submit" {
                return vec![InputEvent::ClickSubmit];
            }
            if cmd == ":bs" {
                return vec![InputEvent::Backspace];
            }
            if let Some(n) = cmd.strip_prefix(':') {
                return match n.parse::<usize>() {
                    Ok(i) if i >= 1 => vec![InputEvent::ClickField(i - 1)],
                    _ => Vec::new(),
                };
            }

            let mut events = Vec::new();
            let target = match state.form.active {
                Some(idx) => idx,
                None => {
                    let first_empty = state.form.fields.iter().position(String::is_empty);
                    let idx = first_empty.unwrap_or(0);
                    events.push(InputEvent::ClickField(idx));
                    idx
                }
            };
            // a typed line replaces whatever the field held
            let held = state.form.fields[target].chars().count();
            events.extend(std::iter::repeat_n(InputEvent::Backspace, held));
            events.extend(line.trim().chars().map(InputEvent::Key));
            events.push(InputEvent::Enter);
            events
        }
        _ => Vec::new(),
    }
}

/// Drive the state machine from `input` until quit or end of input.
/// Accepted submissions are stored dated `today`.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &RecordStore,
    cfg: &Config,
    today: NaiveDate,
) -> AppResult<()> {
    let mut state = AppState::new();

    loop {
        let records = match state.screen {
            Screen::TopScores | Screen::RecentScores => store.load_all(),
            _ => Ok(Vec::new()),
        };
        write!(out, "\n{}\n> ", render_screen(&state, &records, cfg))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        for event in translate(&line, &state) {
            match state.handle(event) {
                Outcome::Quit => return Ok(()),
                Outcome::Submitted(times) => {
                    let record = AddLogic::persist(store, today, times)?;
                    state.notice = Some(format!(
                        "Saved run of {} (5K total {})",
                        record.date, record.times.total_5k
                    ));
                }
                Outcome::Rejected(_) | Outcome::Idle => {}
            }
        }
    }
}

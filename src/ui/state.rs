//! Screen state machine of the interactive session.
//!
//! All UI state lives in [`AppState`]: the current screen and the entry
//! form. It changes only through [`AppState::handle`], one input event at
//! a time; rendering reads it without mutating it.

use crate::core::validator;
use crate::errors::AppError;
use crate::models::record::{FIELD_COUNT, FIELD_LABELS};
use crate::models::SplitTimes;

/// Characters the entry form accepts (compared case-insensitively).
const ALLOWED_CHARS: &str = "abcdefghijklmnopqrstuvwxyz0123456789./";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Input,
    TopScores,
    RecentScores,
    AverageScores,
    PredictedScores,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "5K Running Stats Menu",
            Screen::Input => "Enter your times (type N/A if not available)",
            Screen::TopScores => "Top Scores",
            Screen::RecentScores => "Recent Scores",
            Screen::AverageScores => "Average Scores",
            Screen::PredictedScores => "Predicted Scores",
        }
    }
}

/// Buttons on the menu screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    TopScores,
    RecentScores,
    AverageScores,
    PredictedScores,
    EnterTimes,
}

impl MenuButton {
    pub const ALL: [MenuButton; 5] = [
        MenuButton::TopScores,
        MenuButton::RecentScores,
        MenuButton::AverageScores,
        MenuButton::PredictedScores,
        MenuButton::EnterTimes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::TopScores => "Top Scores",
            MenuButton::RecentScores => "Recent Scores",
            MenuButton::AverageScores => "Average Scores",
            MenuButton::PredictedScores => "Predicted Scores",
            MenuButton::EnterTimes => "Enter Times",
        }
    }

    pub fn target(&self) -> Screen {
        match self {
            MenuButton::TopScores => Screen::TopScores,
            MenuButton::RecentScores => Screen::RecentScores,
            MenuButton::AverageScores => Screen::AverageScores,
            MenuButton::PredictedScores => Screen::PredictedScores,
            MenuButton::EnterTimes => Screen::Input,
        }
    }
}

/// Discrete input events fed to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    ClickMenu(MenuButton),
    ClickBack,
    ClickSubmit,
    ClickField(usize),
    Key(char),
    Backspace,
    Enter,
    Quit,
}

/// What the caller has to do after an event.
#[derive(Debug)]
pub enum Outcome {
    Idle,
    /// All six fields were valid; the caller persists them.
    Submitted(SplitTimes),
    /// The submission was rejected; the form keeps its text.
    Rejected(AppError),
    Quit,
}

/// Text of the six entry fields plus the focused one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: [String; FIELD_COUNT],
    pub active: Option<usize>,
}

impl FormState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn focus(&mut self, idx: usize) {
        self.active = (idx < FIELD_COUNT).then_some(idx);
    }

    pub fn type_char(&mut self, c: char) {
        let Some(idx) = self.active else {
            return;
        };
        if ALLOWED_CHARS.contains(c.to_ascii_lowercase()) {
            self.fields[idx].push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(idx) = self.active {
            self.fields[idx].pop();
        }
    }

    /// Enter moves the focus to the next field; on the last one it drops it.
    pub fn enter(&mut self) {
        self.active = match self.active {
            Some(idx) if idx + 1 < FIELD_COUNT => Some(idx + 1),
            _ => None,
        };
    }

    pub fn raw(&self) -> [&str; FIELD_COUNT] {
        std::array::from_fn(|i| self.fields[i].as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub screen: Screen,
    pub form: FormState,
    /// One-line feedback shown under the current screen.
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            form: FormState::default(),
            notice: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        if event == InputEvent::Quit {
            return Outcome::Quit;
        }

        match self.screen {
            Screen::Menu => {
                if let InputEvent::ClickMenu(button) = event {
                    self.notice = None;
                    self.screen = button.target();
                    if self.screen == Screen::Input {
                        self.form.clear();
                    }
                }
                Outcome::Idle
            }
            Screen::Input => self.handle_input(event),
            _ => {
                if event == InputEvent::ClickBack {
                    self.go_menu();
                }
                Outcome::Idle
            }
        }
    }

    fn go_menu(&mut self) {
        self.screen = Screen::Menu;
        self.form.active = None;
        self.notice = None;
    }

    fn handle_input(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::ClickField(idx) => self.form.focus(idx),
            InputEvent::Key(c) => self.form.type_char(c),
            InputEvent::Backspace => self.form.backspace(),
            InputEvent::Enter => self.form.enter(),
            InputEvent::ClickBack => self.go_menu(),
            InputEvent::ClickSubmit => {
                self.form.active = None;
                return match validator::validate(&self.form.raw()) {
                    Ok(times) => {
                        self.form.clear();
                        self.notice = None;
                        Outcome::Submitted(times)
                    }
                    Err(e) => {
                        // the next keystrokes go to the field that needs fixing
                        if let Some(idx) = e.field_index() {
                            self.form.focus(idx);
                        }
                        let label = e
                            .field_index()
                            .map(|i| FIELD_LABELS[i])
                            .unwrap_or("a field");
                        self.notice = Some(format!(
                            "Please fill all fields with numbers or 'N/A' (check {label})"
                        ));
                        Outcome::Rejected(e)
                    }
                };
            }
            InputEvent::ClickMenu(_) | InputEvent::Quit => {}
        }
        Outcome::Idle
    }
}

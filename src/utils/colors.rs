/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Greys out the `N/A` marker, leaves real times as they are.
pub fn colorize_split(value: &str) -> String {
    if value.trim() == crate::models::split_value::NOT_AVAILABLE {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Podium colors for the first three ranks.
pub fn color_for_rank(rank: usize) -> &'static str {
    match rank {
        1 => YELLOW,
        2 => CYAN,
        3 => GREEN,
        _ => RESET,
    }
}

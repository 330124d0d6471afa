//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Decimal minutes as written to the data file: whole values keep one
/// decimal (`22.0`), others use the shortest exact form (`25.3`).
pub fn format_minutes(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Decimal minutes as a clock reading, e.g. `22.5` → `22:30`.
pub fn minutes_to_clock(v: f64) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    let total_secs = (v.abs() * 60.0).round() as u64;
    format!("{}{}:{:02}", sign, total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_keep_a_decimal() {
        assert_eq!(format_minutes(22.0), "22.0");
        assert_eq!(format_minutes(22.75), "22.75");
        assert_eq!(format_minutes(-3.0), "-3.0");
    }

    #[test]
    fn clock_readings() {
        assert_eq!(minutes_to_clock(22.5), "22:30");
        assert_eq!(minutes_to_clock(4.0), "4:00");
        assert_eq!(minutes_to_clock(4.99), "4:59");
        assert_eq!(minutes_to_clock(-1.5), "-1:30");
    }
}

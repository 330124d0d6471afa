use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_only() {
        assert_eq!(parse_date("2025-06-18"), NaiveDate::from_ymd_opt(2025, 6, 18));
        assert_eq!(parse_date("18/06/2025"), None);
        assert_eq!(parse_date("2025-02-30"), None);
    }
}

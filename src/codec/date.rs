use chrono::{Datelike, Local, NaiveDate};

/// Italian month abbreviations, uppercase, as used in archive filenames.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "GEN", "FEB", "MAR", "APR", "MAG", "GIU", "LUG", "AGO", "SET", "OTT", "NOV", "DIC",
];

/// Render a date as the archive token: two-digit day followed by the
/// three-letter month abbreviation, no separator (e.g. `23SET`).
pub fn date_token(date: NaiveDate) -> String {
    format!(
        "{:02}{}",
        date.day(),
        MONTH_ABBREVIATIONS[date.month0() as usize]
    )
}

/// The token for today's local date.
pub fn today_token() -> String {
    date_token(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_token_september() {
        let date = NaiveDate::from_ymd_opt(2021, 9, 23).unwrap();
        assert_eq!(date_token(date), "23SET");
    }

    #[test]
    fn test_date_token_pads_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_token(date), "01GEN");
    }

    #[test]
    fn test_date_token_year_boundaries() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(date_token(first), "31GEN");
        assert_eq!(date_token(last), "31DIC");
    }

    #[test]
    fn test_today_token_shape() {
        let token = today_token();
        assert_eq!(token.len(), 5);
        assert!(token[..2].chars().all(|c| c.is_ascii_digit()));
        assert!(token[2..].chars().all(|c| c.is_ascii_uppercase()));
    }
}

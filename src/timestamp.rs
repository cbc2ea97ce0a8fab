//! Wall-clock timestamps stamped into authorizer and mock responses.

use chrono::{Local, NaiveDateTime};

/// `YYYY/MM/DD HH:MM:SS.ffffff`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// The current local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The current local time, already formatted.
pub fn now_formatted() -> String {
    format_timestamp(&now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use regex::Regex;

    #[test]
    fn test_format_has_microsecond_precision() {
        let at = NaiveDate::from_ymd_opt(2021, 3, 9)
            .unwrap()
            .and_hms_micro_opt(7, 5, 1, 42)
            .unwrap();
        assert_eq!(format_timestamp(&at), "2021/03/09 07:05:01.000042");
    }

    #[test]
    fn test_now_formatted_shape() {
        let re = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{6}$").unwrap();
        assert!(re.is_match(&now_formatted()));
    }
}

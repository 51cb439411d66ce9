// Timestamp granularity of a dashboard variant
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseResult};
use serde::Deserialize;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// `YYYY-MM-DD`, filtered as soon as both dates are picked
    #[default]
    Date,
    /// `YYYY-MM-DD HH:MM:SS`, filtered when the apply action is pressed
    DateTime,
}

impl Granularity {
    pub fn format(&self) -> &'static str {
        match self {
            Granularity::Date => DATE_FORMAT,
            Granularity::DateTime => DATETIME_FORMAT,
        }
    }

    /// Parse a timestamp label into a calendar time. Dates map to midnight.
    pub fn parse(&self, text: &str) -> ParseResult<NaiveDateTime> {
        let text = text.trim();
        match self {
            Granularity::Date => {
                NaiveDate::parse_from_str(text, DATE_FORMAT).map(|d| d.and_time(NaiveTime::MIN))
            }
            Granularity::DateTime => NaiveDateTime::parse_from_str(text, DATETIME_FORMAT),
        }
    }

    pub fn requires_apply(&self) -> bool {
        matches!(self, Granularity::DateTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_date_parses_to_midnight() {
        let parsed = Granularity::Date.parse("2023-01-02").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_datetime_parse() {
        let parsed = Granularity::DateTime.parse("2023-01-01 12:30:00").unwrap();
        assert_eq!(parsed.hour(), 12);
        assert_eq!(parsed.minute(), 30);

        assert!(Granularity::DateTime.parse("2023-01-01").is_err());
        assert!(Granularity::Date.parse("01/02/2023").is_err());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let g: Granularity = serde_json::from_str("\"datetime\"").unwrap();
        assert_eq!(g, Granularity::DateTime);
        assert!(g.requires_apply());
    }
}

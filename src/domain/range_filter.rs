// Inclusive time range filtering over a chart's series
use super::granularity::Granularity;
use super::time_series::TimeSeries;
use chrono::NaiveTime;
use serde::Deserialize;

/// Raw textual bounds, in the same format as the series timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Range inputs as submitted by the page or the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RangeInput {
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
}

impl RangeInput {
    /// Assemble the bound pair. Returns `None` unless both bounds are complete.
    pub fn to_range(&self, granularity: Granularity) -> Option<TimeRange> {
        let start = assemble_bound(
            granularity,
            self.start_date.as_deref(),
            self.start_time.as_deref(),
        )?;
        let end = assemble_bound(granularity, self.end_date.as_deref(), self.end_time.as_deref())?;
        Some(TimeRange::new(start, end))
    }
}

fn assemble_bound(granularity: Granularity, date: Option<&str>, time: Option<&str>) -> Option<String> {
    let date = non_empty(date)?;
    match granularity {
        Granularity::Date => Some(date.to_string()),
        Granularity::DateTime => {
            let time = non_empty(time)?;
            Some(format!("{} {}", date, normalize_time(time)))
        }
    }
}

/// Canonical `HH:MM:SS` for `H:MM`, `HH:MM` or `HH:MM:SS` input. Anything else
/// is passed through so the filter reports it as a bad bound.
fn normalize_time(time: &str) -> String {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| time.to_string())
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Keep the pairs whose timestamp lies within `[start, end]`, preserving order.
///
/// No range, or a bound that does not parse, returns the series unchanged.
/// Individual timestamps that do not parse are skipped.
pub fn filter_series(
    series: &TimeSeries,
    range: Option<&TimeRange>,
    granularity: Granularity,
) -> TimeSeries {
    let Some(range) = range else {
        return series.clone();
    };

    let bounds = granularity
        .parse(&range.start)
        .and_then(|start| granularity.parse(&range.end).map(|end| (start, end)));
    let (start, end) = match bounds {
        Ok(bounds) => bounds,
        Err(e) => {
            tracing::warn!(
                start = %range.start,
                end = %range.end,
                expected = granularity.format(),
                "Invalid range bound, showing unfiltered series: {}",
                e
            );
            return series.clone();
        }
    };

    let mut filtered = TimeSeries::empty();
    for (timestamp, value) in series.points() {
        match granularity.parse(timestamp) {
            Ok(t) if start <= t && t <= end => filtered.push(timestamp, value),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(timestamp, "Skipping point with malformed timestamp: {}", e);
            }
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(timestamps: &[&str], values: &[f64]) -> TimeSeries {
        TimeSeries::new(
            timestamps.iter().map(|t| t.to_string()).collect(),
            values.to_vec(),
        )
        .unwrap()
    }

    fn daily() -> TimeSeries {
        series(&["2023-01-01", "2023-01-02", "2023-01-03"], &[10.0, 20.0, 30.0])
    }

    fn hourly() -> TimeSeries {
        series(
            &[
                "2023-01-01 08:00:00",
                "2023-01-01 12:00:00",
                "2023-01-01 16:00:00",
            ],
            &[5.0, 15.0, 25.0],
        )
    }

    #[test]
    fn test_no_range_returns_series_unchanged() {
        assert_eq!(filter_series(&daily(), None, Granularity::Date), daily());
        assert_eq!(filter_series(&hourly(), None, Granularity::DateTime), hourly());
    }

    #[test]
    fn test_single_day_range() {
        let range = TimeRange::new("2023-01-02", "2023-01-02");
        let filtered = filter_series(&daily(), Some(&range), Granularity::Date);

        assert_eq!(filtered.timestamps(), ["2023-01-02"]);
        assert_eq!(filtered.values(), [20.0]);
    }

    #[test]
    fn test_bounds_are_inclusive_and_order_preserved() {
        let range = TimeRange::new("2023-01-01 12:00:00", "2023-01-01 16:00:00");
        let filtered = filter_series(&hourly(), Some(&range), Granularity::DateTime);

        assert_eq!(
            filtered.timestamps(),
            ["2023-01-01 12:00:00", "2023-01-01 16:00:00"]
        );
        assert_eq!(filtered.values(), [15.0, 25.0]);
    }

    #[test]
    fn test_every_result_lies_within_range() {
        let source = hourly();
        let ranges = [
            ("2023-01-01 00:00:00", "2023-01-01 09:00:00"),
            ("2023-01-01 08:00:00", "2023-01-01 08:00:00"),
            ("2023-01-01 10:00:00", "2023-01-02 00:00:00"),
        ];

        for (start, end) in ranges {
            let range = TimeRange::new(start, end);
            let filtered = filter_series(&source, Some(&range), Granularity::DateTime);
            let lo = Granularity::DateTime.parse(start).unwrap();
            let hi = Granularity::DateTime.parse(end).unwrap();

            let mut last_index = None;
            for (timestamp, value) in filtered.points() {
                let t = Granularity::DateTime.parse(timestamp).unwrap();
                assert!(lo <= t && t <= hi, "{} outside {}..{}", timestamp, start, end);

                let index = source
                    .points()
                    .position(|p| p == (timestamp, value))
                    .unwrap();
                assert!(last_index.is_none_or(|last| index > last));
                last_index = Some(index);
            }
        }
    }

    #[test]
    fn test_start_after_end_is_empty() {
        let range = TimeRange::new("2023-01-03", "2023-01-01");
        assert!(filter_series(&daily(), Some(&range), Granularity::Date).is_empty());
    }

    #[test]
    fn test_malformed_bound_falls_back_to_unfiltered() {
        let range = TimeRange::new("yesterday", "2023-01-02 00:00:00");
        assert_eq!(
            filter_series(&hourly(), Some(&range), Granularity::DateTime),
            hourly()
        );
    }

    #[test]
    fn test_malformed_date_bound_falls_back_to_unfiltered() {
        let range = TimeRange::new("garbage", "2023-01-02");
        assert_eq!(filter_series(&daily(), Some(&range), Granularity::Date), daily());
    }

    #[test]
    fn test_date_range_against_datetime_format_falls_back() {
        let range = TimeRange::new("2023-01-01", "2023-01-01");
        assert_eq!(
            filter_series(&hourly(), Some(&range), Granularity::DateTime),
            hourly()
        );
    }

    #[test]
    fn test_malformed_point_is_skipped() {
        let source = series(&["2023-01-01", "not a date", "2023-01-03"], &[1.0, 2.0, 3.0]);
        let range = TimeRange::new("2023-01-01", "2023-01-31");
        let filtered = filter_series(&source, Some(&range), Granularity::Date);

        assert_eq!(filtered.timestamps(), ["2023-01-01", "2023-01-03"]);
        assert_eq!(filtered.values(), [1.0, 3.0]);
    }

    #[test]
    fn test_range_input_date_requires_both_dates() {
        let input = RangeInput {
            start_date: Some("2023-01-01".to_string()),
            end_date: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(input.to_range(Granularity::Date), None);

        let input = RangeInput {
            start_date: Some("2023-01-01".to_string()),
            end_date: Some("2023-01-02".to_string()),
            ..Default::default()
        };
        assert_eq!(
            input.to_range(Granularity::Date),
            Some(TimeRange::new("2023-01-01", "2023-01-02"))
        );
    }

    #[test]
    fn test_range_input_datetime_appends_seconds() {
        let input = RangeInput {
            start_date: Some("2023-01-01".to_string()),
            start_time: Some("09:30".to_string()),
            end_date: Some("2023-01-01".to_string()),
            end_time: Some("17:00:00".to_string()),
        };
        assert_eq!(
            input.to_range(Granularity::DateTime),
            Some(TimeRange::new("2023-01-01 09:30:00", "2023-01-01 17:00:00"))
        );

        let missing_time = RangeInput {
            start_time: None,
            ..input
        };
        assert_eq!(missing_time.to_range(Granularity::DateTime), None);
    }

    #[test]
    fn test_range_input_single_digit_hour() {
        let input = RangeInput {
            start_date: Some("2023-01-01".to_string()),
            start_time: Some("9:30".to_string()),
            end_date: Some("2023-01-01".to_string()),
            end_time: Some("16:00".to_string()),
        };
        let range = input.to_range(Granularity::DateTime).unwrap();
        assert_eq!(range, TimeRange::new("2023-01-01 09:30:00", "2023-01-01 16:00:00"));

        let filtered = filter_series(&hourly(), Some(&range), Granularity::DateTime);
        assert_eq!(
            filtered.timestamps(),
            ["2023-01-01 12:00:00", "2023-01-01 16:00:00"]
        );
    }

    #[test]
    fn test_range_input_unparseable_time_is_kept_as_typed() {
        let input = RangeInput {
            start_date: Some("2023-01-01".to_string()),
            start_time: Some("noon".to_string()),
            end_date: Some("2023-01-01".to_string()),
            end_time: Some("16:00".to_string()),
        };
        let range = input.to_range(Granularity::DateTime).unwrap();
        assert_eq!(range.start, "2023-01-01 noon");
        assert_eq!(
            filter_series(&hourly(), Some(&range), Granularity::DateTime),
            hourly()
        );
    }
}

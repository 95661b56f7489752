use chrono::{Local, LocalResult, NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::error::Error;

/// Wall-clock layout accepted on the command line.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const LAYOUT: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

/// Query window sent to the rank API, in Unix epoch seconds. `start_time`
/// may exceed `end_time`; the API decides what that means.
///
/// Serializes to the request body `{"start_time": .., "end_time": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start_time: i64,
    pub end_time: i64,
}

/// Parses `YYYY-MM-DD HH:MM:SS` in the process's local timezone.
pub fn parse_date_time(input: &str) -> Result<i64, Error> {
    parse_date_time_in(input, &Local)
}

/// Parses `YYYY-MM-DD HH:MM:SS` as wall-clock time in `tz`.
///
/// A time falling in a DST fold resolves to the earlier instant; one
/// falling in a DST gap does not exist and is rejected.
pub fn parse_date_time_in<Tz: TimeZone>(
    input: &str,
    tz: &Tz,
) -> Result<i64, Error> {
    if !matches_layout(input) {
        return Err(Error::DecodeDateTimeError(format!(
            "{:?} does not match YYYY-MM-DD HH:MM:SS",
            input
        )));
    }

    let naive = NaiveDateTime::parse_from_str(input, DATE_TIME_FORMAT)
        .map_err(|e| {
            Error::DecodeDateTimeError(format!("{:?}: {}", input, e))
        })?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.timestamp()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp()),
        LocalResult::None => Err(Error::DecodeDateTimeError(format!(
            "{:?} does not exist in the timezone",
            input
        ))),
    }
}

/// Formats epoch seconds back into the command-line layout.
pub fn format_timestamp_in<Tz: TimeZone>(
    timestamp: i64,
    tz: &Tz,
) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
}

// chrono accepts single-digit and padded fields; the layout is fixed width.
fn matches_layout(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == LAYOUT.len()
        && bytes.iter().zip(LAYOUT.iter()).all(|(b, l)| match l {
            b'd' => b.is_ascii_digit(),
            other => b == other,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_parse_utc() {
        let ts = parse_date_time_in("2024-06-01 00:00:00", &Utc).unwrap();
        assert_eq!(ts, 1_717_200_000);
    }

    #[test]
    fn test_parse_uses_timezone_offset() {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let ts = parse_date_time_in("2024-06-01 08:00:00", &tz).unwrap();
        assert_eq!(ts, 1_717_200_000);
    }

    #[test]
    fn test_round_trip_fixed_offsets() {
        let inputs = [
            "1970-01-01 00:00:00",
            "2023-12-31 23:59:59",
            "2024-02-29 12:30:45",
        ];

        for hours in [-5, 0, 8] {
            let tz = FixedOffset::east_opt(hours * 3600).unwrap();
            for input in inputs {
                let ts = parse_date_time_in(input, &tz).unwrap();
                assert_eq!(
                    format_timestamp_in(ts, &tz).as_deref(),
                    Some(input),
                    "offset {}h",
                    hours
                );
            }
        }
    }

    #[test]
    fn test_round_trip_local() {
        let input = "2024-06-15 12:00:00";
        let ts = parse_date_time(input).unwrap();
        assert_eq!(format_timestamp_in(ts, &Local).as_deref(), Some(input));
    }

    #[test]
    fn test_rejects_other_layouts() {
        for input in [
            "",
            "2024-06-01",
            "2024-06-01T00:00:00",
            "2024-6-1 00:00:00",
            "2024/06/01 00:00:00",
            " 2024-06-01 00:00:00",
            "2024-06-01 00:00:00Z",
        ] {
            let result = parse_date_time_in(input, &Utc);
            assert!(
                matches!(result, Err(Error::DecodeDateTimeError(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        assert!(parse_date_time_in("2023-02-29 00:00:00", &Utc).is_err());
        assert!(parse_date_time_in("2024-13-01 00:00:00", &Utc).is_err());
        assert!(parse_date_time_in("2024-01-01 24:00:00", &Utc).is_err());
    }

    #[test]
    fn test_window_serializes_as_request_body() {
        let window = TimeWindow {
            start_time: 1,
            end_time: -2,
        };
        assert_eq!(
            serde_json::to_value(window).unwrap(),
            serde_json::json!({"start_time": 1, "end_time": -2})
        );
    }
}

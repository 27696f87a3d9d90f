//! Display timestamps for the selection ledger.
//!
//! The ledger stores a human-readable timestamp rendered in one fixed
//! reporting offset, independent of the server's locale.

use chrono::{FixedOffset, Offset, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// `M/D/YYYY, h:mm:ss AM`, e.g. `3/7/2026, 9:05:01 PM`.
pub const REPORT_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Parse a UTC offset such as `+08:00`, `-0530`, `UTC`, or `Z`.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, CoreError> {
    let s = raw.trim();
    if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }

    s.parse::<FixedOffset>().map_err(|err| {
        CoreError::Validation(format!(
            "Invalid UTC offset '{raw}' ({err}). Expected a value like +08:00, -05:30, or UTC"
        ))
    })
}

/// Render `at` in the reporting offset using [`REPORT_FORMAT`].
pub fn render_report_timestamp(at: Timestamp, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format(REPORT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn parses_common_forms() {
        assert_eq!(parse_utc_offset("+08:00").unwrap().local_minus_utc(), 28_800);
        assert_eq!(parse_utc_offset("+0800").unwrap().local_minus_utc(), 28_800);
        assert_eq!(parse_utc_offset("-05:30").unwrap().local_minus_utc(), -19_800);
        assert_eq!(parse_utc_offset("UTC").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_utc_offset(" z ").unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["Asia/Taipei", "08:00", "+08:75", "", "+1\u{e9}2", "+\u{e9}\u{e9}"] {
            assert_matches!(parse_utc_offset(raw), Err(CoreError::Validation(_)), "{raw}");
        }
    }

    #[test]
    fn renders_in_reporting_offset() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 13, 5, 1).unwrap();
        let taipei = parse_utc_offset("+08:00").unwrap();
        assert_eq!(render_report_timestamp(at, taipei), "3/7/2026, 9:05:01 PM");
    }

    #[test]
    fn renders_date_rollover() {
        let at = Utc.with_ymd_and_hms(2026, 12, 31, 20, 0, 0).unwrap();
        let taipei = parse_utc_offset("+08:00").unwrap();
        assert_eq!(render_report_timestamp(at, taipei), "1/1/2027, 4:00:00 AM");
    }
}

//! Target-number encoding from the wall clock
//!
//! The trick's hidden payload: month (no pad) ++ day ++ hour ++ minute,
//! read as one decimal integer. 2026-02-16T14:18 → 2161418. The smallest
//! possible encoding (January, "010000") is 1010000, far above any sum the
//! trick supports, so the magic subtraction stays positive in practice.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

use crate::MINUTE_ROLLOVER_SECS;

/// Encode a date-time as the target integer
pub fn encode(now: NaiveDateTime) -> i64 {
    let month = now.month() as i64;
    let day = now.day() as i64;
    let hour = now.hour() as i64;
    let minute = now.minute() as i64;
    month * 1_000_000 + day * 10_000 + hour * 100 + minute
}

/// Encode with the next-minute policy: past MINUTE_ROLLOVER_SECS the target
/// advances one minute, so it cannot change under the magician's hands.
/// Rollover across hour, day, and month boundaries follows the calendar.
pub fn encode_with_rounding(now: NaiveDateTime) -> i64 {
    if now.second() > MINUTE_ROLLOVER_SECS {
        encode(now + Duration::minutes(1))
    } else {
        encode(now)
    }
}

/// Cosmetic ":SS" suffix for the shell's seconds ticker. Touches no session
/// state.
pub fn seconds_suffix(now: NaiveDateTime) -> String {
    format!(":{:02}", now.second())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_encode_reference_value() {
        // 2月16日 14:18 → 2161418
        assert_eq!(encode(dt(2026, 2, 16, 14, 18, 0)), 2161418);
    }

    #[test]
    fn test_encode_zero_pads_day_hour_minute() {
        assert_eq!(encode(dt(2026, 3, 5, 7, 9, 0)), 3050709);
    }

    #[test]
    fn test_encode_month_is_not_padded() {
        // December produces an 8-digit target
        assert_eq!(encode(dt(2026, 12, 31, 23, 59, 0)), 12312359);
    }

    #[test]
    fn test_encode_minimum_value() {
        assert_eq!(encode(dt(2026, 1, 1, 0, 0, 0)), 1010000);
    }

    #[test]
    fn test_rounding_not_applied_at_or_below_threshold() {
        assert_eq!(encode_with_rounding(dt(2026, 2, 16, 14, 18, 30)), 2161418);
        assert_eq!(encode_with_rounding(dt(2026, 2, 16, 14, 18, 0)), 2161418);
    }

    #[test]
    fn test_rounding_advances_past_threshold() {
        assert_eq!(encode_with_rounding(dt(2026, 2, 16, 14, 18, 31)), 2161419);
    }

    #[test]
    fn test_rounding_rolls_over_day_boundary() {
        assert_eq!(encode_with_rounding(dt(2026, 2, 16, 23, 59, 45)), 2170000);
    }

    #[test]
    fn test_rounding_rolls_over_year_boundary() {
        assert_eq!(encode_with_rounding(dt(2026, 12, 31, 23, 59, 45)), 1010000);
    }

    #[test]
    fn test_seconds_suffix() {
        assert_eq!(seconds_suffix(dt(2026, 2, 16, 14, 18, 7)), ":07");
        assert_eq!(seconds_suffix(dt(2026, 2, 16, 14, 18, 42)), ":42");
    }
}

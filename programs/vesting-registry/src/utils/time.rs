//! Day/second conversions and linear release arithmetic.
//! - durations are configured in whole days and stored in seconds
//! - every share is floor(total * span / duration), computed in u128

use crate::constants::SECONDS_PER_DAY;
use crate::error::VestingError;

/// Convert a whole-day count into seconds.
pub fn days_to_seconds(days: u32) -> Result<i64, VestingError> {
    (days as i64)
        .checked_mul(SECONDS_PER_DAY)
        .ok_or(VestingError::MathOverflow)
}

/// Seconds elapsed from `from` to `to`, clamped to [0, cap].
pub fn clamped_span(from: i64, to: i64, cap: i64) -> i64 {
    to.saturating_sub(from).clamp(0, cap.max(0))
}

/// floor(total * span / duration). `span` must already be clamped to `duration`.
pub fn linear_share(total: u64, span: i64, duration: i64) -> Result<u64, VestingError> {
    if duration <= 0 {
        return Err(VestingError::InvalidParameters);
    }
    if span <= 0 {
        return Ok(0);
    }
    let v = (total as u128)
        .checked_mul(span as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = SECONDS_PER_DAY;

    #[test]
    fn days_convert_to_seconds() {
        assert_eq!(days_to_seconds(0).unwrap(), 0);
        assert_eq!(days_to_seconds(365).unwrap(), 365 * DAY);
        assert_eq!(days_to_seconds(u32::MAX).unwrap(), u32::MAX as i64 * DAY);
    }

    #[test]
    fn span_is_clamped_both_ways() {
        assert_eq!(clamped_span(100, 50, 1_000), 0);
        assert_eq!(clamped_span(100, 600, 1_000), 500);
        assert_eq!(clamped_span(100, 5_000, 1_000), 1_000);
    }

    #[test]
    fn share_floors() {
        // 1000 * 100 / 365 = 273.97...
        assert_eq!(linear_share(1_000, 100 * DAY, 365 * DAY).unwrap(), 273);
        assert_eq!(linear_share(1_000, 365 * DAY, 365 * DAY).unwrap(), 1_000);
        assert_eq!(linear_share(1_000, 0, 365 * DAY).unwrap(), 0);
    }

    #[test]
    fn share_does_not_overflow_on_large_totals() {
        let total = u64::MAX;
        let d = 365 * DAY;
        assert_eq!(linear_share(total, d, d).unwrap(), total);
        assert_eq!(linear_share(total, d / 2, d).unwrap(), total / 2);
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert!(matches!(
            linear_share(1, 1, 0),
            Err(VestingError::InvalidParameters)
        ));
    }
}

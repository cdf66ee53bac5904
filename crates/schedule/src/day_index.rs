//! Whole-day offset from a fixed anchor date.

use chrono::NaiveDate;

/// Number of whole calendar days from `anchor` to `date`.
///
/// Negative when `date` precedes `anchor`, zero when the dates are equal.
/// `NaiveDate` carries no time of day, so the result depends only on the
/// calendar dates themselves and no midnight normalization step is
/// needed.
pub fn day_index(anchor: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(anchor).num_days()
}

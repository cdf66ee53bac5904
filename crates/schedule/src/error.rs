//! Error types for the oracle-schedule crate.

/// Error type for all fallible operations in the oracle-schedule crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when a day index falls outside the rotation list.
    #[error("day index {index} is out of range for a rotation of {len} entries")]
    IndexOutOfRange {
        /// The computed day index.
        index: i64,
        /// Length of the rotation list.
        len: usize,
    },
}

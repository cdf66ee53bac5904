//! Bounds-checked lookup into the rotation list.

use crate::error::ScheduleError;

/// Returns the rotation entry scheduled at `index`.
///
/// # Errors
///
/// Returns [`ScheduleError::IndexOutOfRange`] when `index` falls outside
/// `0..list.len()`, carrying both the index and the list length so the
/// condition can be diagnosed without re-running.
pub fn daily_entry(list: &[String], index: i64) -> Result<&str, ScheduleError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| list.get(i))
        .map(String::as_str)
        .ok_or(ScheduleError::IndexOutOfRange {
            index,
            len: list.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("color-{i}")).collect()
    }

    #[test]
    fn first_entry() {
        assert_eq!(daily_entry(&rotation(5), 0).unwrap(), "color-0");
    }

    #[test]
    fn last_entry() {
        assert_eq!(daily_entry(&rotation(5), 4).unwrap(), "color-4");
    }

    #[test]
    fn index_past_end_is_reported() {
        assert_eq!(
            daily_entry(&rotation(5), 7).unwrap_err(),
            ScheduleError::IndexOutOfRange { index: 7, len: 5 }
        );
    }

    #[test]
    fn negative_index_is_reported() {
        assert_eq!(
            daily_entry(&rotation(5), -1).unwrap_err(),
            ScheduleError::IndexOutOfRange { index: -1, len: 5 }
        );
    }

    #[test]
    fn empty_rotation() {
        assert_eq!(
            daily_entry(&[], 0).unwrap_err(),
            ScheduleError::IndexOutOfRange { index: 0, len: 0 }
        );
    }
}

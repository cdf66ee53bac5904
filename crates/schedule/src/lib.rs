//! # oracle-schedule
//!
//! Pure day-index arithmetic for the Colordle daily rotation.
//!
//! The game assigns one color per calendar day by indexing an ordered,
//! server-published list with the number of whole days elapsed since a
//! fixed anchor date. This crate resolves that index and performs the
//! bounds-checked lookup; fetching the list and choosing the date are
//! the caller's concern.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use oracle_schedule::{daily_entry, day_index};
//!
//! let anchor = NaiveDate::from_ymd_opt(2023, 8, 7).unwrap();
//! let today = NaiveDate::from_ymd_opt(2023, 8, 9).unwrap();
//! let index = day_index(anchor, today); // 2
//!
//! let colors = vec!["red".to_string(), "lime".to_string(), "teal".to_string()];
//! assert_eq!(daily_entry(&colors, index).unwrap(), "teal");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day_index` | Whole-day offset from the anchor date |
//! | `lookup` | Bounds-checked rotation lookup |
//! | `error` | Error types |

mod day_index;
mod error;
mod lookup;

pub use day_index::day_index;
pub use error::ScheduleError;
pub use lookup::daily_entry;

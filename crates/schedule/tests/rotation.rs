use chrono::NaiveDate;
use oracle_schedule::{ScheduleError, daily_entry, day_index};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The anchor Colordle counts from.
fn game_anchor() -> NaiveDate {
    ymd(2023, 8, 7)
}

#[test]
fn anchor_day_gets_first_color() {
    let colors = vec!["crimson".to_string(), "olive".to_string()];
    let index = day_index(game_anchor(), game_anchor());
    assert_eq!(daily_entry(&colors, index).unwrap(), "crimson");
}

#[test]
fn each_day_advances_one_entry() {
    let colors: Vec<String> = (0..10).map(|i| format!("color-{i}")).collect();
    let mut date = game_anchor();
    for expected in &colors {
        let index = day_index(game_anchor(), date);
        assert_eq!(daily_entry(&colors, index).unwrap(), expected);
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn date_before_anchor_is_out_of_range() {
    let colors = vec!["crimson".to_string()];
    let index = day_index(game_anchor(), ymd(2023, 8, 1));
    assert_eq!(
        daily_entry(&colors, index).unwrap_err(),
        ScheduleError::IndexOutOfRange { index: -6, len: 1 }
    );
}

#[test]
fn rotation_exhausted_is_out_of_range() {
    let colors: Vec<String> = (0..5).map(|i| format!("color-{i}")).collect();
    let index = day_index(game_anchor(), ymd(2023, 8, 14));
    assert_eq!(
        daily_entry(&colors, index).unwrap_err(),
        ScheduleError::IndexOutOfRange { index: 7, len: 5 }
    );
}

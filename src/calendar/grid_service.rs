use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

pub const GRID_COLS: usize = 7;

/// One cell of the month grid. Transient: rebuilt on every computation,
/// never persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub current_month: bool,
}

/// The month grid of `selected`: complete Sunday-first weeks covering the
/// whole calendar month, padded with adjacent-month days. Length is always
/// a multiple of 7; 28, 35 and 42 cells all occur.
pub fn calendar_cells(selected: NaiveDate) -> Vec<DayCell> {
    let (first, last) = grid_range(selected);

    first
        .iter_days()
        .take_while(|date| date <= &last)
        .map(|date| DayCell {
            date,
            day: date.day(),
            current_month: date.month() == selected.month(),
        })
        .collect()
}

/// First and last date of the month grid, the visible range scanned by the
/// month positioner.
pub fn grid_range(selected: NaiveDate) -> (NaiveDate, NaiveDate) {
    (first_grid_date(selected), last_grid_date(selected))
}

pub fn first_grid_date(date: NaiveDate) -> NaiveDate {
    let mut first = date.with_day(1).unwrap_or(date);

    while first.weekday() != Weekday::Sun {
        first = first.pred_opt().unwrap_or(first);
    }

    first
}

pub fn last_grid_date(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    let mut last = (first + chrono::Months::new(1)).pred_opt().unwrap_or(first);

    while last.weekday() != Weekday::Sat {
        last = last.succ_opt().unwrap_or(last);
    }

    last
}

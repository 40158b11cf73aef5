use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::event::Event;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Day,
    Week,
    #[default]
    Month,
    Year,
    Agenda,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Previous,
    Next,
}

/// Moves the selected date by exactly one unit of the view's granularity.
/// Month and year steps use calendar arithmetic, so month-end dates clamp
/// (Jan 31 -> Feb 28/29). The agenda view pages by month.
pub fn navigate_date(date: NaiveDate, view: View, direction: Direction) -> NaiveDate {
    let months = match view {
        View::Day => {
            return match direction {
                Direction::Previous => date - Days::new(1),
                Direction::Next => date + Days::new(1),
            };
        }
        View::Week => {
            return match direction {
                Direction::Previous => date - Days::new(7),
                Direction::Next => date + Days::new(7),
            };
        }
        View::Month | View::Agenda => Months::new(1),
        View::Year => Months::new(12),
    };

    match direction {
        Direction::Previous => date.checked_sub_months(months).unwrap_or(date),
        Direction::Next => date.checked_add_months(months).unwrap_or(date),
    }
}

/// Human-readable label for the view's range containing `date`.
pub fn range_text(view: View, date: NaiveDate) -> String {
    match view {
        View::Day => date.format("%B %-d, %Y").to_string(),
        View::Week => {
            let start = week_start(date);
            let end = start + Days::new(6);

            format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
        }
        View::Month | View::Agenda => date.format("%B %Y").to_string(),
        View::Year => date.format("%Y").to_string(),
    }
}

/// Events whose date interval intersects the view's calendar unit
/// containing `date`.
pub fn events_count(events: &[Event], date: NaiveDate, view: View) -> usize {
    let (start, end) = view_range(view, date);

    events
        .iter()
        .filter(|event| event.is_between_dates(start, end))
        .count()
}

pub fn view_range(view: View, date: NaiveDate) -> (NaiveDate, NaiveDate) {
    match view {
        View::Day => (date, date),
        View::Week => {
            let start = week_start(date);

            (start, start + Days::new(6))
        }
        View::Month | View::Agenda => {
            let start = first_of_month(date);
            let end = (start + Months::new(1)) - Days::new(1);

            (start, end)
        }
        View::Year => {
            let start = first_of_month(date.with_month(1).unwrap_or(date));

            (start, (start + Months::new(12)) - Days::new(1))
        }
    }
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

/// The Sunday-start week containing `date`, the column dates of the week view.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    week_start(date)
        .iter_days()
        .take(7)
        .collect::<Vec<_>>()
        .try_into()
        .expect("Week is always 7 days")
}

/// First-of-month dates of `date`'s year, the tiles of the year view.
pub fn year_months(date: NaiveDate) -> [NaiveDate; 12] {
    std::array::from_fn(|idx| {
        NaiveDate::from_ymd_opt(date.year(), idx as u32 + 1, 1)
            .expect("Month index is always in range")
    })
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

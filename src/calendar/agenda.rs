use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::event::Event;

/// One day of the agenda view: the events of a single date within the
/// selected month.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgendaDay {
    pub date: NaiveDate,
    pub events: Vec<Event>,
    pub multi_day_events: Vec<Event>,
}

/// Groups the month's events by day, ascending. Single-day events land on
/// their start date; a multi-day event is listed on every day it spans
/// inside the selected month.
pub fn agenda_days(
    single_day_events: &[Event],
    multi_day_events: &[Event],
    selected: NaiveDate,
) -> Vec<AgendaDay> {
    let mut days: BTreeMap<NaiveDate, AgendaDay> = BTreeMap::new();

    for event in single_day_events {
        let date = event.start_date();
        if !same_month(date, selected) {
            continue;
        }

        days.entry(date)
            .or_insert_with(|| AgendaDay {
                date,
                ..AgendaDay::default()
            })
            .events
            .push(event.clone());
    }

    for event in multi_day_events {
        let span = event
            .start_date()
            .iter_days()
            .take_while(|date| date <= &event.end_date());

        for date in span.filter(|date| same_month(*date, selected)) {
            days.entry(date)
                .or_insert_with(|| AgendaDay {
                    date,
                    ..AgendaDay::default()
                })
                .multi_day_events
                .push(event.clone());
        }
    }

    days.into_values().collect()
}

fn same_month(date: NaiveDate, other: NaiveDate) -> bool {
    date.year() == other.year() && date.month() == other.month()
}

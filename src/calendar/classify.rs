use std::cmp::Reverse;

use chrono::{Local, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use super::event::Event;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifiedEvents {
    pub single_day: Vec<Event>,
    pub multi_day: Vec<Event>,
}

/// Splits an event list into single-day and multi-day events by calendar
/// date, ignoring time-of-day. Events with `end < start` never reach the
/// layout math: they are dropped here with a warning.
pub fn classify(events: &[Event]) -> ClassifiedEvents {
    let mut classified = ClassifiedEvents::default();

    for event in events {
        if event.end < event.start {
            log::warn!("[{}] event end is before start, skipping", event.id);
            continue;
        }

        if event.is_multi_day() {
            classified.multi_day.push(event.clone());
        } else {
            classified.single_day.push(event.clone());
        }
    }

    classified
}

/// Events happening at `now`, inclusive on both ends.
pub fn current_events(events: &[Event], now: NaiveDateTime) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.start <= now && now <= event.end)
        .cloned()
        .collect()
}

/// [`current_events`] against the wall clock.
pub fn current_events_now(events: &[Event]) -> Vec<Event> {
    current_events(events, Local::now().naive_local())
}

/// Events whose date interval covers `date`.
pub fn events_on_day(events: &[Event], date: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.covers_day(date))
        .cloned()
        .collect()
}

/// Events starting or ending on `date`. The year view marks its day dots
/// with this filter, and the week/day views pick their column events with
/// it from the single-day list.
pub fn events_touching_day(events: &[Event], date: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.start_date() == date || event.end_date() == date)
        .cloned()
        .collect()
}

/// `None` selects all users.
pub fn filter_by_user(events: &[Event], user_id: Option<Uuid>) -> Vec<Event> {
    events
        .iter()
        .filter(|event| user_id.is_none_or(|id| event.user.id == id))
        .cloned()
        .collect()
}

/// Multi-day events overlapping `date`, longest span first. Feeds the badge
/// row above the day and week grids.
pub fn multi_day_events_for_day(multi_day_events: &[Event], date: NaiveDate) -> Vec<Event> {
    let mut events: Vec<Event> = multi_day_events
        .iter()
        .filter(|event| event.covers_day(date))
        .cloned()
        .collect();

    events.sort_by_key(|event| Reverse(event.day_span()));

    events
}

/// "Day X of Y" for a multi-day event on a given day cell.
pub fn day_progress(event: &Event, date: NaiveDate) -> (i64, i64) {
    let current = (date - event.start_date()).num_days() + 1;

    (current, event.day_span())
}

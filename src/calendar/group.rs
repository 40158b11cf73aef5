use chrono::NaiveDateTime;

use super::event::Event;

/// Events whose time intervals overlap in a transitively chained sense.
/// Each group becomes one horizontal column-cluster in the day/week views.
pub type EventGroup = Vec<Event>;

/// Greedy chained-overlap grouping of a single day's events.
///
/// Events are walked in start order; an event joins the latest open group
/// iff its start lies strictly before the group's running max end, else it
/// opens a new group. Conservative by design: it does not minimize the
/// group count for complex overlap patterns. Back-to-back and zero-duration
/// events do not overlap (strict `<`), so `end == next start` splits.
pub fn group_events(day_events: &[Event]) -> Vec<EventGroup> {
    let mut sorted = day_events.to_vec();
    sorted.sort_by_key(|event| event.start);

    let mut groups: Vec<EventGroup> = Vec::new();
    // Running max end over the latest group.
    let mut open_end = NaiveDateTime::MIN;

    for event in sorted {
        if !groups.is_empty() && event.start < open_end {
            open_end = open_end.max(event.end);
            groups
                .last_mut()
                .expect("Group list is not empty")
                .push(event);
        } else {
            open_end = event.end;
            groups.push(vec![event]);
        }
    }

    groups
}

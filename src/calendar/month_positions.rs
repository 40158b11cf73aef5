use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::event::Event;
use super::grid_service::grid_range;

/// Slots 0..2 render as full badges; everything beyond folds into the
/// per-cell "+N more" indicator.
pub const MAX_VISIBLE_SLOTS: usize = 3;

/// How a badge connects to its neighbours across a multi-day span.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanPosition {
    /// Start day: title shown, squared right edge.
    First,
    /// Squared on both edges, no text.
    Middle,
    /// End day: squared left edge.
    Last,
    /// Single-day event, fully rounded.
    None,
}

/// One badge of a month cell: the event plus its row slot and span marker.
/// One per (event, day-cell) pair the event touches.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionedEvent {
    pub event: Event,
    pub slot: usize,
    pub position: SpanPosition,
}

/// Row-slot assignment for the month grid of `selected`.
///
/// A single left-to-right pass over the grid days; per day the active
/// events are ordered multi-day first (longest span first), then
/// single-day by start time, and every event not seen on an earlier day
/// takes the lowest slot unoccupied that day. An event already assigned
/// keeps its slot on every later day it spans, so multi-day badges stay
/// on one row across the whole span.
pub fn month_event_positions(
    multi_day_events: &[Event],
    single_day_events: &[Event],
    selected: NaiveDate,
) -> BTreeMap<Uuid, usize> {
    let (first, last) = grid_range(selected);
    let mut assigned: BTreeMap<Uuid, usize> = BTreeMap::new();

    for day in first.iter_days().take_while(|day| day <= &last) {
        let mut day_events: Vec<&Event> = multi_day_events
            .iter()
            .filter(|event| event.covers_day(day))
            .collect();
        day_events.sort_by_key(|event| Reverse(event.day_span()));

        let mut singles: Vec<&Event> = single_day_events
            .iter()
            .filter(|event| event.covers_day(day))
            .collect();
        singles.sort_by_key(|event| event.start);
        day_events.append(&mut singles);

        let mut occupied: BTreeSet<usize> = day_events
            .iter()
            .filter_map(|event| assigned.get(&event.id).copied())
            .collect();

        for event in day_events {
            if assigned.contains_key(&event.id) {
                continue;
            }

            let mut slot = 0;
            while occupied.contains(&slot) {
                slot += 1;
            }

            occupied.insert(slot);
            assigned.insert(event.id, slot);
        }
    }

    assigned
}

/// The badges of one month cell: events active on `date`, slot ascending,
/// each with its span marker. Events missing from `positions` are not
/// renderable and are dropped.
pub fn month_cell_events(
    date: NaiveDate,
    events: &[Event],
    positions: &BTreeMap<Uuid, usize>,
) -> Vec<PositionedEvent> {
    let mut cell_events: Vec<PositionedEvent> = events
        .iter()
        .filter(|event| event.covers_day(date))
        .filter_map(|event| {
            let slot = positions.get(&event.id).copied()?;

            Some(PositionedEvent {
                position: span_position(event, date),
                event: event.clone(),
                slot,
            })
        })
        .collect();

    cell_events.sort_by_key(|positioned| positioned.slot);

    cell_events
}

/// `+N more` count of a cell, clamped at zero.
pub fn cell_overflow_count(cell_events: &[PositionedEvent]) -> usize {
    cell_events.len().saturating_sub(MAX_VISIBLE_SLOTS)
}

fn span_position(event: &Event, date: NaiveDate) -> SpanPosition {
    if !event.is_multi_day() {
        SpanPosition::None
    } else if date == event.start_date() {
        SpanPosition::First
    } else if date == event.end_date() {
        SpanPosition::Last
    } else {
        SpanPosition::Middle
    }
}

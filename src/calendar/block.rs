use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::event::{Event, EARLIEST_NAIVE_TIME};
use super::group::{group_events, EventGroup};
use super::hours::HourRange;

/// Vertical gap between stacked blocks.
pub const BLOCK_GUTTER: f32 = 8.0;
/// Shorter than this and the title line becomes unreadable; zero-duration
/// events would otherwise go negative after the gutter.
pub const MIN_BLOCK_HEIGHT: f32 = 16.0;

/// Geometry for one absolutely positioned event block: pixel offsets
/// vertically, percentages horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EventBlockStyle {
    pub top: f32,
    pub height: f32,
    pub left_pct: f32,
    pub width_pct: f32,
}

/// Pixel scale of the hour grid. Configuration, not derived data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockMetrics {
    pub hour_height: f32,
}

impl Default for BlockMetrics {
    fn default() -> Self {
        Self { hour_height: 96.0 }
    }
}

impl BlockMetrics {
    /// Geometry for `event` rendered in the column of `day`, occupying
    /// column `group_index` of `group_count`, with the hour grid starting
    /// at `bounds.from`. The start clamps to the day for events spilling
    /// in from an earlier date.
    pub fn event_block_style(
        &self,
        event: &Event,
        day: NaiveDate,
        group_index: usize,
        group_count: usize,
        bounds: HourRange,
    ) -> EventBlockStyle {
        let day_start = day.and_time(EARLIEST_NAIVE_TIME);
        let start = event.start.max(day_start);
        let start_minutes = (start - day_start).num_minutes() as f32;

        let top = (start_minutes - bounds.from as f32 * 60.0) / 60.0 * self.hour_height;
        let height = (event.duration_minutes() as f32 / 60.0)
            .mul_add(self.hour_height, -BLOCK_GUTTER)
            .max(MIN_BLOCK_HEIGHT);

        let width_pct = 100.0 / group_count as f32;
        let left_pct = group_index as f32 * width_pct;

        EventBlockStyle {
            top,
            height,
            left_pct,
            width_pct,
        }
    }

    /// The full block layout of one day column, in two passes: tentative
    /// column assignment from the greedy grouping, then a cross-group
    /// overlap check that hands events with no real conflict the full
    /// width. The grouping allocates columns conservatively; the second
    /// pass reclaims the space when the groups turn out disjoint.
    pub fn day_layout(
        &self,
        day_events: &[Event],
        day: NaiveDate,
        bounds: HourRange,
    ) -> Vec<(Event, EventBlockStyle)> {
        let groups = group_events(day_events);
        let group_count = groups.len();
        let mut layout = Vec::with_capacity(day_events.len());

        for (group_index, group) in groups.iter().enumerate() {
            for event in group {
                let mut style =
                    self.event_block_style(event, day, group_index, group_count, bounds);

                if !overlaps_other_group(event, &groups, group_index) {
                    style.width_pct = 100.0;
                    style.left_pct = 0.0;
                }

                layout.push((event.clone(), style));
            }
        }

        layout
    }
}

/// Position of the "now" indicator as a percentage of the visible range,
/// `None` while the current hour is off-grid.
pub fn current_time_offset(now: NaiveDateTime, bounds: HourRange) -> Option<f32> {
    if !bounds.contains(now.hour()) {
        return None;
    }

    let minutes = (now.hour() * 60 + now.minute()) as f32;
    let range_minutes = (bounds.to - bounds.from) as f32 * 60.0;

    Some((minutes - bounds.from as f32 * 60.0) / range_minutes * 100.0)
}

/// Strict interval overlap against every event outside the group.
fn overlaps_other_group(event: &Event, groups: &[EventGroup], group_index: usize) -> bool {
    groups.iter().enumerate().any(|(other_index, other_group)| {
        other_index != group_index
            && other_group
                .iter()
                .any(|other| event.start < other.end && other.start < event.end)
    })
}

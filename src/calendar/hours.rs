use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::event::Event;

/// A `[from, to)` hour window. The default is the visible-hours range of
/// the reference UI.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HourRange {
    pub from: u32,
    pub to: u32,
}

impl HourRange {
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    pub const fn contains(&self, hour: u32) -> bool {
        self.from <= hour && hour < self.to
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self { from: 7, to: 18 }
    }
}

/// Business-hours windows per day of week. Only used to visually mark
/// non-working slots; never restricts event placement. A `{from: 0, to: 0}`
/// entry means no working hours that day.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingHours {
    pub sunday: HourRange,
    pub monday: HourRange,
    pub tuesday: HourRange,
    pub wednesday: HourRange,
    pub thursday: HourRange,
    pub friday: HourRange,
    pub saturday: HourRange,
}

impl Default for WorkingHours {
    fn default() -> Self {
        let weekday = HourRange::new(8, 17);

        Self {
            sunday: HourRange::new(0, 0),
            monday: weekday,
            tuesday: weekday,
            wednesday: weekday,
            thursday: weekday,
            friday: weekday,
            saturday: HourRange::new(8, 12),
        }
    }
}

impl WorkingHours {
    pub const fn for_weekday(&self, weekday: Weekday) -> HourRange {
        match weekday {
            Weekday::Sun => self.sunday,
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
        }
    }

    pub fn is_working_hour(&self, date: NaiveDate, hour: u32) -> bool {
        self.for_weekday(date.weekday()).contains(hour)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VisibleHourSpan {
    /// The inclusive-exclusive hour sequence `[earliest, latest)`.
    pub hours: Vec<u32>,
    pub earliest: u32,
    pub latest: u32,
}

/// The effective hour range of the day/week grids: the configured range,
/// widened (never narrowed) to include out-of-bounds events. An event end
/// with minutes past the hour rounds up; the upper bound caps at 24.
pub fn visible_hours(configured: HourRange, day_events: &[Event]) -> VisibleHourSpan {
    let mut earliest = configured.from;
    let mut latest = configured.to;

    for event in day_events {
        let start_hour = event.start.hour();
        let end_hour = event.end.hour() + u32::from(event.end.minute() > 0);

        earliest = earliest.min(start_hour);
        latest = latest.max(end_hour);
    }

    let latest = latest.min(24);

    VisibleHourSpan {
        hours: (earliest..latest).collect(),
        earliest,
        latest,
    }
}

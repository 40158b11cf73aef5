use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const EARLIEST_NAIVE_TIME: NaiveTime = NaiveTime::MIN;

/// The badge palette of the reference UI.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
    Orange,
    Gray,
}

impl EventColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Gray => "gray",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "red" => Some(Self::Red),
            "yellow" => Some(Self::Yellow),
            "purple" => Some(Self::Purple),
            "orange" => Some(Self::Orange),
            "gray" => Some(Self::Gray),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub picture_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: EventColor,
    pub user: User,
}

impl Event {
    pub const fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub const fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// An event is multi-day iff start and end fall on different calendar dates.
    pub fn is_multi_day(&self) -> bool {
        self.start.date() != self.end.date()
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Number of calendar dates the event touches, inclusive on both ends.
    pub fn day_span(&self) -> i64 {
        (self.end_date() - self.start_date()).num_days() + 1
    }

    pub fn covers_day(&self, date: NaiveDate) -> bool {
        self.start_date() <= date && date <= self.end_date()
    }

    pub fn is_between_dates(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date() <= end && self.end_date() >= start
    }

    /// Duration-preserving translation to a new start instant.
    pub fn moved_to(&self, new_start: NaiveDateTime) -> Self {
        let duration = self.duration();

        Self {
            start: new_start,
            end: new_start + duration,
            ..self.clone()
        }
    }

    /// Duration-preserving translation to a new calendar date, keeping the
    /// original start time-of-day.
    pub fn moved_to_day(&self, date: NaiveDate) -> Self {
        self.moved_to(date.and_time(self.start.time()))
    }
}

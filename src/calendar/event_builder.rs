use std::fmt;

use chrono::NaiveDateTime;
use uuid::Uuid;

use super::event::{Event, EventColor, User};

#[derive(Debug, PartialEq, Eq)]
pub enum EventDraftError {
    NoTitle,
    NoStart,
    InvalidStart(String),
    NoEnd,
    InvalidEnd(String),
    EndBeforeStart,
    InvalidColor(String),
    NoUser,
}

impl fmt::Display for EventDraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTitle => f.write_str("title is required"),
            Self::NoStart => f.write_str("start date is required"),
            Self::InvalidStart(err) => write!(f, "invalid start date: {err}"),
            Self::NoEnd => f.write_str("end date is required"),
            Self::InvalidEnd(err) => write!(f, "invalid end date: {err}"),
            Self::EndBeforeStart => f.write_str("start date cannot be after end date"),
            Self::InvalidColor(name) => write!(f, "invalid color: {name}"),
            Self::NoUser => f.write_str("user is required"),
        }
    }
}

impl std::error::Error for EventDraftError {}

/// Unvalidated event data as a form layer produces it. [`EventDraft::build`]
/// is the validation boundary; events that pass it satisfy `start <= end`
/// and carry parseable dates, which the layout functions rely on.
#[derive(Debug, Default)]
pub struct EventDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub color: Option<String>,
    pub user: Option<User>,
}

impl EventDraft {
    /// Builds the event, minting a fresh id.
    ///
    /// # Errors
    /// Returns an error if a required field is missing or invalid.
    pub fn build(self) -> Result<Event, EventDraftError> {
        let title = self
            .title
            .filter(|title| !title.trim().is_empty())
            .ok_or(EventDraftError::NoTitle)?;
        let start_str = self.start.ok_or(EventDraftError::NoStart)?;
        let start = parse_date_time(&start_str)
            .map_err(|err| EventDraftError::InvalidStart(err.to_string()))?;
        let end_str = self.end.ok_or(EventDraftError::NoEnd)?;
        let end = parse_date_time(&end_str)
            .map_err(|err| EventDraftError::InvalidEnd(err.to_string()))?;

        if end < start {
            return Err(EventDraftError::EndBeforeStart);
        }

        let color = match self.color {
            Some(name) => {
                EventColor::from_name(&name).ok_or(EventDraftError::InvalidColor(name))?
            }
            None => EventColor::default(),
        };
        let user = self.user.ok_or(EventDraftError::NoUser)?;

        Ok(Event {
            id: Uuid::new_v4(),
            title,
            description: self.description.unwrap_or_default(),
            start,
            end,
            color,
            user,
        })
    }

    pub fn set_title_opt(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn set_description_opt(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn set_start_opt(mut self, start: Option<String>) -> Self {
        self.start = start;
        self
    }

    pub fn set_end_opt(mut self, end: Option<String>) -> Self {
        self.end = end;
        self
    }

    pub fn set_color_opt(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    pub fn set_user_opt(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }
}

/// Accepts plain ISO date-times and RFC 3339 strings. Offsets are dropped,
/// not converted; the whole crate runs on local wall-clock time.
fn parse_date_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    value
        .parse::<NaiveDateTime>()
        .or_else(|_| chrono::DateTime::parse_from_rfc3339(value).map(|dt| dt.naive_local()))
}

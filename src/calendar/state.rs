use chrono::{Local, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::config::Config;

use super::classify::{classify, filter_by_user, ClassifiedEvents};
use super::date_service::{self, Direction, View};
use super::grid_service::{calendar_cells, DayCell};
use super::event::{Event, User};

/// The single owning controller of a calendar widget: events, users, the
/// selected date and view, and the configuration. All layout stays in the
/// pure functions of this module tree; the state only feeds them, so the
/// layout core never touches ambient state.
#[derive(Clone, Debug)]
pub struct CalendarState {
    events: Vec<Event>,
    users: Vec<User>,
    selected_date: NaiveDate,
    selected_user: Option<Uuid>,
    view: View,
    config: Config,
}

impl CalendarState {
    pub fn new(config: Config, users: Vec<User>, events: Vec<Event>) -> Self {
        Self {
            events,
            users,
            selected_date: Local::now().date_naive(),
            selected_user: None,
            view: View::default(),
            config,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub const fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub const fn selected_user(&self) -> Option<Uuid> {
        self.selected_user
    }

    pub const fn view(&self) -> View {
        self.view
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn set_selected_user(&mut self, user_id: Option<Uuid>) {
        self.selected_user = user_id;
    }

    /// Steps the selected date by one unit of the current view.
    pub fn navigate(&mut self, direction: Direction) -> NaiveDate {
        self.selected_date = date_service::navigate_date(self.selected_date, self.view, direction);

        self.selected_date
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Replaces the event with the same id. Returns false if it is unknown.
    pub fn update_event(&mut self, event: Event) -> bool {
        match self.events.iter_mut().find(|known| known.id == event.id) {
            Some(known) => {
                *known = event;
                true
            }
            None => false,
        }
    }

    pub fn remove_event(&mut self, id: Uuid) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;

        Some(self.events.remove(index))
    }

    /// The drag-and-drop transform: translates the event to `new_start`,
    /// preserving its duration. Returns the updated event.
    pub fn move_event(&mut self, id: Uuid, new_start: NaiveDateTime) -> Option<Event> {
        let event = self.events.iter_mut().find(|event| event.id == id)?;
        *event = event.moved_to(new_start);

        Some(event.clone())
    }

    /// Events after the user filter, the list every view consumes.
    pub fn visible_events(&self) -> Vec<Event> {
        filter_by_user(&self.events, self.selected_user)
    }

    pub fn classified(&self) -> ClassifiedEvents {
        classify(&self.visible_events())
    }

    pub fn cells(&self) -> Vec<DayCell> {
        calendar_cells(self.selected_date)
    }

    pub fn range_text(&self) -> String {
        date_service::range_text(self.view, self.selected_date)
    }

    pub fn events_count(&self) -> usize {
        date_service::events_count(&self.visible_events(), self.selected_date, self.view)
    }
}

// Event module
// Calendar event model placed on a single day of the time grid

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::category::Category;
use crate::utils::time::{TimeOfDay, TimeRange};

/// Identifier assigned by the event store.
pub type EventId = u64;

/// Someone attending an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    /// Avatar image URL or path
    pub image: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Initials shown when the avatar image is unavailable.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Reasons an event cannot be built or stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time must be after start time")]
    EndNotAfterStart,
    #[error("Event title is required")]
    MissingTitle,
    #[error("Event date is required")]
    MissingDate,
    #[error("Event start time is required")]
    MissingStart,
    #[error("Event end time is required")]
    MissingEnd,
}

/// A timed calendar event on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Assigned by the store; `None` until the event has been added
    pub id: Option<EventId>,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub participants: Vec<Participant>,
    pub category: Category,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use calendar_grid::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2023, 10, 18).unwrap();
    /// let event = Event::new(
    ///     "Team Meeting",
    ///     date,
    ///     "9:00".parse().unwrap(),
    ///     "10:30".parse().unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(event.duration_minutes(), 90);
    /// ```
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id: None,
            title: title.into(),
            description: String::new(),
            date,
            start,
            end,
            participants: Vec::new(),
            category: Category::default(),
        };

        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event.
    ///
    /// Spans that end at or before their start (including ones that would
    /// cross midnight) are rejected, so stored events always have a positive
    /// height on the grid.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if self.end <= self.start {
            return Err(EventValidationError::EndNotAfterStart);
        }

        Ok(())
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    pub fn duration_minutes(&self) -> u16 {
        self.time_range().duration_minutes()
    }

    /// Colour class of the event's category.
    pub fn color(&self) -> &'static str {
        self.category.color()
    }

    /// `"HH:MM - HH:MM"` label shown inside the event block.
    pub fn time_label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    title: Option<String>,
    description: Option<String>,
    date: Option<NaiveDate>,
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
    participants: Vec<Participant>,
    category: Option<Category>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start(mut self, start: TimeOfDay) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: TimeOfDay) -> Self {
        self.end = Some(end);
        self
    }

    /// Add a participant (may be called repeatedly)
    pub fn participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, EventValidationError> {
        let title = self.title.ok_or(EventValidationError::MissingTitle)?;
        let date = self.date.ok_or(EventValidationError::MissingDate)?;
        let start = self.start.ok_or(EventValidationError::MissingStart)?;
        let end = self.end.ok_or(EventValidationError::MissingEnd)?;

        let event = Event {
            id: None,
            title,
            description: self.description.unwrap_or_default(),
            date,
            start,
            end,
            participants: self.participants,
            category: self.category.unwrap_or_default(),
        };

        event.validate()?;
        Ok(event)
    }
}

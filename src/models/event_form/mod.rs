//! Event form data and validation.
//!
//! The create/edit form hands back partially filled data. Validation here
//! mirrors what the form shows inline (title and time errors), and
//! `into_event` applies the defaults used when a field was left empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::category::Category;
use crate::models::event::{Event, EventId, EventValidationError};
use crate::utils::time::{TimeError, TimeOfDay};

pub const DEFAULT_TITLE: &str = "Untitled Event";
pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "10:00";

/// Raw values submitted by the event form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFormData {
    /// Present when editing an existing event
    pub id: Option<EventId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub category: Option<Category>,
}

/// Inline errors shown next to the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub time: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.time.is_none()
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = [self.title.as_deref(), self.time.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

impl EventFormData {
    /// Pre-fill the form from an existing event for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id,
            title: Some(event.title.clone()),
            description: Some(event.description.clone()),
            date: Some(event.date),
            start_time: Some(event.start.to_string()),
            end_time: Some(event.end.to_string()),
            category: Some(event.category),
        }
    }

    fn start_or_default(&self) -> &str {
        self.start_time.as_deref().unwrap_or(DEFAULT_START_TIME)
    }

    fn end_or_default(&self) -> &str {
        self.end_time.as_deref().unwrap_or(DEFAULT_END_TIME)
    }

    /// Check the fields the form requires before submitting.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.title.as_deref().map_or(true, |title| title.trim().is_empty()) {
            errors.title = Some("Title is required".to_string());
        }

        errors.time = self.times().err();
        errors
    }

    /// Parse the start and end times, defaulting unset ones. The end must
    /// come after the start.
    fn times(&self) -> Result<(TimeOfDay, TimeOfDay), String> {
        let start: TimeOfDay = self
            .start_or_default()
            .parse()
            .map_err(|err: TimeError| err.to_string())?;
        let end: TimeOfDay = self
            .end_or_default()
            .parse()
            .map_err(|err: TimeError| err.to_string())?;

        if end <= start {
            return Err(EventValidationError::EndNotAfterStart.to_string());
        }
        Ok((start, end))
    }

    /// Turn the submitted data into an event, filling unset fields with defaults.
    ///
    /// A blank title becomes "Untitled Event", missing times become 09:00-10:00,
    /// a missing date becomes `default_date` and a missing category becomes
    /// `Education`.
    pub fn into_event(self, default_date: NaiveDate) -> Result<Event, FormErrors> {
        let (start, end) = self.times().map_err(time_only)?;

        let title = self
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Ok(Event {
            id: self.id,
            title,
            description: self.description.unwrap_or_default(),
            date: self.date.unwrap_or(default_date),
            start,
            end,
            participants: Vec::new(),
            category: self.category.unwrap_or_default(),
        })
    }
}

fn time_only(message: String) -> FormErrors {
    FormErrors {
        title: None,
        time: Some(message),
    }
}

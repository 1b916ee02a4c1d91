use super::EventStore;
use crate::models::event::{Event, EventId};
use crate::models::event_form::EventFormData;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

impl EventStore {
    /// Create a store pre-populated with events, assigning ids in order.
    pub fn with_events<I>(events: I) -> Result<Self>
    where
        I: IntoIterator<Item = Event>,
    {
        let mut store = Self::new();
        for event in events {
            store.add(event)?;
        }
        Ok(store)
    }

    /// Add a new event, assigning it the next id.
    ///
    /// Any id already set on the event is ignored.
    pub fn add(&mut self, mut event: Event) -> Result<Event> {
        event.validate().map_err(|e| anyhow!(e))?;

        let id = self.next_id;
        self.next_id += 1;
        event.id = Some(id);

        log::debug!("Adding event {} '{}' on {}", id, event.title, event.date);
        self.events.insert(id, event.clone());

        Ok(event)
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    /// Replace an existing event.
    pub fn update(&mut self, event: Event) -> Result<()> {
        let id = event
            .id
            .ok_or_else(|| anyhow!("Event ID is required for update"))?;
        event.validate().map_err(|e| anyhow!(e))?;

        let slot = self
            .events
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Event with id {} not found", id))?;

        log::debug!("Updating event {} '{}'", id, event.title);
        *slot = event;

        Ok(())
    }

    /// Delete an event by ID, returning the removed record.
    pub fn remove(&mut self, id: EventId) -> Result<Event> {
        let removed = self
            .events
            .remove(&id)
            .ok_or_else(|| anyhow!("Event with id {} not found", id))?;

        log::debug!("Removed event {} '{}'", id, removed.title);
        Ok(removed)
    }

    /// Apply a submitted form: creates a new event, or updates the event the
    /// form was opened for.
    ///
    /// The form's own checks run first, so a blank title is rejected rather
    /// than stored as the default title. Participants are not edited by the
    /// form, so an update keeps the ones already stored.
    pub fn submit_form(&mut self, form: EventFormData, default_date: NaiveDate) -> Result<Event> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(anyhow::Error::new(errors).context("Event form is invalid"));
        }

        let mut event = form
            .into_event(default_date)
            .context("Event form is invalid")?;

        match event.id {
            Some(id) => {
                let existing = self
                    .get(id)
                    .ok_or_else(|| anyhow!("Event with id {} not found", id))?;
                event.participants = existing.participants.clone();
                self.update(event.clone())?;
                Ok(event)
            }
            None => self.add(event),
        }
    }
}

//! Calendar event store entry point.
//! Keeps events in memory, keyed by id, with mutation and view queries
//! organized across focused submodules.

use std::collections::BTreeMap;

use crate::models::event::{Event, EventId};

pub mod crud;
pub mod queries;

/// In-memory store of calendar events.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after deletions, and iterating the map visits events in the
/// order they were added.
#[derive(Debug, Clone)]
pub struct EventStore {
    pub(crate) events: BTreeMap<EventId, Event>,
    pub(crate) next_id: EventId,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            events: BTreeMap::new(),
            next_id: 1,
        }
    }
}

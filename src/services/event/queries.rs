use std::collections::BTreeMap;

use super::EventStore;
use crate::models::event::{Event, EventId};
use crate::utils::time::TimeRange;
use chrono::NaiveDate;

/// What a month-view cell shows: the first few events and how many were cut.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSummary<'a> {
    pub visible: Vec<&'a Event>,
    pub hidden: usize,
}

impl CellSummary<'_> {
    /// The "+N more" footer, if anything was cut.
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

impl EventStore {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every event, in the order it was added.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    /// Events on one date ordered by start time, as the day view lists them.
    /// Events starting together keep the order they were added in.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.iter().filter(|event| event.date == date).collect();
        events.sort_by_key(|event| event.start);
        events
    }

    /// One column of events per requested date, as the week view draws them.
    pub fn events_for_dates(&self, dates: &[NaiveDate]) -> Vec<(NaiveDate, Vec<&Event>)> {
        dates
            .iter()
            .map(|date| (*date, self.events_on(*date)))
            .collect()
    }

    /// Group all events by date, keeping insertion order within each date.
    pub fn events_by_date(&self) -> BTreeMap<NaiveDate, Vec<&Event>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
        for event in self.iter() {
            grouped.entry(event.date).or_default().push(event);
        }
        grouped
    }

    /// The month-view summary for one date, showing at most `limit` events.
    pub fn month_cell_summary(&self, date: NaiveDate, limit: usize) -> CellSummary<'_> {
        let all: Vec<&Event> = self.iter().filter(|event| event.date == date).collect();
        let hidden = all.len().saturating_sub(limit);

        CellSummary {
            visible: all.into_iter().take(limit).collect(),
            hidden,
        }
    }

    /// Search events by title or description, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }

        self.iter()
            .filter(|event| {
                event.title.to_lowercase().contains(&query)
                    || event.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Events on `date` whose span overlaps `range`, ordered by start time.
    ///
    /// `exclude` skips the event being edited so it does not conflict with itself.
    pub fn conflicts_with(
        &self,
        date: NaiveDate,
        range: &TimeRange,
        exclude: Option<EventId>,
    ) -> Vec<&Event> {
        self.events_on(date)
            .into_iter()
            .filter(|event| exclude.map_or(true, |id| event.id != Some(id)))
            .filter(|event| event.time_range().overlaps(range))
            .collect()
    }
}

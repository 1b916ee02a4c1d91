//! Time-grid geometry for the day and week views.
//!
//! Views place each event as an absolutely positioned block: `top` is the
//! distance from the grid's first hour row and `height` is the event's
//! duration, both in pixels. The grid origin differs per view, so every
//! calculation takes it as a parameter instead of assuming midnight.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::event::{Event, EventId};
use crate::models::settings::Settings;
use crate::models::ui::ViewType;
use crate::services::event::EventStore;
use crate::utils::date::{week_days, Day};
use crate::utils::time::{TimeError, TimeOfDay, TimeRange, MINUTES_PER_HOUR};

/// Height of one hour row in pixels.
pub const HOUR_HEIGHT: f32 = 80.0;

/// Granularity, in minutes, of grid clicks turned back into times.
pub const SLOT_INTERVAL: u16 = 15;

/// Vertical placement of an event block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventPosition {
    pub top: f32,
    pub height: f32,
}

impl EventPosition {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Parameters of a rendered time grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridGeometry {
    /// Hour drawn at the top of the grid
    pub start_hour: i32,
    /// Pixels per hour row
    pub hour_height: f32,
    /// Number of hour rows drawn
    pub visible_hours: u8,
}

impl GridGeometry {
    pub fn new(start_hour: i32) -> Self {
        Self {
            start_hour,
            hour_height: HOUR_HEIGHT,
            visible_hours: 12,
        }
    }

    pub fn with_hour_height(mut self, hour_height: f32) -> Self {
        self.hour_height = hour_height;
        self
    }

    pub fn with_visible_hours(mut self, visible_hours: u8) -> Self {
        self.visible_hours = visible_hours;
        self
    }

    /// Geometry of a view's grid under the given settings, `None` for the month view.
    pub fn for_view(view: ViewType, settings: &Settings) -> Option<Self> {
        let start_hour = settings.start_hour_for(view)?;
        let visible_hours = match view {
            ViewType::Day => settings.visible_hours,
            _ => view.visible_hours()?,
        };

        Some(
            Self::new(start_hour)
                .with_hour_height(settings.hour_height)
                .with_visible_hours(visible_hours),
        )
    }

    /// Place a span on the grid.
    ///
    /// Top and height are derived from hour and minute components relative to
    /// the grid origin. Nothing is clamped: events before the origin get a
    /// negative top and an inverted span gets a negative height.
    pub fn position(&self, start: TimeOfDay, end: TimeOfDay) -> EventPosition {
        let hour_offset = start.hour() as i32 - self.start_hour;
        let minute_offset = start.minute() as f32 / 60.0;
        let top = (hour_offset as f32 + minute_offset) * self.hour_height;

        let duration_hours = end.hour() as i32 - start.hour() as i32;
        let duration_minutes = (end.minute() as f32 - start.minute() as f32) / 60.0;
        let height = (duration_hours as f32 + duration_minutes) * self.hour_height;

        EventPosition { top, height }
    }

    pub fn position_for(&self, event: &Event) -> EventPosition {
        self.position(event.start, event.end)
    }

    /// Y offset of a single instant, e.g. for the current time indicator.
    pub fn offset_for(&self, time: TimeOfDay) -> f32 {
        (time.fractional_hours() - self.start_hour as f32) * self.hour_height
    }

    pub fn total_height(&self) -> f32 {
        self.visible_hours as f32 * self.hour_height
    }

    /// Whether any part of the block falls inside the drawn rows.
    pub fn is_visible(&self, position: &EventPosition) -> bool {
        position.bottom() > 0.0 && position.top < self.total_height()
    }

    /// Labels down the left edge, one per row ("7:00", "8:00", ...).
    pub fn hour_labels(&self) -> Vec<String> {
        (0..self.visible_hours as i32)
            .map(|row| self.start_hour + row)
            .filter(|hour| (0..24).contains(hour))
            .map(|hour| format!("{}:00", hour))
            .collect()
    }

    /// Map a y offset inside the grid back to a time, snapped down to the
    /// nearest slot. Returns `None` outside the day or for a non-finite offset.
    pub fn time_at_offset(&self, y: f32) -> Option<TimeOfDay> {
        if !(self.hour_height > 0.0) || !y.is_finite() {
            return None;
        }

        let minutes_from_origin = (y / self.hour_height * MINUTES_PER_HOUR as f32).floor();
        let minutes = self.start_hour as f32 * MINUTES_PER_HOUR as f32 + minutes_from_origin;
        if minutes < 0.0 {
            return None;
        }

        let minutes = minutes as u16;
        TimeOfDay::from_minutes(minutes - minutes % SLOT_INTERVAL).ok()
    }
}

/// Compute the pixel top/height of an event on a grid starting at `start_hour`,
/// using the fixed 80px hour height.
pub fn calculate_event_position(
    start_time: &str,
    end_time: &str,
    start_hour: i32,
) -> Result<EventPosition, TimeError> {
    let start: TimeOfDay = start_time.parse()?;
    let end: TimeOfDay = end_time.parse()?;
    Ok(GridGeometry::new(start_hour).position(start, end))
}

/// Whether two time ranges intersect. Ranges that only touch do not overlap.
pub fn do_times_overlap(
    start1: &str,
    end1: &str,
    start2: &str,
    end2: &str,
) -> Result<bool, TimeError> {
    let first = TimeRange::parse(start1, end1)?;
    let second = TimeRange::parse(start2, end2)?;
    Ok(first.overlaps(&second))
}

/// An event together with its block placement, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEvent {
    pub id: Option<EventId>,
    pub title: String,
    pub time_label: String,
    pub color: &'static str,
    pub position: EventPosition,
}

/// Place every visible event of one day column.
pub fn layout_column<'a, I>(events: I, geometry: &GridGeometry) -> Vec<PositionedEvent>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter_map(|event| {
            let position = geometry.position_for(event);
            geometry.is_visible(&position).then(|| PositionedEvent {
                id: event.id,
                title: event.title.clone(),
                time_label: event.time_label(),
                color: event.color(),
                position,
            })
        })
        .collect()
}

/// A day column of the week view with its placed events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayColumn {
    pub day: Day,
    pub events: Vec<PositionedEvent>,
}

/// Columns a time-grid view shows around `anchor`: the anchor alone for the
/// day view, its whole week otherwise.
pub fn days_for_view(view: ViewType, anchor: NaiveDate, first_day_of_week: u8) -> Vec<Day> {
    match view {
        ViewType::Day => vec![Day::from_date(anchor)],
        ViewType::Week | ViewType::Month => week_days(anchor, first_day_of_week),
    }
}

/// Lay out every column of a week (or any run of days) from the store.
pub fn layout_days(store: &EventStore, days: &[Day], geometry: &GridGeometry) -> Vec<DayColumn> {
    days.iter()
        .map(|day| DayColumn {
            day: day.clone(),
            events: layout_column(store.events_on(day.date), geometry),
        })
        .collect()
}

// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests

#![allow(dead_code)]

use calendar_grid::models::category::Category;
use calendar_grid::models::event::{Event, Participant};
use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Oct 18, 2023
    pub fn oct_18_2023() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 18).unwrap()
    }

    /// Thursday, Oct 19, 2023
    pub fn oct_19_2023() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 19).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    fn timed(title: &str, date: NaiveDate, start: &str, end: &str, category: Category) -> Event {
        Event::builder()
            .title(title)
            .date(date)
            .start(start.parse().unwrap())
            .end(end.parse().unwrap())
            .category(category)
            .build()
            .unwrap()
    }

    /// 9:00-10:00 work meeting with one participant
    pub fn team_meeting() -> Event {
        let mut event = timed("Team Meeting", dates::oct_18_2023(), "9:00", "10:00", Category::Work);
        event
            .participants
            .push(Participant::new("Sarah Chen", "/avatars/sarah.png"));
        event
    }

    /// 9:30-10:30, overlaps the team meeting
    pub fn design_sync() -> Event {
        timed("Design Sync", dates::oct_18_2023(), "9:30", "10:30", Category::Work)
    }

    /// 10:00-11:00, starts exactly when the team meeting ends
    pub fn coffee_chat() -> Event {
        timed("Coffee Chat", dates::oct_18_2023(), "10:00", "11:00", Category::Personal)
    }

    /// 9:00-11:20 course on the following day
    pub fn online_course() -> Event {
        timed("Online Course", dates::oct_19_2023(), "9:00", "11:20", Category::Education)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_events_are_valid() {
        assert!(events::team_meeting().validate().is_ok());
        assert!(events::design_sync().validate().is_ok());
        assert!(events::coffee_chat().validate().is_ok());
        assert!(events::online_course().validate().is_ok());
    }
}

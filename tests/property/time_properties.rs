// Properties of the minute conversions, grid geometry and overlap test,
// checked against random times of day

use calendar_grid::services::layout::{calculate_event_position, do_times_overlap, GridGeometry};
use calendar_grid::utils::time::{minutes_to_time, time_to_minutes, TimeOfDay, TimeRange};
use proptest::prelude::*;

fn time_string() -> impl Strategy<Value = String> {
    (0u8..24, 0u8..60, any::<bool>()).prop_map(|(hour, minute, padded)| {
        if padded {
            format!("{:02}:{:02}", hour, minute)
        } else {
            format!("{}:{:02}", hour, minute)
        }
    })
}

fn range() -> impl Strategy<Value = TimeRange> {
    (0u16..1440, 0u16..1440).prop_map(|(a, b)| {
        TimeRange::new(
            TimeOfDay::from_minutes(a).unwrap(),
            TimeOfDay::from_minutes(b).unwrap(),
        )
    })
}

proptest! {
    /// Property: converting minutes to a string and back is the identity
    #[test]
    fn prop_minutes_round_trip(minutes in 0u16..1440) {
        let time = minutes_to_time(minutes).unwrap();
        prop_assert_eq!(time_to_minutes(&time).unwrap(), minutes);
    }

    /// Property: a time string converts back to its zero-padded canonical form
    #[test]
    fn prop_canonical_form(time in time_string()) {
        let canonical = minutes_to_time(time_to_minutes(&time).unwrap()).unwrap();
        let (hour, minute) = time.split_once(':').unwrap();
        prop_assert_eq!(canonical, format!("{:0>2}:{}", hour, minute));
    }

    /// Property: anything past the last minute of the day is rejected
    #[test]
    fn prop_minutes_past_day_rejected(minutes in 1440u16..) {
        prop_assert!(minutes_to_time(minutes).is_err());
    }

    /// Property: overlap is symmetric
    #[test]
    fn prop_overlap_symmetric(a in range(), b in range()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    /// Property: ranges that only touch never overlap
    #[test]
    fn prop_touching_ranges_do_not_overlap(start in 0u16..1438, split in 1u16..1438, len in 1u16..1438) {
        let mid = (start + split).min(1438);
        let end = (mid + len).min(1439);
        prop_assume!(start < mid && mid < end);

        let t = |m| TimeOfDay::from_minutes(m).unwrap().to_string();
        prop_assert!(!do_times_overlap(&t(start), &t(mid), &t(mid), &t(end)).unwrap());
    }

    /// Property: a non-empty range always overlaps itself
    #[test]
    fn prop_non_empty_range_overlaps_itself(a in range()) {
        prop_assume!(a.start < a.end);
        prop_assert!(a.overlaps(&a));
    }

    /// Property: height is proportional to duration in minutes
    #[test]
    fn prop_height_matches_duration(a in range(), origin in 0i32..24) {
        prop_assume!(a.start < a.end);
        let position = calculate_event_position(&a.start.to_string(), &a.end.to_string(), origin).unwrap();
        let expected = a.duration_minutes() as f32 / 60.0 * 80.0;
        prop_assert!((position.height - expected).abs() < 1e-2);
    }

    /// Property: moving the grid origin down one hour moves every block up one row
    #[test]
    fn prop_origin_shift_moves_top(a in range(), origin in 0i32..23) {
        let here = GridGeometry::new(origin).position(a.start, a.end);
        let next = GridGeometry::new(origin + 1).position(a.start, a.end);
        prop_assert!((here.top - next.top - 80.0).abs() < 1e-2);
        prop_assert!((here.height - next.height).abs() < 1e-3);
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_containment_overlaps() {
        assert!(do_times_overlap("9:00", "11:00", "9:30", "10:00").unwrap());
        assert!(do_times_overlap("9:30", "10:00", "9:00", "11:00").unwrap());
    }

    #[test]
    fn test_first_and_last_minute() {
        assert_eq!(minutes_to_time(0).unwrap(), "00:00");
        assert_eq!(minutes_to_time(1439).unwrap(), "23:59");
    }
}

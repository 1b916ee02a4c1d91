// Calendar Grid Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;

pub use services::layout::{calculate_event_position, do_times_overlap, EventPosition};
pub use utils::date::format_date;
pub use utils::time::{minutes_to_time, time_to_minutes, TimeError, TimeOfDay};

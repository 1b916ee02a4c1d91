// Calendar Grid
// Lays out a sample week in the configured view and prints it as JSON for a renderer

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use calendar_grid::models::category::Category;
use calendar_grid::models::event::{Event, Participant};
use calendar_grid::models::settings::Settings;
use calendar_grid::models::ui::ViewType;
use calendar_grid::services::event::EventStore;
use calendar_grid::services::layout::{days_for_view, layout_days, DayColumn, GridGeometry};
use calendar_grid::utils::date::{format_date, week_days, Day};

#[derive(Serialize)]
struct GridLayout {
    view: ViewType,
    week_of: String,
    geometry: GridGeometry,
    hour_labels: Vec<String>,
    columns: Vec<DayColumn>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting calendar-grid");

    let settings = Settings::load_default().unwrap_or_else(|err| {
        log::warn!("Failed to load settings, using defaults: {:#}", err);
        Settings::default()
    });

    let anchor = match std::env::args().nth(1) {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' (expected YYYY-MM-DD)", arg))?,
        None => Local::now().date_naive(),
    };

    let view = settings.default_view.grid_view();
    if view != settings.default_view {
        log::info!("{:?} view has no time grid, laying out {:?}", settings.default_view, view);
    }

    let week = week_days(anchor, settings.first_day_of_week);
    let store = sample_week(&week)?;
    let geometry = GridGeometry::for_view(view, &settings)
        .with_context(|| format!("{:?} view has no time grid", view))?;
    let days = days_for_view(view, anchor, settings.first_day_of_week);

    let layout = GridLayout {
        view,
        week_of: format_date(week[0].date, &settings.date_format),
        geometry,
        hour_labels: geometry.hour_labels(),
        columns: layout_days(&store, &days, &geometry),
    };

    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

/// Populate a store with a typical working week.
fn sample_week(days: &[Day]) -> Result<EventStore> {
    let entries = [
        (0, "Team Meeting", "9:00", "10:00", Category::Work, "Weekly planning"),
        (0, "Lunch with Sarah", "12:30", "13:30", Category::Personal, ""),
        (1, "Project Review", "14:00", "15:30", Category::Work, "Q4 milestones"),
        (2, "Online Course", "9:00", "11:20", Category::Education, "Rust ownership"),
        (2, "Client Call", "10:30", "11:00", Category::Work, ""),
        (3, "Design Workshop", "13:00", "14:30", Category::Work, ""),
        (4, "Yoga", "8:30", "9:30", Category::Personal, ""),
    ];

    let mut store = EventStore::new();
    for (offset, title, start, end, category, description) in entries {
        let Some(day) = days.get(offset) else {
            continue;
        };

        let event = Event::builder()
            .title(title)
            .description(description)
            .date(day.date)
            .start(start.parse()?)
            .end(end.parse()?)
            .category(category)
            .participant(Participant::new("Alex Kim", "/avatars/alex.png"))
            .build()?;

        let conflicts = store.conflicts_with(event.date, &event.time_range(), None);
        if !conflicts.is_empty() {
            log::warn!(
                "'{}' overlaps {} other event(s) on {}",
                event.title,
                conflicts.len(),
                event.date
            );
        }

        store.add(event)?;
    }

    Ok(store)
}

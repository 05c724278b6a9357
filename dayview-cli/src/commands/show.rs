use anyhow::Result;
use dayview_core::layout_day;
use owo_colors::OwoColorize;

use crate::Day;
use crate::render::{PlacedEvent, Render};

pub fn run(day: Day) -> Result<()> {
    let layout = layout_day(&day.events, &day.window, day.viewport_height)?;

    if day.events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut placed: Vec<PlacedEvent> = day
        .events
        .iter()
        .filter_map(|event| {
            layout
                .get(&event.id)
                .map(|record| PlacedEvent { event, record: *record })
        })
        .collect();

    // Top to bottom, then left to right
    placed.sort_by(|a, b| {
        a.record
            .top
            .total_cmp(&b.record.top)
            .then(a.record.left_percent.total_cmp(&b.record.left_percent))
    });

    let header = format!(
        "{:02}:00-{:02}:00",
        day.window.start_hour(),
        day.window.end_hour()
    );
    println!(
        "{} {}",
        header.bold(),
        format!("({} high)", day.viewport_height).dimmed()
    );

    for event in &placed {
        println!("  {}", event.render());
    }

    Ok(())
}

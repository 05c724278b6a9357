use anyhow::Result;
use dayview_core::layout_day;

use crate::Day;

pub fn run(day: Day) -> Result<()> {
    let layout = layout_day(&day.events, &day.window, day.viewport_height)?;
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

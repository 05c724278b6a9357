//! Terminal rendering of laid-out events.
//!
//! Stands in for a real drawing surface: each event gets a lane bar showing
//! which part of the track width its box covers.

use dayview_core::{Event, LayoutRecord};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// An event together with its computed box.
pub struct PlacedEvent<'a> {
    pub event: &'a Event,
    pub record: LayoutRecord,
}

impl Render for PlacedEvent<'_> {
    fn render(&self) -> String {
        let metrics = format!(
            "top {:.1} height {:.1} width {:.1}% left {:.1}%",
            self.record.top, self.record.height, self.record.width_percent, self.record.left_percent
        );

        format!(
            "[{}] {} {}",
            lane_cells(&self.record).cyan(),
            self.event,
            metrics.dimmed()
        )
    }
}

/// Number of cells the track width is drawn with.
const LANE_WIDTH: usize = 20;

/// Filled cells for the horizontal span of the box, dots elsewhere.
fn lane_cells(record: &LayoutRecord) -> String {
    let scale = |percent: f64| -> usize {
        ((percent / 100.0) * LANE_WIDTH as f64)
            .round()
            .clamp(0.0, LANE_WIDTH as f64) as usize
    };

    let from = scale(record.left_percent).min(LANE_WIDTH - 1);
    let to = scale(record.left_percent + record.width_percent).max(from + 1);

    (0..LANE_WIDTH)
        .map(|cell| if cell >= from && cell < to { '#' } else { '.' })
        .collect()
}

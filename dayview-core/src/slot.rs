//! Horizontal placement of one event among the events it overlaps.

use tracing::{debug, trace};

use crate::event::Event;
use crate::intensity::{count_active_during, peak_window};
use crate::overlap::overlapping;
use crate::time_axis::{Interval, to_minutes};
use crate::window::DayWindow;

/// Width and left offset of an event's box, in percent of the track width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub width_percent: f64,
    pub left_percent: f64,
}

/// Computes the slot of `event` given every event of the day.
///
/// The event's overlap group is ordered longest first; the event's position in
/// that order is its column, capped at the last column so the box never leaves
/// the track. The column width comes from the peak concurrency of the densest
/// overlap group reachable from it.
pub fn layout_slot<'a>(event: &'a Event, all_events: &'a [Event], window: &DayWindow) -> Slot {
    let target = to_minutes(event, window);

    let mut local = overlapping(target, all_events, window);
    // A zero-length event is not matched by its own span
    if !local.iter().any(|e| e.id == event.id) {
        local.push(event);
    }
    local.sort_by(|a, b| b.duration.cmp(&a.duration));

    let columns = peak_concurrency(&local, all_events, window);
    let width_percent = 100.0 / columns as f64;

    let column = local
        .iter()
        .position(|e| e.id == event.id)
        .unwrap_or(0)
        .min(columns - 1);
    let slot = Slot {
        width_percent,
        left_percent: column as f64 * width_percent,
    };

    trace!(
        id = event.id,
        group = local.len(),
        columns,
        column,
        "slot assigned"
    );

    slot
}

/// The overlap set (over all events) of whichever member of `local` overlaps
/// the most events. The first member wins ties.
pub fn most_intense_group<'a>(
    local: &[&Event],
    all_events: &'a [Event],
    window: &DayWindow,
) -> Vec<&'a Event> {
    let mut densest = Vec::new();

    for candidate in local {
        let group = overlapping(to_minutes(candidate, window), all_events, window);
        if group.len() > densest.len() {
            densest = group;
        }
    }

    densest
}

/// Number of columns the local group needs. Never zero.
fn peak_concurrency(local: &[&Event], all_events: &[Event], window: &DayWindow) -> usize {
    let dense = most_intense_group(local, all_events, window);
    let intervals: Vec<Interval> = dense.iter().map(|e| to_minutes(e, window)).collect();

    let count = peak_window(&intervals)
        .map(|peak| count_active_during(peak, &intervals))
        .unwrap_or(0);

    if count == 0 {
        debug!(
            group = intervals.len(),
            "degenerate overlap group, using full width"
        );
        return 1;
    }

    count
}

//! Finding the events that share time with a target span.

use crate::event::Event;
use crate::time_axis::{Interval, to_minutes};
use crate::window::DayWindow;

/// Whether `candidate` overlaps the span anchored at `target.start`.
///
/// Two cases: the candidate is already running when the target starts, or the
/// candidate starts while the target is running. Spans are half-open, so a
/// candidate ending exactly at `target.start` (or starting exactly at
/// `target.end`) does not overlap.
pub fn overlaps(candidate: Interval, target: Interval) -> bool {
    (candidate.start <= target.start && candidate.end > target.start)
        || (candidate.start >= target.start && candidate.start < target.start + target.duration())
}

/// All `candidates` that overlap `target`, in candidate order.
pub fn overlapping<'a>(target: Interval, candidates: &'a [Event], window: &DayWindow) -> Vec<&'a Event> {
    candidates
        .iter()
        .filter(|event| overlaps(to_minutes(event, window), target))
        .collect()
}

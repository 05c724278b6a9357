//! Sweep-line search for the busiest moment of a group of intervals.

use crate::time_axis::Interval;

/// Finds the window where the most intervals are active at once.
///
/// Every interval contributes a `+1` at its start and a `-1` at its end. The
/// points are swept in time order keeping a running count; the first window
/// between consecutive points whose count beats everything before it is the
/// peak. At equal timestamps ends are applied before starts, so intervals that
/// only touch are never counted as concurrent.
///
/// Returns `None` when no window has a positive count (no intervals, or only
/// zero-length ones).
pub fn peak_window(intervals: &[Interval]) -> Option<Interval> {
    let mut points: Vec<(i64, i64)> = intervals
        .iter()
        .flat_map(|interval| [(interval.start, 1), (interval.end, -1)])
        .collect();
    // (time, -1) orders before (time, +1)
    points.sort();

    let mut active = 0;
    let timeline: Vec<(i64, i64)> = points
        .into_iter()
        .map(|(time, delta)| {
            active += delta;
            (time, active)
        })
        .collect();

    let mut best = 0;
    let mut peak = None;
    for pair in timeline.windows(2) {
        let (start, count) = pair[0];
        let (end, _) = pair[1];

        if count > best {
            best = count;
            peak = Some(Interval::new(start, end));
        }
    }

    peak
}

/// Number of intervals that fully contain `window`.
pub fn count_active_during(window: Interval, intervals: &[Interval]) -> usize {
    intervals
        .iter()
        .filter(|interval| interval.start <= window.start && interval.end >= window.end)
        .count()
}

//! Layout of a whole day.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{LayoutError, LayoutResult};
use crate::event::{Event, EventId};
use crate::slot::layout_slot;
use crate::time_axis::{check_viewport, to_minutes, to_pixels};
use crate::window::DayWindow;

/// Where an event's box goes: `top`/`height` in viewport units, `width_percent`
/// and `left_percent` relative to the track width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutRecord {
    pub top: f64,
    pub height: f64,
    pub width_percent: f64,
    pub left_percent: f64,
}

/// Lays out every event of the day.
///
/// The whole batch is rejected if the viewport height is unusable or two
/// events share an id. Each record depends only on the input, so calling this
/// twice yields the same map.
pub fn layout_day(
    events: &[Event],
    window: &DayWindow,
    viewport_height: f64,
) -> LayoutResult<BTreeMap<EventId, LayoutRecord>> {
    let viewport_height = check_viewport(viewport_height)?;
    check_unique_ids(events)?;

    debug!(
        events = events.len(),
        start_hour = window.start_hour(),
        end_hour = window.end_hour(),
        viewport_height,
        "laying out day"
    );

    Ok(events
        .iter()
        .map(|event| (event.id, layout_event(event, events, window, viewport_height)))
        .collect())
}

/// Record for a single event. `viewport_height` must already be validated.
pub fn layout_event(
    event: &Event,
    all_events: &[Event],
    window: &DayWindow,
    viewport_height: f64,
) -> LayoutRecord {
    let span = to_minutes(event, window);
    let slot = layout_slot(event, all_events, window);

    LayoutRecord {
        top: to_pixels(span.start, window, viewport_height),
        height: to_pixels(span.duration(), window, viewport_height),
        width_percent: slot.width_percent,
        left_percent: slot.left_percent,
    }
}

fn check_unique_ids(events: &[Event]) -> LayoutResult<()> {
    let mut seen = HashSet::with_capacity(events.len());
    for event in events {
        if !seen.insert(event.id) {
            return Err(LayoutError::DuplicateId(event.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(specs: &[(i64, &str, i64)]) -> Vec<Event> {
        specs
            .iter()
            .map(|(id, start, duration)| Event::parse(*id, start, *duration).unwrap())
            .collect()
    }

    fn window() -> DayWindow {
        DayWindow::new(9, 21).unwrap()
    }

    #[test]
    fn single_event_at_window_start() {
        let day = events(&[(1, "09:00", 60)]);
        let layout = layout_day(&day, &window(), 1200.0).unwrap();

        assert_eq!(
            layout[&1],
            LayoutRecord {
                top: 0.0,
                height: 100.0,
                width_percent: 100.0,
                left_percent: 0.0,
            }
        );
    }

    #[test]
    fn shared_start_splits_track_longest_first() {
        let day = events(&[(1, "17:00", 60), (2, "17:00", 120)]);
        let layout = layout_day(&day, &window(), 1200.0).unwrap();

        assert_eq!(
            layout[&1],
            LayoutRecord {
                top: 800.0,
                height: 100.0,
                width_percent: 50.0,
                left_percent: 50.0,
            }
        );
        assert_eq!(
            layout[&2],
            LayoutRecord {
                top: 800.0,
                height: 200.0,
                width_percent: 50.0,
                left_percent: 0.0,
            }
        );
    }

    #[test]
    fn vertical_metrics_follow_hour_height() {
        let day = events(&[(1, "10:30", 45), (2, "13:15", 90), (3, "08:00", 30)]);
        let window = DayWindow::new(8, 18).unwrap();
        let layout = layout_day(&day, &window, 500.0).unwrap();
        let hour_height = 500.0 / 10.0;

        for event in &day {
            let span = to_minutes(event, &window);
            let record = layout[&event.id];
            assert_eq!(record.top, (span.start as f64 / 60.0) * hour_height);
            assert_eq!(record.height, (f64::from(event.duration) / 60.0) * hour_height);
        }
    }

    #[test]
    fn touching_events_are_not_split() {
        let day = events(&[(1, "10:00", 60), (2, "11:00", 60)]);
        let layout = layout_day(&day, &window(), 1200.0).unwrap();

        for record in layout.values() {
            assert_eq!(record.width_percent, 100.0);
            assert_eq!(record.left_percent, 0.0);
        }
    }

    #[test]
    fn zero_duration_event_has_zero_height() {
        let day = events(&[(1, "12:00", 0)]);
        let record = layout_day(&day, &window(), 1200.0).unwrap()[&1];

        assert_eq!(record.height, 0.0);
        assert_eq!(record.top, 300.0);
        assert_eq!(record.width_percent, 100.0);
    }

    #[test]
    fn zero_duration_event_inside_another_stays_on_track() {
        let day = events(&[(1, "09:00", 120), (2, "10:00", 0)]);
        let record = layout_day(&day, &window(), 1200.0).unwrap()[&2];

        assert_eq!(record.top, 100.0);
        assert_eq!(record.height, 0.0);
        assert!(record.left_percent + record.width_percent <= 100.0);
    }

    #[test]
    fn out_of_window_events_are_not_clipped() {
        let day = events(&[(1, "07:00", 60), (2, "22:00", 60)]);
        let layout = layout_day(&day, &window(), 1200.0).unwrap();

        assert_eq!(layout[&1].top, -200.0);
        assert_eq!(layout[&2].top, 1300.0);
        assert_eq!(layout[&2].height, 100.0);
    }

    #[test]
    fn layout_is_idempotent() {
        let day = events(&[
            (1, "09:00", 90),
            (2, "09:30", 30),
            (3, "10:00", 120),
            (4, "11:45", 15),
            (5, "15:00", 60),
        ]);

        let first = layout_day(&day, &window(), 960.0).unwrap();
        let second = layout_day(&day, &window(), 960.0).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), day.len());
    }

    #[test]
    fn widths_stay_within_track() {
        let day = events(&[
            (1, "09:00", 180),
            (2, "09:15", 30),
            (3, "09:20", 60),
            (4, "10:00", 45),
            (5, "11:30", 90),
            (6, "11:30", 15),
        ]);

        for record in layout_day(&day, &window(), 1200.0).unwrap().values() {
            assert!(record.width_percent > 0.0 && record.width_percent <= 100.0);
        }
    }

    #[test]
    fn duplicate_ids_reject_the_batch() {
        let day = events(&[(1, "09:00", 60), (1, "10:00", 60)]);
        assert!(matches!(
            layout_day(&day, &window(), 1200.0),
            Err(LayoutError::DuplicateId(1))
        ));
    }

    #[test]
    fn bad_viewport_rejects_the_batch() {
        let day = events(&[(1, "09:00", 60)]);
        assert!(matches!(
            layout_day(&day, &window(), 0.0),
            Err(LayoutError::InvalidViewport(_))
        ));
    }

    #[test]
    fn layout_types_can_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Event>();
        assert_send_sync::<DayWindow>();
        assert_send_sync::<LayoutRecord>();
        assert_send_sync::<LayoutError>();
    }

    #[test]
    fn empty_day_has_empty_layout() {
        assert!(layout_day(&[], &window(), 1200.0).unwrap().is_empty());
    }
}

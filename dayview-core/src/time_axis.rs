//! Time to track coordinates.
//!
//! Minutes are counted from the opening hour of the [`DayWindow`], so an event
//! starting before the window gets a negative offset. Pixels scale linearly
//! with `viewport_height / window.hours()` and are never clamped.

use crate::error::{LayoutError, LayoutResult};
use crate::event::Event;
use crate::window::DayWindow;

/// A half-open span `[start, end)` in minutes relative to the window opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Interval { start, end }
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Minute span of `event` on the track of `window`.
pub fn to_minutes(event: &Event, window: &DayWindow) -> Interval {
    let start = (i64::from(event.start_hour()) - i64::from(window.start_hour())) * 60
        + i64::from(event.start_minute());
    Interval::new(start, start + i64::from(event.duration))
}

/// Height in pixels of one hour of the window.
pub fn hour_height(window: &DayWindow, viewport_height: f64) -> f64 {
    viewport_height / f64::from(window.hours())
}

/// Pixel coordinate of a minute offset (or pixel length of a minute span).
pub fn to_pixels(minutes: i64, window: &DayWindow, viewport_height: f64) -> f64 {
    (minutes as f64 / 60.0) * hour_height(window, viewport_height)
}

/// Reject viewport heights that would produce a non-finite scale.
pub fn check_viewport(viewport_height: f64) -> LayoutResult<f64> {
    if viewport_height.is_finite() && viewport_height > 0.0 {
        Ok(viewport_height)
    } else {
        Err(LayoutError::InvalidViewport(viewport_height))
    }
}

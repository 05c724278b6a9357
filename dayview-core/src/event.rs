//! Day events as they arrive from the data file.
//!
//! An event only knows its wall-clock start and how long it lasts. The end is
//! always derived, so two events can never disagree about it.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// Identifier of an event, unique within one day.
pub type EventId = i64;

const CLOCK_FORMAT: &str = "%H:%M";

/// A single event on the day track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent", into = "RawEvent")]
pub struct Event {
    pub id: EventId,
    /// Wall-clock start (minutes precision)
    pub start: NaiveTime,
    /// Length in minutes
    pub duration: u32,
}

/// Wire shape of an event: `{ "id": 1, "start": "17:00", "duration": 60 }`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEvent {
    id: EventId,
    start: String,
    duration: i64,
}

impl Event {
    /// Build an event from its wire fields, rejecting a bad start time or a
    /// negative duration.
    pub fn parse(id: EventId, start: &str, duration: i64) -> LayoutResult<Self> {
        let start_time = NaiveTime::parse_from_str(start.trim(), CLOCK_FORMAT).map_err(|_| {
            LayoutError::MalformedStart {
                id,
                start: start.to_string(),
            }
        })?;

        if duration < 0 {
            return Err(LayoutError::NegativeDuration { id, duration });
        }
        let duration = u32::try_from(duration)
            .map_err(|_| LayoutError::DurationTooLong { id, duration })?;

        Ok(Event {
            id,
            start: start_time,
            duration,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    pub fn start_minute(&self) -> u32 {
        self.start.minute()
    }

    /// "HH:MM" of the start time.
    pub fn start_label(&self) -> String {
        self.start.format(CLOCK_FORMAT).to_string()
    }

    /// "HH:MM" of the derived end time. Wraps past midnight.
    pub fn end_label(&self) -> String {
        let end = self.start + Duration::minutes(i64::from(self.duration));
        end.format(CLOCK_FORMAT).to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {} start: {} end: {}",
            self.id,
            self.start_label(),
            self.end_label()
        )
    }
}

impl TryFrom<RawEvent> for Event {
    type Error = LayoutError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Event::parse(raw.id, &raw.start, raw.duration)
    }
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        RawEvent {
            id: event.id,
            start: event.start_label(),
            duration: i64::from(event.duration),
        }
    }
}

//! Error types for dayview.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur while loading events or laying out a day.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid day window {start_hour}..{end_hour}: end hour must be after start hour and at most 24")]
    InvalidWindow { start_hour: u32, end_hour: u32 },

    #[error("Invalid viewport height {0}: must be a positive finite number")]
    InvalidViewport(f64),

    #[error("Event {id}: invalid start time '{start}'. Expected HH:MM")]
    MalformedStart { id: EventId, start: String },

    #[error("Event {id}: duration must not be negative (got {duration})")]
    NegativeDuration { id: EventId, duration: i64 },

    #[error("Event {id}: duration of {duration} minutes is too long")]
    DurationTooLong { id: EventId, duration: i64 },

    #[error("Duplicate event id {0}")]
    DuplicateId(EventId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for dayview operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

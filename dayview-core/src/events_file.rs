//! Loading a day's events from a JSON data file.
//!
//! The file holds an array of `{ "id": 1, "start": "17:00", "duration": 60 }`
//! objects. Every event is validated while it is read; the first bad one fails
//! the whole file.

use std::path::Path;

use crate::error::{LayoutError, LayoutResult};
use crate::event::Event;

pub fn load_events(path: &Path) -> LayoutResult<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    parse_events(&content).map_err(|e| match e {
        LayoutError::Serialization(msg) => {
            LayoutError::Serialization(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

pub fn parse_events(json: &str) -> LayoutResult<Vec<Event>> {
    serde_json::from_str(json).map_err(|e| LayoutError::Serialization(e.to_string()))
}

//! Overlap-aware layout of a day's events.
//!
//! Given the events of one day, a visible hour window and the height of the
//! day track, [`layout_day`] computes where every event's box goes:
//! - `time_axis` maps wall-clock times to minute offsets and pixels
//! - `overlap` finds the events sharing time with a given span
//! - `intensity` sweeps a group of intervals for its busiest moment
//! - `slot` turns that into a column width and offset
//! - `layout` runs all of it for every event

pub mod config;
pub mod error;
pub mod event;
pub mod events_file;
pub mod intensity;
pub mod layout;
pub mod overlap;
pub mod slot;
pub mod time_axis;
pub mod window;

pub use error::{LayoutError, LayoutResult};
pub use event::{Event, EventId};
pub use layout::{LayoutRecord, layout_day};
pub use window::DayWindow;

//! Visible hour range of the day track.

use crate::error::{LayoutError, LayoutResult};

/// The visible range `[start_hour:00, end_hour:00)`.
///
/// The window only sets the pixel scale. Events outside it are positioned
/// outside the viewport, never clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start_hour: u32,
    end_hour: u32,
}

impl DayWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> LayoutResult<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(LayoutError::InvalidWindow {
                start_hour,
                end_hour,
            });
        }

        Ok(DayWindow {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Number of visible hours, always at least 1.
    pub fn hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }
}

impl Default for DayWindow {
    /// 09:00 to 21:00
    fn default() -> Self {
        DayWindow {
            start_hour: 9,
            end_hour: 21,
        }
    }
}

//! Error types for meeting-engine input handling.
//!
//! Resolution itself never fails; only building ranges and parsing schedule
//! documents can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetingError {
    #[error("Invalid time range: end {end} is before start {start}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Schedule parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MeetingError>;

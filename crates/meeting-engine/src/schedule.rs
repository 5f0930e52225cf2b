//! JSON schedule documents: a day's events plus one meeting request.
//!
//! ```rust
//! use meeting_engine::Schedule;
//!
//! let json = r#"{
//!   "events": [{"name": "Review", "when": {"start": 600, "end": 660}, "attendees": ["A"]}],
//!   "request": {"duration": 30, "attendees": ["A"]}
//! }"#;
//! let schedule = Schedule::from_json(json).unwrap();
//! let windows = schedule.resolve();
//! assert_eq!(windows.len(), 2);
//! assert_eq!(windows[0].end(), 600);
//! assert_eq!(windows[1].start(), 660);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{Event, MeetingRequest};
use crate::resolver;
use crate::time_range::TimeRange;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl Schedule {
    /// Parse a schedule document.
    ///
    /// # Errors
    /// Returns `MeetingError::Json` if the document is not valid JSON, does not
    /// match the schema, or contains a range whose end precedes its start.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run [`resolver::query`] on this schedule.
    pub fn resolve(&self) -> Vec<TimeRange> {
        resolver::query(&self.events, &self.request)
    }
}

//! # meeting-engine
//!
//! Deterministic meeting-availability resolution for a single day.
//!
//! Given a day's busy events, each tagged with the people attending, and a
//! meeting request (duration, mandatory attendees, optional attendees), the
//! engine returns every window long enough to hold the meeting. Windows where
//! optional attendees are also free win; otherwise the mandatory-only windows
//! are returned. Times are whole minutes from midnight.
//!
//! ```rust
//! use meeting_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new("Review", TimeRange::from_start_end(600, 660, false), ["A"])];
//! let request = MeetingRequest::new(["A"], 30);
//!
//! let windows = query(&events, &request);
//! assert_eq!(
//!     windows,
//!     vec![
//!         TimeRange::from_start_end(0, 600, false),
//!         TimeRange::from_start_end(660, 1440, false),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — half-open minute ranges and day constants
//! - [`event`] — events, meeting requests, event ordering
//! - [`busy`] — attendee filtering, busy-block merging, gap extraction
//! - [`reconcile`] — nesting optional windows inside mandatory ones
//! - [`resolver`] — the full query
//! - [`schedule`] — JSON schedule documents
//! - [`error`] — Error types

pub mod busy;
pub mod error;
pub mod event;
pub mod reconcile;
pub mod resolver;
pub mod schedule;
pub mod time_range;

pub use busy::{available_ranges, busy_blocks, merge_busy};
pub use error::MeetingError;
pub use event::{event_order, Event, MeetingRequest};
pub use reconcile::nested_within;
pub use resolver::query;
pub use schedule::Schedule;
pub use time_range::{format_minute, TimeRange, MINUTES_PER_DAY};

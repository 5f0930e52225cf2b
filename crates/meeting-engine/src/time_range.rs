//! Half-open minute-of-day ranges.
//!
//! A [`TimeRange`] is `[start, end)` measured in whole minutes from midnight.
//! Zero-length ranges are legal and are used as day-boundary sentinels.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// An immutable half-open interval of minutes, `[start, end)`.
///
/// Invariant: `start <= end`. The checked constructor is [`TimeRange::try_new`];
/// the other constructors treat a reversed range as a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = MeetingError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::try_new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// First minute of the day.
    pub const START_OF_DAY: u32 = 0;
    /// Last minute of the day (inclusive).
    pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;
    /// The full day, `[00:00, 24:00)`.
    pub const WHOLE_DAY: TimeRange =
        TimeRange::from_start_end(Self::START_OF_DAY, Self::END_OF_DAY, true);

    /// Build a range from its endpoints. When `inclusive` is true the `end`
    /// minute itself is included, i.e. the stored end is `end + 1`.
    ///
    /// # Panics
    /// Panics if `end < start`, or if `inclusive` is set and `end` is `u32::MAX`.
    pub const fn from_start_end(start: u32, end: u32, inclusive: bool) -> Self {
        let end = if inclusive {
            match end.checked_add(1) {
                Some(end) => end,
                None => panic!("inclusive end overflows u32"),
            }
        } else {
            end
        };
        assert!(start <= end, "range end precedes start");
        TimeRange { start, end }
    }

    /// Build `[start, start + duration)`.
    ///
    /// # Panics
    /// Panics if `start + duration` overflows `u32`.
    pub const fn from_start_duration(start: u32, duration: u32) -> Self {
        match start.checked_add(duration) {
            Some(end) => TimeRange { start, end },
            None => panic!("range end overflows u32"),
        }
    }

    /// Build `[start, end)`, rejecting `end < start`.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidRange` if the range would be reversed.
    pub fn try_new(start: u32, end: u32) -> Result<Self> {
        if end < start {
            return Err(MeetingError::InvalidRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Length in minutes.
    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The part of `self` inside `window`, treating both edges of `window` as
    /// reachable so zero-length ranges at either edge survive. `None` when
    /// the two do not meet.
    pub fn clipped_to(&self, window: &TimeRange) -> Option<TimeRange> {
        if self.start > window.end || self.end < window.start {
            return None;
        }
        Some(TimeRange {
            start: self.start.max(window.start),
            end: self.end.min(window.end),
        })
    }

    /// Two ranges overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Touching ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when `other` is nested inside `self`.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when `minute` falls inside `[start, end)`.
    pub fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Orders by start only.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Orders by end only.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end)
    }

    /// Composite `(start, end)` key used to sort events before merging.
    pub(crate) const fn sort_key(&self) -> (u32, u32) {
        (self.start, self.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            format_minute(self.start),
            format_minute(self.end)
        )
    }
}

/// Render a minute-of-day as `HH:MM`. Minute 1440 renders as `24:00`.
pub fn format_minute(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

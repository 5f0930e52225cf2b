//! Calendar events and meeting requests.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A busy interval on the calendar and the people it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Label for diagnostics only; resolution never looks at it.
    pub name: String,
    pub when: TimeRange,
    #[serde(default)]
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(name: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// True when at least one of this event's attendees is in `people`.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        // Iterate the smaller set; both are ordered so `contains` is O(log n).
        if self.attendees.len() <= people.len() {
            self.attendees.iter().any(|a| people.contains(a))
        } else {
            people.iter().any(|p| self.attendees.contains(p))
        }
    }
}

/// Orders events by `(when.start, when.end)`.
///
/// The tie-break on end puts a zero-length boundary marker ahead of a real
/// event starting at the same minute.
pub fn event_order(a: &Event, b: &Event) -> Ordering {
    a.when.sort_key().cmp(&b.when.sort_key())
}

/// What the caller wants to schedule.
///
/// `attendees` and `optional_attendees` are expected to be disjoint; this is
/// not checked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Required length of the meeting in minutes.
    pub duration: u32,
    /// People who must be free.
    #[serde(default)]
    pub attendees: BTreeSet<String>,
    /// People who should be free if at all possible.
    #[serde(default)]
    pub optional_attendees: BTreeSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        }
    }

    /// Returns a copy of this request with `person` added as optional.
    pub fn with_optional(mut self, person: impl Into<String>) -> Self {
        self.optional_attendees.insert(person.into());
        self
    }

    /// Mandatory and optional attendees together.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }

    pub fn has_attendees(&self) -> bool {
        !self.attendees.is_empty() || !self.optional_attendees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_sorts_before_event_at_same_start() {
        let sentinel = Event::new("START_OF_DAY", TimeRange::from_start_duration(0, 0), ["a"]);
        let meeting = Event::new("Standup", TimeRange::from_start_duration(0, 30), ["a"]);
        assert_eq!(event_order(&sentinel, &meeting), Ordering::Less);
        assert_eq!(event_order(&meeting, &sentinel), Ordering::Greater);
    }

    #[test]
    fn involves_any_checks_intersection() {
        let e = Event::new("Sync", TimeRange::from_start_duration(60, 30), ["a", "b"]);
        let people: BTreeSet<String> = ["b", "c"].into_iter().map(String::from).collect();
        let strangers: BTreeSet<String> = ["x"].into_iter().map(String::from).collect();
        assert!(e.involves_any(&people));
        assert!(!e.involves_any(&strangers));
        assert!(!e.involves_any(&BTreeSet::new()));
    }
}

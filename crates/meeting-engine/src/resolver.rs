//! Find every window in the day that can hold a requested meeting.
//!
//! Windows where optional attendees are also free are preferred. When no such
//! window fits inside the mandatory-only availability, the mandatory-only
//! windows are returned instead.

use tracing::debug;

use crate::busy::available_ranges;
use crate::event::{event_order, Event, MeetingRequest};
use crate::reconcile::nested_within;
use crate::time_range::TimeRange;

/// Name of the synthetic zero-length event anchoring the start of the day.
pub const START_OF_DAY_EVENT: &str = "START_OF_DAY";
/// Name of the synthetic zero-length event anchoring the end of the day.
pub const END_OF_DAY_EVENT: &str = "END_OF_DAY";

/// Compute the meeting windows for `request` against `events`.
///
/// Every event must satisfy `start <= end`; [`TimeRange`] enforces this when
/// built through its checked constructor or deserialized.
///
/// The result is sorted by start, non-overlapping, and every window is at
/// least `request.duration` minutes long. An unsatisfiable request yields an
/// empty list. A request without any attendee yields the whole day, whatever
/// the calendar holds.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    if !request.has_attendees() {
        debug!("no attendees requested, whole day is free");
        return vec![TimeRange::WHOLE_DAY];
    }

    let everyone = request.all_attendees();
    let mut sorted = Vec::with_capacity(events.len() + 2);
    sorted.extend_from_slice(events);
    sorted.push(Event::new(
        START_OF_DAY_EVENT,
        TimeRange::from_start_duration(TimeRange::START_OF_DAY, 0),
        everyone.iter().cloned(),
    ));
    sorted.push(Event::new(
        END_OF_DAY_EVENT,
        TimeRange::from_start_duration(TimeRange::END_OF_DAY + 1, 0),
        everyone.iter().cloned(),
    ));
    sorted.sort_by(event_order);

    debug!(
        events = events.len(),
        mandatory = request.attendees.len(),
        optional = request.optional_attendees.len(),
        duration = request.duration,
        "resolving meeting request"
    );

    let available = available_ranges(&request.attendees, &sorted, request.duration);
    if request.optional_attendees.is_empty() {
        return available;
    }

    let with_optional = available_ranges(&request.optional_attendees, &sorted, request.duration);
    if available.is_empty() {
        debug!(
            windows = with_optional.len(),
            "no mandatory windows, using optional windows"
        );
        return with_optional;
    }

    let preferred = nested_within(&with_optional, &available);
    debug!(
        mandatory = available.len(),
        optional = with_optional.len(),
        nested = preferred.len(),
        "reconciled optional windows"
    );
    if preferred.is_empty() {
        available
    } else {
        preferred
    }
}

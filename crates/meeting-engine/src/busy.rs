//! Busy-block merging and free-gap extraction for one attendee set.
//!
//! Events are filtered down to those involving the attendee set, merged into
//! non-overlapping busy blocks, then the gaps between consecutive blocks are
//! reported when they are long enough.

use std::collections::BTreeSet;

use tracing::trace;

use crate::event::{event_order, Event};
use crate::time_range::TimeRange;

/// Merge the busy periods of `attendees` from events sorted by
/// [`event_order`].
///
/// Events that involve none of `attendees` are dropped, and the rest are
/// clipped to [`TimeRange::WHOLE_DAY`]; an event lying entirely past midnight
/// contributes nothing. Overlapping or
/// touching intervals are fused into one block spanning the minimum start and
/// maximum end. Returns a sorted list of blocks in which every adjacent pair
/// is separated by a gap of at least one minute.
pub fn merge_busy(attendees: &BTreeSet<String>, sorted_events: &[Event]) -> Vec<TimeRange> {
    debug_assert!(
        sorted_events
            .windows(2)
            .all(|w| event_order(&w[0], &w[1]).is_le()),
        "events must be sorted by (start, end)"
    );

    let mut merged: Vec<TimeRange> = Vec::new();
    for event in sorted_events.iter().filter(|e| e.involves_any(attendees)) {
        let Some(when) = event.when.clipped_to(&TimeRange::WHOLE_DAY) else {
            continue;
        };
        if let Some(last) = merged.last_mut() {
            if when.start() <= last.end() {
                let end = last.end().max(when.end());
                trace!(event = %event.name, block = %last, new_end = end, "merging into busy block");
                *last = TimeRange::from_start_end(last.start(), end, false);
                continue;
            }
        }
        merged.push(when);
    }

    merged
}

/// Sort `events` and merge the busy periods of `attendees`.
///
/// Convenience over [`merge_busy`] for callers holding an unsorted calendar.
pub fn busy_blocks(attendees: &BTreeSet<String>, events: &[Event]) -> Vec<TimeRange> {
    let mut sorted = events.to_vec();
    sorted.sort_by(event_order);
    merge_busy(attendees, &sorted)
}

/// Free ranges of at least `duration` minutes for `attendees`.
///
/// `sorted_events` must already be sorted by [`event_order`] and should carry
/// the day-boundary sentinels, otherwise the time before the first and after
/// the last event is not reported. A gap exactly `duration` long is kept.
pub fn available_ranges(
    attendees: &BTreeSet<String>,
    sorted_events: &[Event],
    duration: u32,
) -> Vec<TimeRange> {
    merge_busy(attendees, sorted_events)
        .windows(2)
        .filter_map(|pair| {
            let (busy, next) = (pair[0], pair[1]);
            let gap = next.start() - busy.end();
            (gap >= duration).then_some(TimeRange::from_start_duration(busy.end(), gap))
        })
        .collect()
}

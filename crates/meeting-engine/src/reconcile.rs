//! Keep only the optional-attendee windows that fit inside a mandatory window.

use crate::time_range::TimeRange;

/// Return every range of `optional` that is fully nested inside some range of
/// `mandatory`, in order.
///
/// Both inputs must be sorted by start and non-overlapping. The scan keeps a
/// single cursor into `mandatory` that only moves forward: a mandatory range
/// ending before the current optional range ends can hold neither it nor any
/// later optional range, so it is skipped for good. Runs in
/// `O(optional + mandatory)`.
pub fn nested_within(optional: &[TimeRange], mandatory: &[TimeRange]) -> Vec<TimeRange> {
    let mut kept = Vec::new();
    let mut cursor = 0;

    for range in optional {
        while cursor < mandatory.len() && mandatory[cursor].end() < range.end() {
            cursor += 1;
        }
        let Some(outer) = mandatory.get(cursor) else {
            break;
        };
        if outer.contains(range) {
            kept.push(*range);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: u32, end: u32) -> TimeRange {
        TimeRange::from_start_end(start, end, false)
    }

    #[test]
    fn partial_overlap_is_not_nested() {
        let mandatory = [r(0, 100), r(200, 300)];
        let optional = [r(50, 150), r(250, 300)];
        assert_eq!(nested_within(&optional, &mandatory), vec![r(250, 300)]);
    }

    #[test]
    fn several_optional_ranges_in_one_mandatory_range() {
        let mandatory = [r(0, 500)];
        let optional = [r(0, 100), r(200, 300), r(400, 500)];
        assert_eq!(nested_within(&optional, &mandatory), optional.to_vec());
    }

    #[test]
    fn mandatory_range_after_a_zero_length_busy_block() {
        // A zero-length busy block at 600 splits the mandatory day in two
        // touching ranges; an optional range starting at 600 belongs to the
        // second one.
        let mandatory = [r(0, 600), r(600, 1440)];
        let optional = [r(600, 700)];
        assert_eq!(nested_within(&optional, &mandatory), vec![r(600, 700)]);
    }

    #[test]
    fn empty_mandatory_keeps_nothing() {
        assert!(nested_within(&[r(0, 10)], &[]).is_empty());
    }
}

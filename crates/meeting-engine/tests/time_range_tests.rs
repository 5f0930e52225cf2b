//! Tests for `TimeRange` construction, relations and ordering.
//!
//! Adjacent ranges (one ends exactly when the other starts) do NOT overlap.

use std::cmp::Ordering;

use meeting_engine::{MeetingError, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false)
}

#[test]
fn inclusive_end_adds_a_minute() {
    let r = TimeRange::from_start_end(540, 599, true);
    assert_eq!(r, range(540, 600));
    assert_eq!(r.duration(), 60);
}

#[test]
fn start_duration_constructor() {
    let r = TimeRange::from_start_duration(600, 45);
    assert_eq!((r.start(), r.end()), (600, 645));
}

#[test]
fn try_new_rejects_reversed_range() {
    let err = TimeRange::try_new(600, 540).unwrap_err();
    assert!(matches!(err, MeetingError::InvalidRange { start: 600, end: 540 }));
    assert!(TimeRange::try_new(600, 600).unwrap().is_empty());
}

#[test]
fn overlapping_ranges() {
    assert!(range(600, 700).overlaps(&range(650, 750)));
    assert!(range(650, 750).overlaps(&range(600, 700)));
    assert!(range(600, 700).overlaps(&range(620, 640)));
}

#[test]
fn adjacent_ranges_do_not_overlap() {
    assert!(!range(600, 660).overlaps(&range(660, 720)));
    assert!(!range(660, 720).overlaps(&range(600, 660)));
}

#[test]
fn zero_length_range_overlaps_nothing_at_its_edge() {
    let marker = TimeRange::from_start_duration(0, 0);
    assert!(!marker.overlaps(&range(0, 60)));
}

#[test]
fn nesting() {
    let outer = range(0, 600);
    assert!(outer.contains(&range(0, 600)));
    assert!(outer.contains(&range(100, 200)));
    assert!(!outer.contains(&range(500, 700)));
    assert!(!range(100, 200).contains(&outer));
}

#[test]
fn point_containment_is_half_open() {
    let r = range(600, 660);
    assert!(r.contains_point(600));
    assert!(r.contains_point(659));
    assert!(!r.contains_point(660));
}

#[test]
fn comparators() {
    let a = range(100, 500);
    let b = range(200, 300);
    assert_eq!(TimeRange::order_by_start(&a, &b), Ordering::Less);
    assert_eq!(TimeRange::order_by_end(&a, &b), Ordering::Greater);
}

#[test]
fn display_uses_clock_time() {
    assert_eq!(range(540, 615).to_string(), "[09:00, 10:15)");
    assert_eq!(TimeRange::WHOLE_DAY.to_string(), "[00:00, 24:00)");
}

#[test]
fn serde_shape_and_validation() {
    let json = serde_json::to_string(&range(60, 90)).unwrap();
    assert_eq!(json, r#"{"start":60,"end":90}"#);

    let back: TimeRange = serde_json::from_str(&json).unwrap();
    assert_eq!(back, range(60, 90));

    let bad = serde_json::from_str::<TimeRange>(r#"{"start":90,"end":60}"#);
    assert!(bad.is_err(), "reversed range must be rejected");
}

use sla_core::analytics::{donut_layout, priority_breakdown};
use sla_core::domain::Priority;
use sla_core::seed;

#[test]
fn breakdown_always_has_four_buckets_in_priority_order() {
    let breakdown = priority_breakdown(&[]);
    assert_eq!(breakdown.len(), 4);
    let order: Vec<Priority> = breakdown.iter().map(|b| b.priority).collect();
    assert_eq!(
        order,
        vec![Priority::P1, Priority::P2, Priority::P3, Priority::P4]
    );
    for bucket in &breakdown {
        assert_eq!(bucket.count, 0);
        assert!(bucket.incident_ids.is_empty());
    }
}

#[test]
fn breakdown_counts_reconcile_to_incident_total() {
    let incidents = seed::incidents();
    let breakdown = priority_breakdown(&incidents);

    let sum: i64 = breakdown.iter().map(|b| b.count).sum();
    assert_eq!(sum, incidents.len() as i64);

    for bucket in &breakdown {
        assert_eq!(bucket.count, bucket.incident_ids.len() as i64);
        for id in &bucket.incident_ids {
            let inc = incidents.iter().find(|i| i.id == *id).expect("known id");
            assert_eq!(inc.priority, bucket.priority);
        }
    }

    let p1 = breakdown.iter().find(|b| b.priority == Priority::P1).unwrap();
    assert_eq!(p1.count, 3);
    assert_eq!(p1.incident_ids, vec!["INC001", "INC005", "INC007"]);

    let p4 = breakdown.iter().find(|b| b.priority == Priority::P4).unwrap();
    assert_eq!(p4.count, 0);
}

#[test]
fn breakdown_for_a_two_incident_view() {
    let incidents: Vec<_> = seed::incidents()
        .into_iter()
        .filter(|i| i.id == "INC001" || i.id == "INC002")
        .collect();
    let breakdown = priority_breakdown(&incidents);

    let counts: Vec<i64> = breakdown.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![1, 1, 0, 0]);
    assert_eq!(breakdown[0].incident_ids, vec!["INC001"]);
    assert_eq!(breakdown[1].incident_ids, vec!["INC002"]);
}

#[test]
fn donut_is_none_for_all_zero_input() {
    assert!(donut_layout(&[]).is_none());
    assert!(donut_layout(&[("Critical", 0), ("High", 0)]).is_none());
}

#[test]
fn donut_segments_partition_the_circle() {
    let layout = donut_layout(&[("Critical", 3), ("High", 2), ("Medium", 2), ("Low", 0)])
        .expect("non-zero total");

    assert_eq!(layout.total, 7);
    // One segment per category, even empty ones.
    assert_eq!(layout.segments.len(), 4);

    assert_eq!(layout.segments[0].start_angle, 0.0);
    for pair in layout.segments.windows(2) {
        assert_eq!(pair[0].end_angle, pair[1].start_angle);
    }
    assert_eq!(layout.segments.last().unwrap().end_angle, 360.0);

    // The empty bucket keeps its place as a zero-length arc.
    let low = &layout.segments[3];
    assert_eq!(low.value, 0);
    assert_eq!(low.start_angle, low.end_angle);
    assert_eq!(low.percentage, 0.0);

    let pct_sum: f64 = layout.segments.iter().map(|s| s.percentage).sum();
    assert!((pct_sum - 100.0).abs() < 1e-9);
}

#[test]
fn donut_single_segment_spans_full_circle() {
    let layout = donut_layout(&[("Critical", 5)]).expect("non-zero total");
    assert_eq!(layout.segments.len(), 1);
    let seg = &layout.segments[0];
    assert_eq!(seg.start_angle, 0.0);
    assert_eq!(seg.end_angle, 360.0);
    assert_eq!(seg.percentage, 100.0);
}

#[test]
fn donut_angles_follow_cumulative_counts() {
    let layout = donut_layout(&[("a", 1), ("b", 1), ("c", 1)]).expect("non-zero total");
    let ends: Vec<f64> = layout.segments.iter().map(|s| s.end_angle).collect();
    assert_eq!(ends[0], 360.0 / 3.0);
    assert_eq!(ends[1], 360.0 * 2.0 / 3.0);
    assert_eq!(ends[2], 360.0);
}

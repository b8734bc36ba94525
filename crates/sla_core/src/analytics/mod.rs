use serde::Serialize;

use crate::domain::{Incident, Priority};

/// One bucket of the priority breakdown. `incident_ids` carries the drilldown
/// so a caller can go from a count straight to the incidents behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: i64,
    pub incident_ids: Vec<String>,
}

/// Counts incidents per priority. Always returns exactly four buckets in
/// P1..P4 order, including zero buckets, so rows never shift between renders.
pub fn priority_breakdown(incidents: &[Incident]) -> Vec<PriorityCount> {
    Priority::ALL
        .iter()
        .map(|p| {
            let incident_ids: Vec<String> = incidents
                .iter()
                .filter(|i| i.priority == *p)
                .map(|i| i.id.clone())
                .collect();
            PriorityCount {
                priority: *p,
                count: incident_ids.len() as i64,
                incident_ids,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutSegment {
    pub label: String,
    pub value: i64,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutLayout {
    pub total: i64,
    pub segments: Vec<DonutSegment>,
}

/// Lays out a donut chart from labeled counts. Every category keeps a
/// segment in input order; a zero count yields a zero-length arc (start and
/// end coincide) so renderers can skip it without reindexing. Angles are
/// derived from cumulative integer counts, so adjacent segments share an
/// edge exactly and the last non-empty segment closes at 360 degrees.
/// Returns `None` when the total is zero, which renders as an empty state.
pub fn donut_layout(items: &[(&str, i64)]) -> Option<DonutLayout> {
    let total: i64 = items.iter().map(|(_, v)| v).sum();
    if total == 0 {
        return None;
    }

    let mut segments = Vec::new();
    let mut cumulative: i64 = 0;
    for (label, value) in items {
        let start_angle = 360.0 * cumulative as f64 / total as f64;
        cumulative += value;
        let end_angle = 360.0 * cumulative as f64 / total as f64;
        segments.push(DonutSegment {
            label: label.to_string(),
            value: *value,
            percentage: 100.0 * *value as f64 / total as f64,
            start_angle,
            end_angle,
        });
    }

    Some(DonutLayout { total, segments })
}

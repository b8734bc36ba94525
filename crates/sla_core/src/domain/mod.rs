use serde::{Deserialize, Serialize};
use std::fmt;

/// Incident priority, ordered by severity: `P1` (critical) sorts before `P4`
/// (low). The string form (`"P1"`..`"P4"`) is what prompts and the wire use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    /// All priorities in fixed severity order. Aggregations iterate this so
    /// zero-count buckets are never omitted.
    pub const ALL: [Priority; 4] = [Priority::P1, Priority::P2, Priority::P3, Priority::P4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::P4 => "P4",
        }
    }

    /// Operator-facing label shown next to the short code.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::P1 => "Critical",
            Priority::P2 => "High",
            Priority::P3 => "Medium",
            Priority::P4 => "Low",
        }
    }

}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable filter dimension over incidents (business domain).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub author: String,
    pub timestamp: String,
    pub text: String,
}

/// Canonical incident representation held by the store.
///
/// Notes:
/// - `sla_breach_time`, `last_update` and comment timestamps are opaque
///   human-readable strings; nothing parses or validates them as time.
/// - `ai_summary` and `summarizing` are the only fields mutated after seeding,
///   and only through the store's id-keyed merge operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub portfolio_id: String,
    pub sla_breach_time: String,
    pub affected_services: Vec<String>,
    pub last_update: String,
    pub comments: Vec<Comment>,
    pub ai_summary: Option<String>,
    pub summarizing: bool,
}

/// Reference document the model may cite as relevant to an incident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnowledgeArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
}

/// A corpus article echoed back by the model with a generated one-sentence
/// relevance justification. Article ids are trusted as-is, not re-verified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestedArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub relevance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineStep {
    pub step: String,
    pub description: String,
}

/// Structured output of a full per-incident analysis.
///
/// Invariant: `suggested_articles` holds at most 2 entries; the parse boundary
/// truncates anything longer before callers see it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IncidentAnalysis {
    pub next_steps: Vec<String>,
    pub root_cause: String,
    pub suggested_articles: Vec<SuggestedArticle>,
    pub timeline: Vec<TimelineStep>,
}

/// Whole-view summary derived from the full visible incident set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub situation_report: String,
    pub focus_areas: Vec<String>,
}

use std::sync::Mutex;

use crate::domain::Incident;
use crate::error::AppError;

/// Portfolio scoping applied to reads. `All` keeps every incident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioFilter {
    All,
    Only(String),
}

impl PortfolioFilter {
    pub fn matches(&self, incident: &Incident) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Only(id) => incident.portfolio_id == *id,
        }
    }
}

/// In-memory incident collection shared between the dashboard and the
/// enrichment sweep. All mutation goes through merge-by-id operations so a
/// settlement that arrives after the caller's view changed still lands on the
/// right incident.
#[derive(Debug)]
pub struct IncidentStore {
    inner: Mutex<Vec<Incident>>,
}

impl IncidentStore {
    /// Builds a store from an initial collection. Ids must be unique.
    pub fn new(incidents: Vec<Incident>) -> Result<Self, AppError> {
        let mut seen: Vec<&str> = Vec::with_capacity(incidents.len());
        for inc in &incidents {
            if seen.contains(&inc.id.as_str()) {
                return Err(AppError::new(
                    "STORE_DUPLICATE_ID",
                    format!("duplicate incident id: {}", inc.id),
                ));
            }
            seen.push(&inc.id);
        }
        Ok(Self {
            inner: Mutex::new(incidents),
        })
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone of the full collection, in insertion order.
    pub fn snapshot(&self) -> Vec<Incident> {
        self.inner.lock().unwrap().clone()
    }

    /// Clone of the incidents the given filter keeps, in insertion order.
    pub fn visible(&self, filter: &PortfolioFilter) -> Vec<Incident> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Incident> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }

    /// Marks one incident as having a summary request in flight. Returns
    /// false when the incident is unknown, already summarized or already in
    /// flight, so the caller skips dispatch.
    pub fn begin_summary(&self, id: &str) -> bool {
        let mut incidents = self.inner.lock().unwrap();
        match incidents.iter_mut().find(|i| i.id == id) {
            Some(inc) if inc.ai_summary.is_none() && !inc.summarizing => {
                inc.summarizing = true;
                true
            }
            _ => false,
        }
    }

    /// Same test-and-mark as `begin_summary` for a whole candidate list under
    /// one lock acquisition. Two overlapping sweeps therefore never dispatch
    /// the same incident twice. Returns the ids actually marked, in input
    /// order.
    pub fn begin_summaries(&self, ids: &[String]) -> Vec<String> {
        let mut incidents = self.inner.lock().unwrap();
        let mut marked = Vec::new();
        for id in ids {
            if let Some(inc) = incidents.iter_mut().find(|i| i.id == *id) {
                if inc.ai_summary.is_none() && !inc.summarizing {
                    inc.summarizing = true;
                    marked.push(id.clone());
                }
            }
        }
        marked
    }

    /// Settles a summary request: stores the text and clears the in-flight
    /// flag. Keyed by id, so it lands correctly even if the visible set
    /// changed while the request was outstanding.
    pub fn apply_summary(&self, id: &str, summary: String) -> Result<(), AppError> {
        let mut incidents = self.inner.lock().unwrap();
        match incidents.iter_mut().find(|i| i.id == id) {
            Some(inc) => {
                inc.ai_summary = Some(summary);
                inc.summarizing = false;
                Ok(())
            }
            None => Err(incident_not_found(id)),
        }
    }

    /// Clears the in-flight flag without storing a summary, leaving the
    /// incident eligible for a later sweep.
    pub fn clear_summary_flag(&self, id: &str) -> Result<(), AppError> {
        let mut incidents = self.inner.lock().unwrap();
        match incidents.iter_mut().find(|i| i.id == id) {
            Some(inc) => {
                inc.summarizing = false;
                Ok(())
            }
            None => Err(incident_not_found(id)),
        }
    }
}

fn incident_not_found(id: &str) -> AppError {
    AppError::new(
        "STORE_INCIDENT_NOT_FOUND",
        format!("no incident with id: {}", id),
    )
}

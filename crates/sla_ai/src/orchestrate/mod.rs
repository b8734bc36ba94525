use log::{debug, error, info};
use sla_core::domain::{IncidentAnalysis, KnowledgeArticle};
use sla_core::error::AppError;
use sla_core::store::IncidentStore;

use crate::enrich;
use crate::llm::Llm;

/// Marks every eligible candidate as in flight and returns the ids to
/// dispatch. Marking happens inside the store under one lock, so a second
/// sweep planned over an overlapping view gets an empty plan instead of
/// duplicate dispatches.
pub fn plan_summary_refresh(store: &IncidentStore, visible_ids: &[String]) -> Vec<String> {
    store.begin_summaries(visible_ids)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    pub dispatched: Vec<String>,
}

/// Plans and settles one summary sweep over the given visible ids.
///
/// Settlement is keyed by incident id, never by view position: a sweep that
/// outlives the view it was planned from still lands its summaries on the
/// right incidents. Per-incident generation never fails, so every dispatched
/// id settles with either a real summary or the fixed placeholder.
pub fn run_summary_sweep(
    store: &IncidentStore,
    llm: &dyn Llm,
    visible_ids: &[String],
) -> Result<SweepOutcome, AppError> {
    let dispatched = plan_summary_refresh(store, visible_ids);
    info!(
        "summary sweep dispatching {} of {} visible incidents",
        dispatched.len(),
        visible_ids.len()
    );

    for id in &dispatched {
        let incident = store.get(id).ok_or_else(|| {
            AppError::new("STORE_INCIDENT_NOT_FOUND", format!("no incident with id: {id}"))
        })?;
        let summary = enrich::summarize_incident(llm, &incident);
        store.apply_summary(id, summary)?;
    }

    Ok(SweepOutcome { dispatched })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Loading,
    Ready(IncidentAnalysis),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTab {
    Triage,
    Research,
    Timeline,
    Summary,
}

/// Feedback latches on first submission and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Pending,
    Helpful,
    NotHelpful,
}

/// The executive summary is fetched lazily, the first time the Summary tab
/// is opened. Generation never fails, so there is no error variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecSummaryState {
    NotRequested,
    Loading,
    Ready(String),
}

/// A fetch the panel wants performed. The caller runs it (usually via
/// `execute_directive`) and reports back through the settlement methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDirective {
    Analysis { incident_id: String },
    ExecSummary { incident_id: String },
}

/// State machine behind the per-incident recommendation panel.
///
/// Settlements carry the incident id they were fetched for; a settlement
/// whose id no longer matches the focused incident is stale and is dropped.
/// In-flight fetches are never cancelled, so refocusing quickly simply makes
/// the older settlement stale.
pub struct RecommendationPanel {
    incident_id: Option<String>,
    analysis: AnalysisState,
    tab: PanelTab,
    feedback: Feedback,
    exec_summary: ExecSummaryState,
}

impl RecommendationPanel {
    pub fn new() -> Self {
        Self {
            incident_id: None,
            analysis: AnalysisState::Idle,
            tab: PanelTab::Triage,
            feedback: Feedback::Pending,
            exec_summary: ExecSummaryState::NotRequested,
        }
    }

    /// Focus an incident and ask for its analysis. Everything resets: tab
    /// back to Triage, feedback back to Pending, executive summary cleared.
    /// Refocusing the already-focused incident is a no-op.
    pub fn focus_incident(&mut self, incident_id: &str) -> Option<FetchDirective> {
        if self.incident_id.as_deref() == Some(incident_id) {
            return None;
        }
        self.incident_id = Some(incident_id.to_string());
        self.analysis = AnalysisState::Loading;
        self.tab = PanelTab::Triage;
        self.feedback = Feedback::Pending;
        self.exec_summary = ExecSummaryState::NotRequested;
        Some(FetchDirective::Analysis {
            incident_id: incident_id.to_string(),
        })
    }

    pub fn close(&mut self) {
        *self = Self::new();
    }

    pub fn analysis_ready(&mut self, incident_id: &str, analysis: IncidentAnalysis) {
        if self.incident_id.as_deref() != Some(incident_id) {
            debug!("dropping stale analysis settlement for {incident_id}");
            return;
        }
        self.analysis = AnalysisState::Ready(analysis);
    }

    pub fn analysis_failed(&mut self, incident_id: &str, message: &str) {
        if self.incident_id.as_deref() != Some(incident_id) {
            debug!("dropping stale analysis failure for {incident_id}");
            return;
        }
        self.analysis = AnalysisState::Error(message.to_string());
    }

    pub fn exec_summary_ready(&mut self, incident_id: &str, summary: String) {
        if self.incident_id.as_deref() != Some(incident_id) {
            debug!("dropping stale executive summary for {incident_id}");
            return;
        }
        self.exec_summary = ExecSummaryState::Ready(summary);
    }

    /// Switch tabs. Tabs exist only once an analysis is ready; before that
    /// the call changes nothing. Opening the Summary tab for the first time
    /// kicks off the executive summary fetch.
    pub fn select_tab(&mut self, tab: PanelTab) -> Option<FetchDirective> {
        if !matches!(self.analysis, AnalysisState::Ready(_)) {
            return None;
        }
        self.tab = tab;
        if tab == PanelTab::Summary && self.exec_summary == ExecSummaryState::NotRequested {
            if let Some(id) = &self.incident_id {
                self.exec_summary = ExecSummaryState::Loading;
                return Some(FetchDirective::ExecSummary {
                    incident_id: id.clone(),
                });
            }
        }
        None
    }

    /// Record whether the analysis helped. Only accepted while an analysis
    /// is shown and no feedback has been given yet; returns whether the
    /// submission was taken.
    pub fn record_feedback(&mut self, helpful: bool) -> bool {
        if !matches!(self.analysis, AnalysisState::Ready(_)) || self.feedback != Feedback::Pending
        {
            return false;
        }
        self.feedback = if helpful {
            Feedback::Helpful
        } else {
            Feedback::NotHelpful
        };
        true
    }

    pub fn incident_id(&self) -> Option<&str> {
        self.incident_id.as_deref()
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    pub fn tab(&self) -> PanelTab {
        self.tab
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn exec_summary(&self) -> &ExecSummaryState {
        &self.exec_summary
    }
}

impl Default for RecommendationPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one panel fetch and settle it. Analysis failures land in the panel as
/// an error state rather than propagating; only a missing incident is a hard
/// error here.
pub fn execute_directive(
    panel: &mut RecommendationPanel,
    store: &IncidentStore,
    llm: &dyn Llm,
    corpus: &[KnowledgeArticle],
    directive: &FetchDirective,
) -> Result<(), AppError> {
    match directive {
        FetchDirective::Analysis { incident_id } => {
            let incident = store.get(incident_id).ok_or_else(|| {
                AppError::new(
                    "STORE_INCIDENT_NOT_FOUND",
                    format!("no incident with id: {incident_id}"),
                )
            })?;
            match enrich::analyze_incident(llm, &incident, corpus) {
                Ok(analysis) => panel.analysis_ready(incident_id, analysis),
                Err(e) => {
                    error!("incident analysis failed for {incident_id}: {e}");
                    panel.analysis_failed(incident_id, "Failed to fetch AI analysis.");
                }
            }
        }
        FetchDirective::ExecSummary { incident_id } => {
            let incident = store.get(incident_id).ok_or_else(|| {
                AppError::new(
                    "STORE_INCIDENT_NOT_FOUND",
                    format!("no incident with id: {incident_id}"),
                )
            })?;
            let summary = enrich::executive_summary(llm, &incident);
            panel.exec_summary_ready(incident_id, summary);
        }
    }
    Ok(())
}

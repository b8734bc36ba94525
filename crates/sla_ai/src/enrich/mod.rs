use log::warn;
use sla_core::domain::{DashboardSummary, Incident, IncidentAnalysis, KnowledgeArticle};
use sla_core::error::AppError;

use crate::llm::Llm;
use crate::schema::ResponseSchema;

mod prompts;

/// Suggested articles are capped after parsing; the model is asked for up to
/// two but the cap is enforced here rather than trusted.
const MAX_SUGGESTED_ARTICLES: usize = 2;

fn analysis_schema() -> ResponseSchema {
    ResponseSchema::object(
        vec![
            (
                "nextSteps",
                ResponseSchema::array(ResponseSchema::string()).with_description(
                    "A list of 2-3 concrete actions the on-call engineer should take right now.",
                ),
            ),
            (
                "rootCause",
                ResponseSchema::string()
                    .with_description("A brief analysis of the most likely root cause."),
            ),
            (
                "suggestedArticles",
                ResponseSchema::array(ResponseSchema::object(
                    vec![
                        (
                            "id",
                            ResponseSchema::string()
                                .with_description("The ID of the suggested knowledge article."),
                        ),
                        (
                            "title",
                            ResponseSchema::string()
                                .with_description("The title of the knowledge article."),
                        ),
                        (
                            "summary",
                            ResponseSchema::string().with_description(
                                "The original summary of the knowledge article.",
                            ),
                        ),
                        (
                            "relevance",
                            ResponseSchema::string().with_description(
                                "A brief, one-sentence explanation of *why* this article is relevant to the current incident.",
                            ),
                        ),
                    ],
                    &["id", "title", "summary", "relevance"],
                ))
                .with_description(
                    "A list of up to 2 relevant knowledge articles from the provided list, including a justification for their relevance.",
                ),
            ),
            (
                "timeline",
                ResponseSchema::array(ResponseSchema::object(
                    vec![
                        (
                            "step",
                            ResponseSchema::string().with_description(
                                "A short label for the timeline event (e.g., \"Initial Report\").",
                            ),
                        ),
                        (
                            "description",
                            ResponseSchema::string().with_description(
                                "A brief description of what happened at this step.",
                            ),
                        ),
                    ],
                    &["step", "description"],
                ))
                .with_description(
                    "A brief, reconstructed timeline of the incident based on the description.",
                ),
            ),
        ],
        &["nextSteps", "rootCause", "suggestedArticles", "timeline"],
    )
}

fn dashboard_schema() -> ResponseSchema {
    ResponseSchema::object(
        vec![
            (
                "situationReport",
                ResponseSchema::string().with_description(
                    "A 1-2 sentence summary of the overall incident situation.",
                ),
            ),
            (
                "focusAreas",
                ResponseSchema::array(ResponseSchema::string()).with_description(
                    "A list of 2-3 specific incident titles or themes that require immediate attention.",
                ),
            ),
        ],
        &["situationReport", "focusAreas"],
    )
}

/// Full structured analysis for the recommendation panel. Unlike the summary
/// operations this one fails hard: the panel renders either a complete
/// analysis or an error, never partial data.
pub fn analyze_incident(
    llm: &dyn Llm,
    incident: &Incident,
    corpus: &[KnowledgeArticle],
) -> Result<IncidentAnalysis, AppError> {
    let prompt = prompts::analysis_prompt(incident, corpus);
    let schema = analysis_schema();

    let raw = llm.generate(&prompt, Some(&schema)).map_err(|e| {
        AppError::new("AI_ANALYSIS_FAILED", "Failed to generate incident analysis")
            .with_details(e.to_string())
            .with_retryable(e.retryable)
    })?;

    let mut analysis: IncidentAnalysis = serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            "AI_ANALYSIS_FAILED",
            "Incident analysis was not valid JSON",
        )
        .with_details(e.to_string())
    })?;

    analysis.suggested_articles.truncate(MAX_SUGGESTED_ARTICLES);
    Ok(analysis)
}

/// One-sentence action summary for the incident list. Never fails; a
/// generation error degrades to a fixed placeholder so the sweep always
/// settles every dispatched incident.
pub fn summarize_incident(llm: &dyn Llm, incident: &Incident) -> String {
    let prompt = prompts::one_line_summary_prompt(incident);
    match llm.generate(&prompt, None) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("one-line summary failed for {}: {e}", incident.id);
            "Could not generate summary.".to_string()
        }
    }
}

/// Non-technical briefing for leadership. Same never-fail policy as
/// `summarize_incident`.
pub fn executive_summary(llm: &dyn Llm, incident: &Incident) -> String {
    let prompt = prompts::executive_summary_prompt(incident);
    match llm.generate(&prompt, None) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("executive summary failed for {}: {e}", incident.id);
            "Could not generate executive summary.".to_string()
        }
    }
}

fn all_clear_summary() -> DashboardSummary {
    DashboardSummary {
        situation_report: "All systems are green. No open incidents.".to_string(),
        focus_areas: vec!["Monitor system health".to_string()],
    }
}

fn degraded_summary() -> DashboardSummary {
    DashboardSummary {
        situation_report: "Could not generate AI summary. Please check API status.".to_string(),
        focus_areas: vec!["Manual incident review required".to_string()],
    }
}

/// Whole-view situation report. An empty view short-circuits to an all-clear
/// without calling the provider; failures and malformed replies degrade to a
/// fixed placeholder, so the dashboard always has something to show.
pub fn dashboard_summary(llm: &dyn Llm, incidents: &[Incident]) -> DashboardSummary {
    if incidents.is_empty() {
        return all_clear_summary();
    }

    let prompt = prompts::dashboard_summary_prompt(incidents);
    let schema = dashboard_schema();

    match llm.generate(&prompt, Some(&schema)) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("dashboard summary was not valid JSON: {e}");
                degraded_summary()
            }
        },
        Err(e) => {
            warn!("dashboard summary failed: {e}");
            degraded_summary()
        }
    }
}

use std::cell::RefCell;

use pretty_assertions::assert_eq;
use sla_ai::enrich::{analyze_incident, dashboard_summary, executive_summary, summarize_incident};
use sla_ai::llm::Llm;
use sla_ai::schema::ResponseSchema;
use sla_core::error::AppError;
use sla_core::seed;

const ANALYSIS_JSON: &str = r#"{
  "nextSteps": [
    "Check the certificate chain on the authentication gateway.",
    "Prepare a rollback of the latest certificate update."
  ],
  "rootCause": "An expired intermediate certificate is breaking the SSL handshake.",
  "suggestedArticles": [
    {
      "id": "KB00101",
      "title": "Troubleshooting SSL Handshake Errors",
      "summary": "Common causes and resolution steps for SSL/TLS handshake failures.",
      "relevance": "The incident reports SSL handshake errors after a certificate change."
    },
    {
      "id": "KB00102",
      "title": "Rolling Back a Production Deployment",
      "summary": "Standard operating procedure for safely rolling back a failed deployment.",
      "relevance": "Rolling back the certificate push is the likely mitigation."
    },
    {
      "id": "KB00301",
      "title": "Resolving Data Warehouse Connectivity Issues",
      "summary": "Checklist for troubleshooting network connectivity problems.",
      "relevance": "Included only to exercise the article cap."
    }
  ],
  "timeline": [
    { "step": "Initial Report", "description": "Monitoring flagged a 5xx spike on the Auth API." },
    { "step": "Escalation", "description": "The on-call engineer confirmed SSL errors and raised severity." }
  ]
}"#;

struct CannedLlm {
    reply: &'static str,
}

impl Llm for CannedLlm {
    fn generate(&self, _prompt: &str, _schema: Option<&ResponseSchema>) -> Result<String, AppError> {
        Ok(self.reply.to_string())
    }
}

struct FailingLlm;

impl Llm for FailingLlm {
    fn generate(&self, _prompt: &str, _schema: Option<&ResponseSchema>) -> Result<String, AppError> {
        Err(
            AppError::new("AI_GENERATE_FAILED", "Failed to call generateContent endpoint")
                .with_retryable(true),
        )
    }
}

/// Records every call so tests can assert how operations talk to the
/// provider, not just what they return.
struct RecordingLlm {
    reply: &'static str,
    prompts: RefCell<Vec<String>>,
    structured: RefCell<Vec<bool>>,
}

impl RecordingLlm {
    fn new(reply: &'static str) -> Self {
        Self {
            reply,
            prompts: RefCell::new(Vec::new()),
            structured: RefCell::new(Vec::new()),
        }
    }
}

impl Llm for RecordingLlm {
    fn generate(&self, prompt: &str, schema: Option<&ResponseSchema>) -> Result<String, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.structured.borrow_mut().push(schema.is_some());
        Ok(self.reply.to_string())
    }
}

#[test]
fn analysis_parses_structured_reply_and_caps_articles_at_two() {
    let incidents = seed::incidents();
    let corpus = seed::knowledge_articles();
    let llm = CannedLlm {
        reply: ANALYSIS_JSON,
    };

    let analysis = analyze_incident(&llm, &incidents[0], &corpus).expect("analysis");

    assert_eq!(analysis.next_steps.len(), 2);
    assert_eq!(
        analysis.root_cause,
        "An expired intermediate certificate is breaking the SSL handshake."
    );
    // The provider returned three articles; only two survive.
    assert_eq!(analysis.suggested_articles.len(), 2);
    assert_eq!(analysis.suggested_articles[0].id, "KB00101");
    assert_eq!(analysis.suggested_articles[1].id, "KB00102");
    assert_eq!(analysis.timeline.len(), 2);
    assert_eq!(analysis.timeline[0].step, "Initial Report");
}

#[test]
fn analysis_fails_hard_on_transport_and_keeps_retryable() {
    let incidents = seed::incidents();
    let corpus = seed::knowledge_articles();

    let err = analyze_incident(&FailingLlm, &incidents[0], &corpus).expect_err("hard failure");
    assert_eq!(err.code, "AI_ANALYSIS_FAILED");
    assert!(err.retryable);
}

#[test]
fn analysis_fails_hard_on_malformed_reply() {
    let incidents = seed::incidents();
    let corpus = seed::knowledge_articles();
    let llm = CannedLlm {
        reply: "Sure! Here is my analysis as prose instead of JSON.",
    };

    let err = analyze_incident(&llm, &incidents[0], &corpus).expect_err("parse failure");
    assert_eq!(err.code, "AI_ANALYSIS_FAILED");
    assert!(!err.retryable);
}

#[test]
fn one_line_summary_trims_and_falls_back() {
    let incidents = seed::incidents();
    let llm = CannedLlm {
        reply: "  Investigate the SSL certificate on the gateway.\n",
    };

    assert_eq!(
        summarize_incident(&llm, &incidents[0]),
        "Investigate the SSL certificate on the gateway."
    );
    assert_eq!(
        summarize_incident(&FailingLlm, &incidents[0]),
        "Could not generate summary."
    );
}

#[test]
fn executive_summary_trims_and_falls_back() {
    let incidents = seed::incidents();
    let llm = CannedLlm {
        reply: "Members cannot log in. The team found the cause and is fixing it.\n",
    };

    assert_eq!(
        executive_summary(&llm, &incidents[0]),
        "Members cannot log in. The team found the cause and is fixing it."
    );
    assert_eq!(
        executive_summary(&FailingLlm, &incidents[0]),
        "Could not generate executive summary."
    );
}

#[test]
fn dashboard_summary_for_empty_view_never_calls_the_provider() {
    let llm = RecordingLlm::new("should never be used");

    let summary = dashboard_summary(&llm, &[]);

    assert_eq!(summary.situation_report, "All systems are green. No open incidents.");
    assert_eq!(summary.focus_areas, vec!["Monitor system health".to_string()]);
    assert!(llm.prompts.borrow().is_empty());
}

#[test]
fn dashboard_summary_parses_reply() {
    let incidents = seed::incidents();
    let llm = CannedLlm {
        reply: r#"{
            "situationReport": "Seven incidents are open; three are critical.",
            "focusAreas": ["Authentication gateway", "Payment processing"]
        }"#,
    };

    let summary = dashboard_summary(&llm, &incidents);
    assert_eq!(
        summary.situation_report,
        "Seven incidents are open; three are critical."
    );
    assert_eq!(summary.focus_areas.len(), 2);
}

#[test]
fn dashboard_summary_degrades_on_failure_or_malformed_reply() {
    let incidents = seed::incidents();

    let degraded = dashboard_summary(&FailingLlm, &incidents);
    assert_eq!(
        degraded.situation_report,
        "Could not generate AI summary. Please check API status."
    );
    assert_eq!(
        degraded.focus_areas,
        vec!["Manual incident review required".to_string()]
    );

    let llm = CannedLlm { reply: "not json" };
    let degraded = dashboard_summary(&llm, &incidents);
    assert_eq!(
        degraded.situation_report,
        "Could not generate AI summary. Please check API status."
    );
}

#[test]
fn only_structured_operations_send_a_schema() {
    let incidents = seed::incidents();
    let corpus = seed::knowledge_articles();

    let llm = RecordingLlm::new(ANALYSIS_JSON);
    analyze_incident(&llm, &incidents[0], &corpus).expect("analysis");
    assert_eq!(*llm.structured.borrow(), vec![true]);

    let llm = RecordingLlm::new("One line.");
    summarize_incident(&llm, &incidents[0]);
    executive_summary(&llm, &incidents[0]);
    assert_eq!(*llm.structured.borrow(), vec![false, false]);

    let llm = RecordingLlm::new(r#"{"situationReport": "ok", "focusAreas": []}"#);
    dashboard_summary(&llm, &incidents);
    assert_eq!(*llm.structured.borrow(), vec![true]);
}

#[test]
fn dashboard_prompt_reflects_the_visible_set_only() {
    let incidents: Vec<_> = seed::incidents()
        .into_iter()
        .filter(|i| i.portfolio_id == "digital-channels")
        .collect();
    let llm = RecordingLlm::new(r#"{"situationReport": "ok", "focusAreas": []}"#);

    dashboard_summary(&llm, &incidents);

    let prompts = llm.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("There are 2 total incidents, and 2 of them are P1 (Critical)."));
    assert!(prompts[0].contains("Mobile App Login Failure"));
    assert!(!prompts[0].contains("Claim Processing Delay"));
}

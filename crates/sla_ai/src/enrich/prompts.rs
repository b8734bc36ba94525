use sla_core::domain::{Comment, Incident, KnowledgeArticle, Priority};

fn corpus_block(corpus: &[KnowledgeArticle]) -> String {
    if corpus.is_empty() {
        return "(none)".to_string();
    }
    corpus
        .iter()
        .map(|kb| format!("- ID: {}, Title: \"{}\", Summary: \"{}\"", kb.id, kb.title, kb.summary))
        .collect::<Vec<_>>()
        .join("\n")
}

fn comment_block(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return "(none)".to_string();
    }
    comments
        .iter()
        .map(|c| format!("- {} ({}): {}", c.timestamp, c.author, c.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn analysis_prompt(incident: &Incident, corpus: &[KnowledgeArticle]) -> String {
    format!(
        r#"You are an expert Site Reliability Engineer (SRE) for an IT operations team.
Your task is to analyze an IT incident and provide a structured JSON response to help the on-call engineer.

**Incident Details:**
- Title: {title}
- Priority: {priority}
- Description: {description}
- Affected Services: {services}
- Last Known Update: {last_update}

**Available Knowledge Articles:**
{corpus}

**Instructions:**
1. **Analyze the incident.**
2. **Formulate Immediate Next Steps:** Provide a list of 2-3 concrete actions.
3. **Identify Potential Root Cause:** Give a brief analysis.
4. **Suggest Knowledge Articles:** From the list provided, identify up to 2 of the MOST relevant articles. For each suggested article, you MUST include its id, title, summary, and a new "relevance" field explaining in one sentence why it is useful for THIS specific incident. If no articles are relevant, return an empty array.
5. **Reconstruct a Timeline:** Based on the description, create a simple, plausible timeline of events.
6. **Return a JSON object** that strictly follows the provided schema. Do not add any other text or explanations outside of the JSON object.
"#,
        title = incident.title,
        priority = incident.priority,
        description = incident.description,
        services = incident.affected_services.join(", "),
        last_update = incident.last_update,
        corpus = corpus_block(corpus),
    )
}

pub fn one_line_summary_prompt(incident: &Incident) -> String {
    format!(
        r#"You are an AI assistant for an IT operations team.
Analyze the following incident and provide a very brief, one-sentence summary of the recommended immediate action.
This summary will be displayed on a dashboard list view. Make it concise and actionable.

**Incident Title:** {title}
**Incident Description:** {description}

Example output: "Investigate SSL certificate on the authentication gateway." or "Prepare to rollback the latest deployment of the member service."

**Your one-sentence summary:**
"#,
        title = incident.title,
        description = incident.description,
    )
}

pub fn executive_summary_prompt(incident: &Incident) -> String {
    format!(
        r#"You are an AI analyst responsible for briefing executive leadership on IT incidents.
Your audience is non-technical. Do not use jargon.
Analyze the following incident details and its comment history.
Provide a 2-3 sentence summary that covers:
1. The business impact (what users/customers are experiencing).
2. The current status of the investigation.
3. The next steps toward resolution.

**Incident Title:** {title}
**Incident Priority:** {priority}
**Incident Description:** {description}

**Ticket Comment History:**
{comments}

**Your Executive Summary:**
"#,
        title = incident.title,
        priority = incident.priority,
        description = incident.description,
        comments = comment_block(&incident.comments),
    )
}

pub fn dashboard_summary_prompt(incidents: &[Incident]) -> String {
    let total = incidents.len();
    let p1 = incidents
        .iter()
        .filter(|i| i.priority == Priority::P1)
        .count();
    let incident_lines = incidents
        .iter()
        .map(|i| format!("- Priority: {}, Title: {}", i.priority, i.title))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an AI Command Center lead for an IT operations team. Your task is to analyze a list of open incidents and provide a high-level summary JSON object.

**Current Open Incidents:**
{incident_lines}

**Instructions:**
1. **Write a "Situation Report":** A brief, 1-2 sentence overview of the current status. There are {total} total incidents, and {p1} of them are P1 (Critical).
2. **Identify "Focus Areas":** List 2-3 key themes or specific incidents that need immediate attention.
3. **Return a JSON object** with keys "situationReport" and "focusAreas".
"#
    )
}

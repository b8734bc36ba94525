use crate::analytics::{donut_layout, priority_breakdown};
use crate::domain::{DashboardSummary, Incident};

const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// Truncates on a char boundary so multi-byte text never splits mid-glyph.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Render the full command-center view as deterministic Markdown.
///
/// Ordering rules are stable (breakdown rows in P1..P4 order, incidents in
/// store order) so outputs are snapshot-testable.
pub fn render_dashboard(
    generated_at: &str,
    portfolio_label: &str,
    summary: &DashboardSummary,
    incidents: &[Incident],
) -> String {
    let breakdown = priority_breakdown(incidents);

    let mut out = String::new();
    out.push_str("# Incident Command Center\n\n");
    out.push_str(&format!("Generated: {generated_at}\n"));
    out.push_str(&format!("Portfolio: {portfolio_label}\n\n"));

    out.push_str("## Situation report\n\n");
    out.push_str(&format!("{}\n\n", summary.situation_report));
    out.push_str("### Focus areas\n\n");
    for area in &summary.focus_areas {
        out.push_str(&format!("- {area}\n"));
    }
    out.push('\n');

    out.push_str("## Priority breakdown\n\n");
    out.push_str("| Priority | Label | Count |\n");
    out.push_str("|---|---|---:|\n");
    for bucket in &breakdown {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            bucket.priority.as_str(),
            bucket.priority.label(),
            bucket.count
        ));
    }
    out.push('\n');

    out.push_str("## Open incidents by priority\n\n");
    let items: Vec<(&str, i64)> = breakdown
        .iter()
        .map(|b| (b.priority.label(), b.count))
        .collect();
    match donut_layout(&items) {
        None => out.push_str("No incident data.\n"),
        Some(layout) => {
            // Zero-length arcs carry no ink; the breakdown table above
            // already lists the empty buckets.
            for seg in layout.segments.iter().filter(|s| s.value > 0) {
                out.push_str(&format!(
                    "- {}: {} ({:.1}%, {:.1} to {:.1} deg)\n",
                    seg.label, seg.value, seg.percentage, seg.start_angle, seg.end_angle
                ));
            }
        }
    }
    out.push('\n');

    out.push_str("## Incident queue\n\n");
    for inc in incidents {
        out.push_str(&format!(
            "### {}: {} [{} - {}]\n\n",
            inc.id,
            inc.title,
            inc.priority.as_str(),
            inc.priority.label()
        ));
        out.push_str(&format!("- SLA breach: {}\n", inc.sla_breach_time));
        out.push_str(&format!(
            "- Affected services: {}\n\n",
            inc.affected_services.join(", ")
        ));
        out.push_str(&format!(
            "{}\n\n",
            preview(&inc.description, DESCRIPTION_PREVIEW_CHARS)
        ));
        if let Some(summary) = &inc.ai_summary {
            out.push_str(&format!("AI Suggests: {summary}\n\n"));
        } else if inc.summarizing {
            out.push_str("AI summary pending...\n\n");
        }
    }

    out
}

use log::info;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use sla_ai::enrich;
use sla_ai::gemini::GeminiClient;
use sla_ai::llm::gemini_llm::GeminiLlm;
use sla_ai::llm::Llm;
use sla_ai::orchestrate::{
    execute_directive, run_summary_sweep, AnalysisState, ExecSummaryState, PanelTab,
    RecommendationPanel,
};
use sla_core::cache::{visible_set_hash, SummaryCache};
use sla_core::domain::DashboardSummary;
use sla_core::error::AppError;
use sla_core::report::render_dashboard;
use sla_core::seed;
use sla_core::store::{IncidentStore, PortfolioFilter};

struct Args {
    portfolio: Option<String>,
    incident: Option<String>,
    show_help: bool,
}

fn parse_args(args: Vec<String>) -> Result<Args, String> {
    let mut parsed = Args {
        portfolio: None,
        incident: None,
        show_help: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--portfolio" => {
                i += 1;
                let value = args.get(i).ok_or("--portfolio requires a value")?;
                parsed.portfolio = Some(value.clone());
            }
            "--incident" => {
                i += 1;
                let value = args.get(i).ok_or("--incident requires a value")?;
                parsed.incident = Some(value.clone());
            }
            "--help" | "-h" => parsed.show_help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(parsed)
}

fn print_help() {
    println!("sladash - incident command center with AI enrichment");
    println!();
    println!("USAGE:");
    println!("    sladash [--portfolio <id>] [--incident <id>]");
    println!();
    println!("OPTIONS:");
    println!("    --portfolio <id>    Scope the dashboard to one portfolio");
    println!("    --incident <id>     Open the recommendation panel for one incident");
    println!("    -h, --help          Show this help");
    println!();
    println!("PORTFOLIOS:");
    for p in seed::portfolios() {
        println!("    {}  ({})", p.id, p.name);
    }
    println!();
    println!("ENVIRONMENT:");
    println!("    GEMINI_API_KEY      Required. Key for the generateContent endpoint.");
    println!("    GEMINI_BASE_URL     Optional. Defaults to the public endpoint.");
    println!("    GEMINI_MODEL        Optional. Defaults to gemini-2.5-flash.");
}

fn portfolio_label(filter: &PortfolioFilter) -> String {
    match filter {
        PortfolioFilter::All => "All portfolios".to_string(),
        PortfolioFilter::Only(id) => seed::portfolios()
            .into_iter()
            .find(|p| p.id == *id)
            .map(|p| p.name)
            .unwrap_or_else(|| id.clone()),
    }
}

fn print_panel(panel: &RecommendationPanel, incident_id: &str) {
    println!("## AI Co-pilot: {incident_id}");
    println!();
    match panel.analysis() {
        AnalysisState::Ready(analysis) => {
            println!("### Immediate Next Steps");
            for step in &analysis.next_steps {
                println!("- {step}");
            }
            println!();
            println!("### Potential Root Cause");
            println!("{}", analysis.root_cause);
            println!();
            println!("### Suggested Articles");
            if analysis.suggested_articles.is_empty() {
                println!("No relevant knowledge base articles were found for this incident.");
            } else {
                for kb in &analysis.suggested_articles {
                    println!("- {}: {}", kb.id, kb.title);
                    println!("  AI Gist: {}", kb.relevance);
                }
            }
            println!();
            println!("### Timeline");
            for event in &analysis.timeline {
                println!("- {}: {}", event.step, event.description);
            }
        }
        AnalysisState::Error(message) => println!("{message}"),
        AnalysisState::Idle | AnalysisState::Loading => {}
    }
    if let ExecSummaryState::Ready(text) = panel.exec_summary() {
        println!();
        println!("### Executive Summary");
        println!("{text}");
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

fn dashboard_summary_cached(
    cache: &SummaryCache,
    llm: &dyn Llm,
    store: &IncidentStore,
    filter: &PortfolioFilter,
    view_hash: &str,
) -> DashboardSummary {
    let visible = store.visible(filter);
    // An empty view short-circuits to the all-clear and never touches the cache.
    if visible.is_empty() {
        return enrich::dashboard_summary(llm, &visible);
    }
    match cache.get(view_hash) {
        Some(hit) => {
            info!("dashboard summary served from cache");
            hit
        }
        None => {
            let fresh = enrich::dashboard_summary(llm, &visible);
            cache.set(fresh.clone(), view_hash.to_string());
            fresh
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let client = GeminiClient::from_env()?;
    let llm = GeminiLlm::new(client);

    let store = IncidentStore::new(seed::incidents())?;
    let filter = match args.portfolio {
        Some(id) => PortfolioFilter::Only(id),
        None => PortfolioFilter::All,
    };

    let visible_ids: Vec<String> = store
        .visible(&filter)
        .into_iter()
        .map(|i| i.id)
        .collect();

    let cache = SummaryCache::new();
    let view_hash = visible_set_hash(&visible_ids);

    // First paint before enrichment, like the dashboard's initial load.
    let summary = dashboard_summary_cached(&cache, &llm, &store, &filter, &view_hash);
    let report = render_dashboard(
        &now_rfc3339(),
        &portfolio_label(&filter),
        &summary,
        &store.visible(&filter),
    );
    println!("{report}");

    run_summary_sweep(&store, &llm, &visible_ids)?;

    // Repaint with per-incident summaries. The sweep does not change the
    // visible set, so the situation report comes straight from the cache.
    let summary = dashboard_summary_cached(&cache, &llm, &store, &filter, &view_hash);
    let report = render_dashboard(
        &now_rfc3339(),
        &portfolio_label(&filter),
        &summary,
        &store.visible(&filter),
    );
    println!("{report}");

    if let Some(incident_id) = &args.incident {
        let corpus = seed::knowledge_articles();
        let mut panel = RecommendationPanel::new();
        if let Some(directive) = panel.focus_incident(incident_id) {
            execute_directive(&mut panel, &store, &llm, &corpus, &directive)?;
        }
        if let Some(directive) = panel.select_tab(PanelTab::Summary) {
            execute_directive(&mut panel, &store, &llm, &corpus, &directive)?;
        }
        print_panel(&panel, incident_id);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let parsed = match parse_args(args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if parsed.show_help {
        print_help();
        return;
    }

    if let Err(e) = run(parsed) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

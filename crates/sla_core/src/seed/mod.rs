use crate::domain::{Comment, Incident, KnowledgeArticle, Portfolio, Priority};

// Sanitized, deterministic dataset compiled into the binary. Large enough to
// make the dashboard and the enrichment sweep meaningful without any I/O.

fn comment(author: &str, timestamp: &str, text: &str) -> Comment {
    Comment {
        author: author.to_string(),
        timestamp: timestamp.to_string(),
        text: text.to_string(),
    }
}

pub fn portfolios() -> Vec<Portfolio> {
    [
        ("digital-channels", "Digital Channels"),
        ("core-insurance-systems", "Core Insurance Systems"),
        ("data-analytics-platform", "Data & Analytics Platform"),
        ("corporate-services", "Corporate Services"),
    ]
    .into_iter()
    .map(|(id, name)| Portfolio {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

pub fn knowledge_articles() -> Vec<KnowledgeArticle> {
    [
        (
            "KB00101",
            "Troubleshooting SSL Handshake Errors",
            "Common causes and resolution steps for SSL/TLS handshake failures, including expired or misconfigured certificates.",
        ),
        (
            "KB00102",
            "Rolling Back a Production Deployment",
            "Standard operating procedure for safely rolling back a failed deployment in the production environment using our CI/CD pipeline.",
        ),
        (
            "KB00201",
            "Diagnosing High CPU Usage on Batch Servers",
            "Steps to identify the root cause of high CPU utilization, including performance tuning for long-running database queries.",
        ),
        (
            "KB00202",
            "Optimizing Database Indexing for Search",
            "Best practices for creating and maintaining database indexes to improve the performance of complex search queries.",
        ),
        (
            "KB00301",
            "Resolving Data Warehouse Connectivity Issues",
            "Checklist for troubleshooting network connectivity problems between application servers and the data warehouse, including firewall and security group verification.",
        ),
    ]
    .into_iter()
    .map(|(id, title, summary)| KnowledgeArticle {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
    })
    .collect()
}

pub fn incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "INC001".to_string(),
            title: "Mobile App Login Failure".to_string(),
            description: "Users on iOS 17.5 are reporting intermittent login failures. The issue seems to be related to a recent certificate update on our authentication gateway. API logs show SSL handshake errors for affected users.".to_string(),
            priority: Priority::P1,
            portfolio_id: "digital-channels".to_string(),
            sla_breach_time: "in 30 minutes".to_string(),
            affected_services: vec!["Mobile App".to_string(), "Authentication API".to_string()],
            last_update: "Team is investigating the certificate chain on the gateway.".to_string(),
            comments: vec![
                comment("MonitoringBot", "2 hours ago", "Alert triggered: 5xx error rate on Auth API exceeds threshold."),
                comment("On-Call Engineer", "1 hour ago", "Acknowledged. Initial investigation points to SSL errors. Correlates with recent cert push."),
                comment("SRE Team Lead", "30 mins ago", "Confirming this is P1. All hands on deck. Customer support is reporting high call volume."),
            ],
            ai_summary: None,
            summarizing: false,
        },
        Incident {
            id: "INC002".to_string(),
            title: "Claim Processing Delay".to_string(),
            description: "The overnight batch job for processing new claims has been running for 8 hours, significantly longer than the usual 2 hours. This is causing delays in claim adjudication and payment processing. No errors are reported, but CPU usage on the processing server is at 100%.".to_string(),
            priority: Priority::P2,
            portfolio_id: "core-insurance-systems".to_string(),
            sla_breach_time: "in 2 hours".to_string(),
            affected_services: vec!["Claims Processing Engine".to_string(), "Payment Gateway".to_string()],
            last_update: "DBA team is analyzing long-running queries.".to_string(),
            comments: vec![
                comment("DBA Team", "3 hours ago", "We've identified a query that is not using the correct index. Working on a plan to kill the query and rebuild indexes."),
                comment("App Owner", "1 hour ago", "What is the ETA for resolution? This is impacting our payment cycle."),
            ],
            ai_summary: None,
            summarizing: false,
        },
        Incident {
            id: "INC003".to_string(),
            title: "Analytics Dashboard Not Loading".to_string(),
            description: "The main executive dashboard is timing out and not loading any data. All widgets are showing a loading spinner indefinitely. The underlying data warehouse connection test is failing from the dashboard server.".to_string(),
            priority: Priority::P2,
            portfolio_id: "data-analytics-platform".to_string(),
            sla_breach_time: "in 4 hours".to_string(),
            affected_services: vec!["Executive Dashboard".to_string(), "Data Warehouse".to_string()],
            last_update: "Network team is checking firewall rules between dashboard and warehouse servers.".to_string(),
            comments: vec![
                comment("BI Team", "4 hours ago", "We can't connect to the data warehouse. This is a blocker for morning reports."),
                comment("Network Ops", "2 hours ago", "We see dropped packets between the app server and the DWH. A firewall change was made last night. Investigating."),
            ],
            ai_summary: None,
            summarizing: false,
        },
        Incident {
            id: "INC004".to_string(),
            title: "HR Portal Slow Performance".to_string(),
            description: "Employees are reporting that the HR portal is extremely slow, especially when accessing payroll information. Page load times are exceeding 30 seconds. Initial investigation points to high memory utilization on the application server.".to_string(),
            priority: Priority::P3,
            portfolio_id: "corporate-services".to_string(),
            sla_breach_time: "in 8 hours".to_string(),
            affected_services: vec!["HR Portal".to_string(), "Payroll Service".to_string()],
            last_update: "System admins are scheduled to restart the application server during the next maintenance window.".to_string(),
            comments: vec![
                comment("Help Desk", "1 day ago", "Multiple users reporting slowness. Escalating to the portal support team."),
                comment("SysAdmin", "4 hours ago", "Confirmed a memory leak in the main application process. A restart will provide temporary relief. A patch is needed for a permanent fix."),
            ],
            ai_summary: None,
            summarizing: false,
        },
        Incident {
            id: "INC005".to_string(),
            title: "New Member Enrollment Failing".to_string(),
            description: "The API endpoint for new member enrollment is returning a 500 Internal Server Error. This is preventing new customers from signing up for plans via our public website. The issue started after the deployment of version 2.3.1 of the member service.".to_string(),
            priority: Priority::P1,
            portfolio_id: "digital-channels".to_string(),
            sla_breach_time: "in 1 hour".to_string(),
            affected_services: vec!["Member Enrollment API".to_string(), "Public Website".to_string()],
            last_update: "DevOps team is preparing to roll back the latest deployment.".to_string(),
            comments: vec![
                comment("DevOps", "1 hour ago", "Deployment v2.3.1 completed. Monitoring looks green."),
                comment("MonitoringBot", "45 mins ago", "Alert: 5xx error rate on Enrollment API is critical."),
                comment("Dev Lead", "15 mins ago", "This is a code issue. Authorizing immediate rollback to v2.3.0."),
            ],
            ai_summary: None,
            summarizing: false,
        },
        Incident {
            id: "INC006".to_string(),
            title: "Provider Directory Search Timeout".to_string(),
            description: "Searches in the provider directory are timing out for complex queries (e.g., searching by specialty in a large metropolitan area). Simple searches by name are still working correctly. This is impacting call center agents assisting members.".to_string(),
            priority: Priority::P3,
            portfolio_id: "core-insurance-systems".to_string(),
            sla_breach_time: "in 12 hours".to_string(),
            affected_services: vec!["Provider Directory Service".to_string(), "Call Center Tools".to_string()],
            last_update: "Investigating potential index issues in the provider database.".to_string(),
            comments: vec![
                comment("Call Center Lead", "6 hours ago", "Agents are unable to search for specialists, leading to longer call times."),
                comment("DBA Team", "1 hour ago", "Query plan analysis shows a full table scan. The search query is not using the specialty index. Investigating why."),
            ],
            ai_summary: None,
            summarizing: false,
        },
        Incident {
            id: "INC007".to_string(),
            title: "Payment Gateway Connection Errors".to_string(),
            description: "Our primary payment gateway is intermittently returning \"Connection Refused\" errors. This is affecting member premium payments and provider reimbursements. The issue appears to be network-related, possibly with the external vendor.".to_string(),
            priority: Priority::P1,
            portfolio_id: "core-insurance-systems".to_string(),
            sla_breach_time: "in 45 minutes".to_string(),
            affected_services: vec!["Payment Gateway".to_string(), "Member Portal".to_string(), "Provider Portal".to_string()],
            last_update: "Contacted vendor support; awaiting response. Monitoring network latency.".to_string(),
            comments: vec![
                comment("Finance Ops", "2 hours ago", "We are seeing a high failure rate on payment transactions. This has significant financial impact."),
                comment("Network Ops", "1 hour ago", "Traceroute shows packet loss outside our network. It seems to be an issue with the vendor's endpoint."),
                comment("Vendor Support", "10 mins ago", "(Via Email) We are aware of the issue and our network team is currently investigating. No ETA at this time."),
            ],
            ai_summary: None,
            summarizing: false,
        },
    ]
}

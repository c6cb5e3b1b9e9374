//! The generated proposal document. Deterministic for a given draft, quote,
//! and date.

use outreach_core::pricing::{self, Quote};
use outreach_core::schema::ProposalDraft;
use time::Date;
use time::macros::format_description;

/// Render the full multi-section proposal text.
pub fn render(draft: &ProposalDraft, quote: &Quote, date: Date) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("PROPOSAL FOR: {}\n\n", draft.company_name));
    doc.push_str(&format!(
        "Contact: {}, {}\n",
        draft.contact_name, draft.contact_title
    ));
    doc.push_str(&format!("Date: {}\n\n", format_date(date)));
    doc.push_str("---\n\n");

    doc.push_str("EXECUTIVE SUMMARY\n\n");
    doc.push_str(&format!(
        "Activ-AI proposes to automate key processes for {}, focusing on {}. This solution will reduce manual workload, improve efficiency, and lower operational costs.\n\n",
        draft.company_name, draft.automation_area
    ));
    doc.push_str("---\n\n");

    doc.push_str("PAIN POINTS IDENTIFIED\n");
    for (index, point) in draft.pain_points.iter().enumerate() {
        doc.push_str(&format!("{}. {}\n", index + 1, point));
    }
    doc.push_str("\n---\n\n");

    doc.push_str("PROPOSED SOLUTION\n\n");
    doc.push_str("Activ-AI will implement an AI-powered automation system that:\n");
    doc.push_str("\u{2022} Handles repetitive, manual tasks automatically\n");
    doc.push_str("\u{2022} Integrates with your existing systems\n");
    doc.push_str("\u{2022} Scales as your business grows\n");
    doc.push_str("\u{2022} Provides detailed reporting and analytics\n\n");
    doc.push_str("---\n\n");

    doc.push_str("PROJECT SCOPE & DELIVERABLES\n\n");
    doc.push_str(&format!("Service Focus: {}\n", draft.automation_area));
    doc.push_str(&format!(
        "Implementation Timeline: {} weeks\n",
        quote.delivery_weeks
    ));
    doc.push_str(&format!("Team Size: {} employees\n", draft.team_size));
    doc.push_str(&format!("Estimated Hours: {} hours\n\n", quote.estimated_hours));
    doc.push_str("---\n\n");

    doc.push_str("PRICING BREAKDOWN\n\n");
    doc.push_str(&format!(
        "Base Service Fee: \u{a3}{}\n",
        group_thousands(quote.services_cost)
    ));
    doc.push_str(&format!(
        "Implementation & Configuration: \u{a3}{}\n",
        group_thousands(quote.implementation_cost)
    ));
    doc.push_str(&"\u{2500}".repeat(29));
    doc.push('\n');
    doc.push_str(&format!(
        "TOTAL PROJECT COST: \u{a3}{}\n\n",
        group_thousands(quote.total_cost)
    ));
    doc.push_str("---\n\n");

    doc.push_str("EXPECTED OUTCOMES\n\n");
    doc.push_str(&format!(
        "Hours Saved Per Week: {}\n",
        hours_saved_per_week(draft)
    ));
    doc.push_str(&format!(
        "Monthly Cost Savings: \u{a3}{}\n",
        group_thousands(quote.monthly_savings)
    ));
    doc.push_str(&format!("ROI Timeline: {} months\n", quote.roi_months));
    doc.push_str("Client Satisfaction Impact: Significant improvement in response times\n\n");
    doc.push_str("---\n\n");

    doc.push_str("NEXT STEPS\n\n");
    doc.push_str("1. Review this proposal\n");
    doc.push_str("2. Schedule implementation kick-off call\n");
    doc.push_str("3. Provide system access details\n");
    doc.push_str("4. Begin Phase 1 setup\n\n");
    doc.push_str("For questions, contact: Activ-AI\n");
    doc.push_str("Timeline: Ready to start within 2 weeks\n\n");
    doc.push_str("---\n\n");
    doc.push_str("This proposal is valid for 30 days.\n");

    doc
}

fn hours_saved_per_week(draft: &ProposalDraft) -> String {
    match pricing::parsed_team_size(draft) {
        Some(team) => (team * 10).to_string(),
        None => "15-20".to_string(),
    }
}

fn format_date(date: Date) -> String {
    let description = format_description!("[day padding:none] [month repr:long] [year]");
    date.format(&description).unwrap_or_else(|_| date.to_string())
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

//! Outreach message templating.

use crate::schema::Lead;

pub const FIRST_NAME_TOKEN: &str = "[FIRST_NAME]";
pub const COMPANY_NAME_TOKEN: &str = "[COMPANY_NAME]";
pub const FOCUS_AREA_TOKEN: &str = "[FOCUS_AREA]";

/// The template every session starts with.
pub const DEFAULT_TEMPLATE: &str = "Hi [FIRST_NAME],\n\nI noticed [COMPANY_NAME] is in the IT services space. We help firms like yours cut operational costs by automating [FOCUS_AREA] with AI agents—typically freeing up 10+ hours per team member weekly.\n\nWorth a quick conversation to explore?\n\nBest,\nActive AI";

/// Substitute the lead's attributes into the template.
///
/// Only the first occurrence of each token is replaced; a repeated token
/// stays literal. This mirrors the behavior the outreach team already
/// relies on, so templates are written with at most one of each token.
pub fn render_message(template: &str, lead: &Lead) -> String {
    let rendered = template.replacen(FIRST_NAME_TOKEN, &lead.first_name, 1);
    let rendered = rendered.replacen(COMPANY_NAME_TOKEN, &lead.company, 1);
    rendered.replacen(FOCUS_AREA_TOKEN, lead.focus.label(), 1)
}

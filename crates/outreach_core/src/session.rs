//! The session controller: single owner of all mutable view state.
//!
//! Mutations go through methods that re-run the explicit recomputation pass
//! (directory -> stats -> filtered view), replacing the source UI's implicit
//! reactivity with a defined ordering. Nothing here persists; a session
//! lives exactly as long as the process that created it.

use crate::directory::LeadDirectory;
use crate::normalize::{self, RowMap};
use crate::pricing::PricingBook;
use crate::schedule::SchedulePlan;
use crate::schema::{
    DirectoryStats, FilterCriteria, Lead, ProposalDraft, StatusPatch,
};
use crate::template;

pub struct OutreachSession {
    directory: LeadDirectory,
    criteria: FilterCriteria,
    pub template: String,
    pub schedule: SchedulePlan,
    pub proposal: ProposalDraft,
    pub pricing: PricingBook,
    filtered_ids: Vec<u32>,
    stats: DirectoryStats,
}

impl OutreachSession {
    pub fn new() -> Self {
        let mut session = Self {
            directory: LeadDirectory::new(),
            criteria: FilterCriteria::default(),
            template: template::DEFAULT_TEMPLATE.to_string(),
            schedule: SchedulePlan::default(),
            proposal: ProposalDraft::default(),
            pricing: PricingBook::default(),
            filtered_ids: Vec::new(),
            stats: DirectoryStats::default(),
        };
        session.recompute();
        session
    }

    /// A session pre-populated with the built-in sample prospects.
    pub fn seeded() -> Self {
        let mut session = Self::new();
        session.replace_leads(sample_leads());
        session
    }

    pub fn directory(&self) -> &LeadDirectory {
        &self.directory
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn stats(&self) -> DirectoryStats {
        self.stats
    }

    /// Leads passing the current criteria, in directory order.
    pub fn filtered_leads(&self) -> Vec<&Lead> {
        self.filtered_ids
            .iter()
            .filter_map(|id| self.directory.lead(*id))
            .collect()
    }

    /// Swap in a freshly normalized lead set. Statuses reset; filters keep
    /// their values and the view recomputes against the new directory.
    pub fn replace_leads(&mut self, leads: Vec<Lead>) {
        self.directory.replace_all(leads);
        self.recompute();
    }

    /// Normalize raw rows and replace the directory with the result. The
    /// caller owns the fallible read/parse step; by the time rows exist
    /// the swap cannot fail, which is what keeps imports atomic.
    pub fn load_rows(&mut self, rows: &[RowMap]) -> usize {
        let leads = normalize::leads_from_rows(rows);
        let count = leads.len();
        self.replace_leads(leads);
        log::info!("Loaded {count} leads into the session");
        count
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn set_search(&mut self, term: &str) {
        self.criteria.search = term.to_string();
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.recompute();
    }

    pub fn set_status(&mut self, id: u32, patch: &StatusPatch) {
        self.directory.set_status(id, patch);
        self.recompute();
    }

    /// Render the personalized message for one lead with the session's
    /// current template.
    pub fn message_for(&self, id: u32) -> Option<String> {
        self.directory
            .lead(id)
            .map(|lead| template::render_message(&self.template, lead))
    }

    // Stats first, then the filtered view, which reads the statuses the
    // stats pass just counted.
    fn recompute(&mut self) {
        self.stats = self.directory.stats();
        self.filtered_ids = self
            .directory
            .filter(&self.criteria)
            .iter()
            .map(|lead| lead.id)
            .collect();
    }
}

impl Default for OutreachSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in sample prospect set. Focus areas run through the title
/// classifier so the focus invariant holds for seeded data too.
pub fn sample_leads() -> Vec<Lead> {
    let seed = [
        ("Kevin", "McKelvin", "CEO", "Tech Solutions Ltd", "kevin@example.com", 150u32),
        ("Stuart", "Haslam", "CTO", "Digital Services Group", "stuart@example.com", 200),
        ("Shelton", "Julius", "Managing Director", "IT Consulting Pro", "shelton@example.com", 95),
        ("Sean", "Foley", "Operations Manager", "Enterprise Solutions", "sean@example.com", 250),
        ("Jonathan", "Abbott", "Director", "Business Systems Inc", "jonathan@example.com", 180),
    ];
    seed.into_iter()
        .enumerate()
        .map(|(index, (first, last, title, company, email, employees))| Lead {
            id: index as u32 + 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            email: email.to_string(),
            employees,
            country: "United Kingdom".to_string(),
            website: None,
            city: None,
            linkedin: None,
            focus: normalize::classify_focus(title),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FocusArea;

    #[test]
    fn seeded_session_has_five_uk_sample_leads() {
        let session = OutreachSession::seeded();
        assert_eq!(session.stats().total, 5);
        assert!(
            session
                .directory()
                .leads()
                .iter()
                .all(|lead| lead.country == "United Kingdom")
        );
        // Every seeded focus is one of the four enumerated areas.
        assert!(
            session
                .directory()
                .leads()
                .iter()
                .all(|lead| FocusArea::ALL.contains(&lead.focus))
        );
    }

    #[test]
    fn search_narrows_the_filtered_view() {
        let mut session = OutreachSession::seeded();
        session.set_search("consulting");
        let view = session.filtered_leads();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].company, "IT Consulting Pro");

        session.reset_filters();
        assert_eq!(session.filtered_leads().len(), 5);
    }

    #[test]
    fn status_changes_flow_into_stats() {
        let mut session = OutreachSession::seeded();
        session.set_status(
            1,
            &StatusPatch {
                messaged: Some(true),
                responded: Some(true),
                ..Default::default()
            },
        );
        let stats = session.stats();
        assert_eq!(stats.messaged, 1);
        assert_eq!(stats.responded, 1);
        assert_eq!(stats.response_rate, 100.0);
    }

    #[test]
    fn message_renders_with_the_session_template() {
        let session = OutreachSession::seeded();
        let message = session.message_for(1).unwrap();
        assert!(message.starts_with("Hi Kevin,"));
        assert!(session.message_for(999).is_none());
    }
}

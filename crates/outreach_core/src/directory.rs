//! In-memory lead directory: the lead set, per-lead outreach status, the
//! filtered view, and aggregate statistics.

use crate::schema::{
    DirectoryStats, FilterCriteria, Lead, OutreachStatus, StatusFilter, StatusPatch,
};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct LeadDirectory {
    leads: Vec<Lead>,
    statuses: HashMap<u32, OutreachStatus>,
}

impl LeadDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn lead(&self, id: u32) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    pub fn status(&self, id: u32) -> Option<&OutreachStatus> {
        self.statuses.get(&id)
    }

    /// Atomically swap in a new lead set. Every status entry is
    /// reinitialized, including for identifiers that existed before.
    pub fn replace_all(&mut self, leads: Vec<Lead>) {
        self.statuses = leads
            .iter()
            .map(|lead| (lead.id, OutreachStatus::default()))
            .collect();
        self.leads = leads;
    }

    /// Merge a partial status update for one lead. No-op when the
    /// identifier is not in the directory.
    pub fn set_status(&mut self, id: u32, patch: &StatusPatch) {
        let Some(status) = self.statuses.get_mut(&id) else {
            log::debug!("Ignoring status patch for unknown lead {id}");
            return;
        };
        if let Some(messaged) = patch.messaged {
            status.messaged = messaged;
        }
        if let Some(responded) = patch.responded {
            status.responded = responded;
        }
        if let Some(notes) = &patch.notes {
            status.notes = notes.clone();
        }
    }

    /// Apply the filter clauses in their fixed order: text search, employee
    /// lower bound, employee upper bound, country, status. All clauses AND
    /// together; directory order is preserved.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Lead> {
        let search = criteria.search.trim().to_lowercase();
        self.leads
            .iter()
            .filter(|lead| search.is_empty() || matches_search(lead, &search))
            .filter(|lead| {
                criteria
                    .min_employees
                    .is_none_or(|min| lead.employees >= min)
            })
            .filter(|lead| {
                criteria
                    .max_employees
                    .is_none_or(|max| lead.employees <= max)
            })
            .filter(|lead| {
                criteria
                    .country
                    .as_ref()
                    .is_none_or(|country| lead.country == *country)
            })
            .filter(|lead| self.matches_status(lead.id, criteria.status))
            .collect()
    }

    pub fn stats(&self) -> DirectoryStats {
        let messaged = self.statuses.values().filter(|s| s.messaged).count();
        let responded = self.statuses.values().filter(|s| s.responded).count();
        let response_rate = if messaged > 0 {
            round_one_decimal(responded as f64 / messaged as f64 * 100.0)
        } else {
            0.0
        };
        DirectoryStats {
            total: self.leads.len(),
            messaged,
            responded,
            response_rate,
        }
    }

    /// Countries present in the directory, first-seen order, no blanks or
    /// duplicates. Feeds the country selector.
    pub fn countries(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for lead in &self.leads {
            if !lead.country.is_empty() && !seen.contains(&lead.country) {
                seen.push(lead.country.clone());
            }
        }
        seen
    }

    fn matches_status(&self, id: u32, filter: StatusFilter) -> bool {
        let status = self.statuses.get(&id);
        match filter {
            StatusFilter::All => true,
            StatusFilter::Messaged => status.is_some_and(|s| s.messaged),
            StatusFilter::NotMessaged => !status.is_some_and(|s| s.messaged),
            StatusFilter::Responded => status.is_some_and(|s| s.responded),
        }
    }
}

fn matches_search(lead: &Lead, needle: &str) -> bool {
    [
        &lead.first_name,
        &lead.last_name,
        &lead.company,
        &lead.title,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

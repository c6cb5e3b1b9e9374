//! Proposal pricing: the per-area price book, draft pain-point operations,
//! and the quote computation.

use crate::schema::{FocusArea, ProposalDraft};
use anyhow::{Context, Result, anyhow};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Estimated implementation hours when no usable team size was entered.
pub const DEFAULT_ESTIMATED_HOURS: u32 = 50;
/// Hours of implementation work assumed per affected team member.
pub const HOURS_PER_TEAM_MEMBER: u32 = 20;
/// Client-side savings rate, GBP per hour.
pub const SAVINGS_RATE_GBP: f64 = 50.0;
/// Average weeks per month used in the savings projection.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Canned pain points offered in the proposal form.
pub const PAIN_POINT_OPTIONS: &[&str] = &[
    "Customer Service 24/7 Support",
    "CRM Data Management",
    "Sales Pipeline Automation",
    "Client Onboarding Process",
    "Email & Ticket Management",
    "Lead Qualification",
    "Invoice Processing",
    "Report Generation",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct AreaPricing {
    /// Base service fee, GBP.
    pub base: u32,
    /// Implementation rate, GBP per hour.
    pub per_hour: u32,
    pub delivery_weeks: u32,
}

impl AreaPricing {
    /// The "typical project" figure shown in the pricing overview:
    /// base fee plus roughly 50 implementation hours.
    pub fn typical_project(&self) -> u32 {
        self.base + DEFAULT_ESTIMATED_HOURS * self.per_hour
    }
}

/// The price book, keyed by focus-area label. Always holds exactly the four
/// enumerated areas.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PricingBook {
    areas: BTreeMap<String, AreaPricing>,
}

impl Default for PricingBook {
    fn default() -> Self {
        let mut areas = BTreeMap::new();
        areas.insert(
            FocusArea::CustomerService.label().to_string(),
            AreaPricing { base: 5000, per_hour: 50, delivery_weeks: 4 },
        );
        areas.insert(
            FocusArea::Crm.label().to_string(),
            AreaPricing { base: 6000, per_hour: 50, delivery_weeks: 3 },
        );
        areas.insert(
            FocusArea::SalesPipeline.label().to_string(),
            AreaPricing { base: 7000, per_hour: 55, delivery_weeks: 4 },
        );
        areas.insert(
            FocusArea::ClientOnboarding.label().to_string(),
            AreaPricing { base: 5500, per_hour: 50, delivery_weeks: 3 },
        );
        Self { areas }
    }
}

impl PricingBook {
    /// Load a price book override from a TOML file:
    ///
    /// ```toml
    /// [areas."Sales Pipeline"]
    /// base = 7000
    /// per_hour = 55
    /// delivery_weeks = 4
    /// ```
    ///
    /// The file must cover all four areas.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read price book {}", path.display()))?;
        let book: PricingBook = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse price book {}", path.display()))?;
        for area in FocusArea::ALL {
            if !book.areas.contains_key(area.label()) {
                return Err(anyhow!(
                    "Price book {} is missing area {}",
                    path.display(),
                    area.label()
                ));
            }
        }
        Ok(book)
    }

    pub fn pricing_for(&self, area: FocusArea) -> AreaPricing {
        self.areas
            .get(area.label())
            .copied()
            // The book always carries all four areas; fall back to the
            // built-in table if an override dropped one anyway.
            .unwrap_or_else(|| default_area_pricing(area))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FocusArea, AreaPricing)> + '_ {
        FocusArea::ALL
            .into_iter()
            .map(|area| (area, self.pricing_for(area)))
    }
}

fn default_area_pricing(area: FocusArea) -> AreaPricing {
    PricingBook::default().areas[area.label()]
}

/// The computed side of a proposal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct Quote {
    pub services_cost: u32,
    pub implementation_cost: u32,
    pub total_cost: u32,
    pub estimated_hours: u32,
    pub delivery_weeks: u32,
    pub monthly_savings: u32,
    pub roi_months: u32,
}

/// Price a draft against the book. Absent or unparsable numeric inputs
/// degrade to defaults, and oversized team sizes saturate the figures;
/// nothing here errors or panics.
pub fn compute_quote(draft: &ProposalDraft, book: &PricingBook) -> Quote {
    let pricing = book.pricing_for(draft.automation_area);
    let estimated_hours = parsed_team_size(draft)
        .map(|team| team.saturating_mul(HOURS_PER_TEAM_MEMBER))
        .unwrap_or(DEFAULT_ESTIMATED_HOURS);

    let services_cost = pricing.base;
    let implementation_cost = estimated_hours.saturating_mul(pricing.per_hour);
    let total_cost = services_cost.saturating_add(implementation_cost);
    let monthly_savings =
        (f64::from(estimated_hours) * SAVINGS_RATE_GBP / WEEKS_PER_MONTH).floor() as u32;
    let roi_months = if monthly_savings == 0 {
        // A zero team size yields zero projected savings; there is no
        // payback horizon to report.
        0
    } else {
        (f64::from(total_cost) / (f64::from(monthly_savings) * 4.0)).ceil() as u32
    };

    Quote {
        services_cost,
        implementation_cost,
        total_cost,
        estimated_hours,
        delivery_weeks: pricing.delivery_weeks,
        monthly_savings,
        roi_months,
    }
}

/// Team size as entered in the form, if it parses as a whole number.
pub fn parsed_team_size(draft: &ProposalDraft) -> Option<u32> {
    let trimmed = draft.team_size.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

impl ProposalDraft {
    /// Add a pain point; no-op if it is already selected (set semantics
    /// over an insertion-ordered list).
    pub fn add_pain_point(&mut self, point: &str) {
        if !self.pain_points.iter().any(|existing| existing == point) {
            self.pain_points.push(point.to_string());
        }
    }

    /// Remove a pain point by exact match; no-op when absent.
    pub fn remove_pain_point(&mut self, point: &str) {
        self.pain_points.retain(|existing| existing != point);
    }
}

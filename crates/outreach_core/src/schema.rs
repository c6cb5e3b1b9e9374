use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The four automation-service categories a lead (or proposal) can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum FocusArea {
    #[serde(rename = "Customer Service Automation")]
    CustomerService,
    #[serde(rename = "CRM Automation")]
    Crm,
    #[serde(rename = "Sales Pipeline")]
    SalesPipeline,
    #[serde(rename = "Client Onboarding")]
    ClientOnboarding,
}

impl FocusArea {
    pub const ALL: [FocusArea; 4] = [
        FocusArea::CustomerService,
        FocusArea::Crm,
        FocusArea::SalesPipeline,
        FocusArea::ClientOnboarding,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FocusArea::CustomerService => "Customer Service Automation",
            FocusArea::Crm => "CRM Automation",
            FocusArea::SalesPipeline => "Sales Pipeline",
            FocusArea::ClientOnboarding => "Client Onboarding",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|area| area.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for FocusArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for FocusArea {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_label(value)
            .ok_or_else(|| anyhow::anyhow!("Unknown automation area: {value}"))
    }
}

/// One prospect record. Identifiers are assigned sequentially at import and
/// the record is immutable afterwards except through a full re-import.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Lead {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub employees: u32,
    pub country: String,
    pub website: Option<String>,
    pub city: Option<String>,
    pub linkedin: Option<String>,
    /// Derived once from `title` at import time; always one of the four
    /// enumerated areas.
    pub focus: FocusArea,
}

/// Per-lead messaging state, keyed by lead id in the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutreachStatus {
    pub messaged: bool,
    pub responded: bool,
    pub notes: String,
}

/// Partial status update; unset fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StatusPatch {
    pub messaged: Option<bool>,
    pub responded: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum StatusFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "messaged")]
    Messaged,
    #[serde(rename = "not-messaged")]
    NotMessaged,
    #[serde(rename = "responded")]
    Responded,
}

impl std::str::FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(StatusFilter::All),
            "messaged" => Ok(StatusFilter::Messaged),
            "not-messaged" => Ok(StatusFilter::NotMessaged),
            "responded" => Ok(StatusFilter::Responded),
            other => Err(anyhow::anyhow!("Unknown status filter: {other}")),
        }
    }
}

/// Transient filter state. `country: None` means "all countries"; unset
/// employee bounds are unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FilterCriteria {
    pub search: String,
    pub min_employees: Option<u32>,
    pub max_employees: Option<u32>,
    pub country: Option<String>,
    pub status: StatusFilter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DirectoryStats {
    pub total: usize,
    pub messaged: usize,
    pub responded: usize,
    /// responded / messaged x 100, one decimal; 0 when nothing was messaged.
    pub response_rate: f64,
}

/// One time-of-day batch in the message-sending plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScheduleSlot {
    /// "HH:MM" wall-clock time.
    pub time: String,
    pub messages_per_slot: u32,
    pub days: String,
}

/// Transient proposal form state; not linked to any lead record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProposalDraft {
    pub company_name: String,
    pub contact_name: String,
    pub contact_title: String,
    pub email: String,
    /// Raw form input; parsed on demand, defaults applied by the pricing
    /// engine when absent or unparsable.
    pub team_size: String,
    /// Insertion-ordered, duplicate-free.
    pub pain_points: Vec<String>,
    pub automation_area: FocusArea,
    pub timeline: String,
}

impl Default for ProposalDraft {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            contact_name: String::new(),
            contact_title: String::new(),
            email: String::new(),
            team_size: String::new(),
            pain_points: Vec::new(),
            automation_area: FocusArea::CustomerService,
            timeline: "3-6 months".to_string(),
        }
    }
}

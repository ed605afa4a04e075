use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Catalog enumerations
// ---------------------------------------------------------------------------

/// Fixed ordered list of industries accepted on briefs and case studies.
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Retail",
    "Manufacturing",
    "Education",
    "Real Estate",
    "Entertainment",
    "Transportation",
    "Energy",
    "Other",
];

/// Fixed ordered list of known case-study tags.
pub const TAGS: &[&str] = &[
    "e-commerce",
    "mobile",
    "performance",
    "CRM",
    "integration",
    "automation",
    "healthcare",
    "patient-management",
    "SaaS",
    "cloud",
    "AI",
    "machine-learning",
    "data-analytics",
    "security",
    "scalability",
];

pub fn industries() -> &'static [&'static str] {
    INDUSTRIES
}

pub fn tags() -> &'static [&'static str] {
    TAGS
}

// ---------------------------------------------------------------------------
// CaseStudy
// ---------------------------------------------------------------------------

/// A past-engagement record used for relevance matching against briefs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub industry: String,
    pub description: String,
    /// Stored informational default; live scores come from the matcher.
    #[serde(default)]
    pub relevance_score: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub outcome: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CaseStudy {
    pub fn new(
        title: impl Into<String>,
        industry: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        outcome: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            industry: industry.into(),
            description: description.into(),
            relevance_score: 0,
            tags,
            outcome: outcome.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Tags may be empty; the matcher handles that case explicitly.
    pub fn is_valid(&self) -> bool {
        self.missing_field().is_none()
    }

    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            Some("title")
        } else if self.industry.is_empty() {
            Some("industry")
        } else if self.description.is_empty() {
            Some("description")
        } else if self.outcome.is_empty() {
            Some("outcome")
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Seed catalog
// ---------------------------------------------------------------------------

fn tag_vec(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// Starter catalog loaded on `init` and by the in-memory store.
/// Entries carry stable ids so re-seeding is idempotent.
pub fn seed_catalog() -> Vec<CaseStudy> {
    let mut catalog = vec![
        CaseStudy::new(
            "E-commerce Platform Overhaul",
            "Retail",
            "Rebuilt a multi-brand storefront with a headless commerce stack \
             and a mobile-first checkout flow.",
            tag_vec(&["e-commerce", "mobile", "performance"]),
            "Online revenue up 42% in the first quarter after launch.",
        ),
        CaseStudy::new(
            "Patient Intake Automation",
            "Healthcare",
            "Digitized intake and scheduling for a regional clinic network, \
             integrating with the existing records system.",
            tag_vec(&["healthcare", "patient-management", "automation"]),
            "Average intake time cut from 25 minutes to 6 minutes.",
        ),
        CaseStudy::new(
            "Trading Analytics Dashboard",
            "Finance",
            "Real-time analytics and reporting for an asset-management desk, \
             with anomaly alerts on position data.",
            tag_vec(&["data-analytics", "performance", "security"]),
            "Reporting latency dropped from nightly batches to under a minute.",
        ),
        CaseStudy::new(
            "SaaS CRM Migration",
            "Technology",
            "Migrated a legacy on-premise CRM to a multi-tenant SaaS platform \
             with single sign-on and API integrations.",
            tag_vec(&["SaaS", "CRM", "cloud", "integration"]),
            "Sales team adoption reached 90% within two months.",
        ),
        CaseStudy::new(
            "Predictive Maintenance Pilot",
            "Manufacturing",
            "Machine-learning models over sensor telemetry to predict line \
             failures before they halt production.",
            tag_vec(&["AI", "machine-learning", "data-analytics"]),
            "Unplanned downtime reduced by 31% across two plants.",
        ),
        CaseStudy::new(
            "Fleet Telemetry Platform",
            "Transportation",
            "Scalable ingestion and routing dashboard for a 400-vehicle \
             delivery fleet.",
            tag_vec(&["scalability", "cloud", "data-analytics"]),
            "Fuel costs down 12% through optimized routing.",
        ),
    ];
    for (i, cs) in catalog.iter_mut().enumerate() {
        cs.id = format!("cs-{:03}", i + 1);
    }
    catalog
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

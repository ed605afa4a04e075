use crate::types::BriefStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ProjectBrief
// ---------------------------------------------------------------------------

/// A customer-submitted project request.
///
/// Budget and timeline are the legacy free-text range labels; scoring maps
/// them through `BudgetBucket`/`TimelineBucket`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectBrief {
    pub id: String,
    pub title: String,
    pub industry: String,
    pub budget: String,
    pub objectives: String,
    pub timeline: String,
    #[serde(default)]
    pub client_details: String,
    pub status: BriefStatus,
    pub submitted_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectBrief {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        industry: impl Into<String>,
        budget: impl Into<String>,
        objectives: impl Into<String>,
        timeline: impl Into<String>,
        client_details: impl Into<String>,
        submitted_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            industry: industry.into(),
            budget: budget.into(),
            objectives: objectives.into(),
            timeline: timeline.into(),
            client_details: client_details.into(),
            status: BriefStatus::Submitted,
            submitted_by: submitted_by.into(),
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Structural field check; same policy as pitch/case-study validation.
    pub fn is_valid(&self) -> bool {
        self.missing_field().is_none()
    }

    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            Some("title")
        } else if self.industry.is_empty() {
            Some("industry")
        } else if self.objectives.is_empty() {
            Some("objectives")
        } else if self.submitted_by.is_empty() {
            Some("submitted_by")
        } else {
            None
        }
    }

    pub fn assign(&mut self, member: impl Into<String>) {
        self.assigned_to = Some(member.into());
        self.status = BriefStatus::InProgress;
        self.updated_at = Utc::now();
    }

    pub fn complete(&mut self) {
        self.status = BriefStatus::Completed;
        self.updated_at = Utc::now();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectBrief {
        ProjectBrief::new(
            "Online store revamp",
            "Retail",
            "$50,000 - $100,000",
            "improve online sales performance",
            "2-3 months",
            "Mid-size retailer, two warehouses",
            "customer@example.com",
        )
    }

    #[test]
    fn new_brief_defaults() {
        let brief = sample();
        assert_eq!(brief.status, BriefStatus::Submitted);
        assert!(brief.assigned_to.is_none());
        assert!(!brief.id.is_empty());
        assert!(brief.is_valid());
    }

    #[test]
    fn missing_fields_invalidate() {
        let mut brief = sample();
        brief.title.clear();
        assert!(!brief.is_valid());

        let mut brief = sample();
        brief.industry.clear();
        assert!(!brief.is_valid());

        let mut brief = sample();
        brief.objectives.clear();
        assert!(!brief.is_valid());

        let mut brief = sample();
        brief.submitted_by.clear();
        assert!(!brief.is_valid());
    }

    #[test]
    fn assign_sets_status() {
        let mut brief = sample();
        brief.assign("member@example.com");
        assert_eq!(brief.status, BriefStatus::InProgress);
        assert_eq!(brief.assigned_to.as_deref(), Some("member@example.com"));

        brief.complete();
        assert_eq!(brief.status, BriefStatus::Completed);
    }

    #[test]
    fn yaml_roundtrip() {
        let brief = sample();
        let yaml = serde_yaml::to_string(&brief).unwrap();
        let parsed: ProjectBrief = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.id, brief.id);
        assert_eq!(parsed.industry, "Retail");
        assert_eq!(parsed.status, BriefStatus::Submitted);
    }
}

use crate::error::{PitchForgeError, Result};
use crate::types::PitchStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// SolutionPitch
// ---------------------------------------------------------------------------

/// A proposed solution document tied to one brief, moving through the
/// draft → submitted → approved → finalized workflow (with a
/// rejected → draft loop-back).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionPitch {
    pub id: String,
    pub brief_id: String,
    pub title: String,
    pub content: String,
    pub status: PitchStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default)]
    pub case_study_ids: Vec<String>,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    1
}

impl SolutionPitch {
    pub fn new(
        brief_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        created_by: impl Into<String>,
        case_study_ids: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            brief_id: brief_id.into(),
            title: title.into(),
            content: content.into(),
            status: PitchStatus::Draft,
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
            feedback: None,
            client_email: None,
            case_study_ids,
            version: 1,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.missing_field().is_none()
    }

    /// First required field that is empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.brief_id.is_empty() {
            Some("brief_id")
        } else if self.title.is_empty() {
            Some("title")
        } else if self.content.is_empty() {
            Some("content")
        } else if self.created_by.is_empty() {
            Some("created_by")
        } else {
            None
        }
    }

    /// Whether moving to `target` is legal from the current status.
    /// Callers apply the new status only after this check passes.
    pub fn can_transition_to(&self, target: PitchStatus) -> bool {
        self.status.can_transition_to(target)
    }

    /// Apply a status change, refusing anything outside the transition
    /// table. The rejected → draft loop-back starts a new revision.
    pub fn transition(&mut self, target: PitchStatus) -> Result<()> {
        if !self.can_transition_to(target) {
            return Err(PitchForgeError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        if self.status == PitchStatus::Rejected && target == PitchStatus::Draft {
            self.version += 1;
        }
        self.status = target;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = Some(feedback.into());
        self.updated_at = Utc::now();
    }

    pub fn update_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Utc::now();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch() -> SolutionPitch {
        SolutionPitch::new(
            "brief-1",
            "Revamp proposal",
            "# Solution Pitch\n...",
            "member@example.com",
            vec!["cs-1".to_string(), "cs-2".to_string()],
        )
    }

    #[test]
    fn new_pitch_defaults() {
        let p = pitch();
        assert_eq!(p.status, PitchStatus::Draft);
        assert_eq!(p.version, 1);
        assert!(p.feedback.is_none());
        assert!(p.is_valid());
    }

    #[test]
    fn is_valid_requires_each_field() {
        let mut p = pitch();
        p.brief_id.clear();
        assert!(!p.is_valid());

        let mut p = pitch();
        p.title.clear();
        assert!(!p.is_valid());

        let mut p = pitch();
        p.content.clear();
        assert!(!p.is_valid());

        let mut p = pitch();
        p.created_by.clear();
        assert!(!p.is_valid());
    }

    #[test]
    fn happy_path_to_finalized() {
        let mut p = pitch();
        p.transition(PitchStatus::Submitted).unwrap();
        p.transition(PitchStatus::Approved).unwrap();
        p.transition(PitchStatus::Finalized).unwrap();
        assert_eq!(p.status, PitchStatus::Finalized);
        assert_eq!(p.version, 1);
    }

    #[test]
    fn rejection_loops_back_and_bumps_version() {
        let mut p = pitch();
        p.transition(PitchStatus::Submitted).unwrap();
        p.transition(PitchStatus::Rejected).unwrap();
        p.transition(PitchStatus::Draft).unwrap();
        assert_eq!(p.status, PitchStatus::Draft);
        assert_eq!(p.version, 2);

        p.transition(PitchStatus::Submitted).unwrap();
        p.transition(PitchStatus::Rejected).unwrap();
        p.transition(PitchStatus::Draft).unwrap();
        assert_eq!(p.version, 3);
    }

    #[test]
    fn illegal_transitions_are_refused() {
        let mut p = pitch();
        assert!(p.transition(PitchStatus::Approved).is_err());
        assert!(p.transition(PitchStatus::Finalized).is_err());
        assert_eq!(p.status, PitchStatus::Draft);

        p.transition(PitchStatus::Submitted).unwrap();
        p.transition(PitchStatus::Approved).unwrap();
        p.transition(PitchStatus::Finalized).unwrap();
        for &target in PitchStatus::all() {
            assert!(p.transition(target).is_err(), "finalized must be terminal");
        }
    }

    #[test]
    fn feedback_is_recorded() {
        let mut p = pitch();
        p.set_feedback("Please include a maintenance plan.");
        assert_eq!(
            p.feedback.as_deref(),
            Some("Please include a maintenance plan.")
        );
    }

    #[test]
    fn yaml_roundtrip_with_defaults() {
        let p = pitch();
        let yaml = serde_yaml::to_string(&p).unwrap();
        // Optional fields stay off the wire when unset.
        assert!(!yaml.contains("feedback"));
        assert!(!yaml.contains("client_email"));
        let parsed: SolutionPitch = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.id, p.id);
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.case_study_ids.len(), 2);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PitchStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Finalized,
}

impl PitchStatus {
    pub fn all() -> &'static [PitchStatus] {
        &[
            PitchStatus::Draft,
            PitchStatus::Submitted,
            PitchStatus::Approved,
            PitchStatus::Rejected,
            PitchStatus::Finalized,
        ]
    }

    /// Legal next statuses. `Finalized` is terminal.
    pub fn allowed_transitions(self) -> &'static [PitchStatus] {
        match self {
            PitchStatus::Draft => &[PitchStatus::Submitted],
            PitchStatus::Submitted => &[PitchStatus::Approved, PitchStatus::Rejected],
            PitchStatus::Approved => &[PitchStatus::Finalized],
            PitchStatus::Rejected => &[PitchStatus::Draft],
            PitchStatus::Finalized => &[],
        }
    }

    /// Pure transition-table lookup. Any pair not in the table is illegal.
    pub fn can_transition_to(self, target: PitchStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PitchStatus::Draft => "draft",
            PitchStatus::Submitted => "submitted",
            PitchStatus::Approved => "approved",
            PitchStatus::Rejected => "rejected",
            PitchStatus::Finalized => "finalized",
        }
    }
}

impl fmt::Display for PitchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PitchStatus {
    type Err = crate::error::PitchForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PitchStatus::Draft),
            "submitted" => Ok(PitchStatus::Submitted),
            "approved" => Ok(PitchStatus::Approved),
            "rejected" => Ok(PitchStatus::Rejected),
            "finalized" => Ok(PitchStatus::Finalized),
            _ => Err(crate::error::PitchForgeError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// BriefStatus
// ---------------------------------------------------------------------------

/// Owned by the external brief workflow; this crate carries it as data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefStatus {
    Submitted,
    InProgress,
    Completed,
}

impl fmt::Display for BriefStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BriefStatus::Submitted => "submitted",
            BriefStatus::InProgress => "in_progress",
            BriefStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    TeamManager,
    TeamMember,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::TeamManager => "team_manager",
            Role::TeamMember => "team_member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::PitchForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "team_manager" => Ok(Role::TeamManager),
            "team_member" => Ok(Role::TeamMember),
            _ => Err(crate::error::PitchForgeError::InvalidRole(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// BudgetBucket
// ---------------------------------------------------------------------------

/// Coarse budget band behind the free-text labels stored on briefs.
///
/// `from_label` is the adapter for the legacy label strings; unrecognized
/// labels fall back to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetBucket {
    Small,
    SmallMedium,
    Medium,
    MediumLarge,
    Large,
    Enterprise,
}

impl BudgetBucket {
    pub fn from_label(label: &str) -> BudgetBucket {
        match label {
            "$5,000 - $10,000" => BudgetBucket::Small,
            "$10,000 - $25,000" => BudgetBucket::SmallMedium,
            "$25,000 - $50,000" => BudgetBucket::Medium,
            "$50,000 - $100,000" => BudgetBucket::MediumLarge,
            "$100,000 - $250,000" => BudgetBucket::Large,
            "$250,000+" => BudgetBucket::Enterprise,
            _ => BudgetBucket::Medium,
        }
    }

    /// Inclusive dollar bounds; `Enterprise` is open-ended.
    pub fn bounds(self) -> (u64, Option<u64>) {
        match self {
            BudgetBucket::Small => (5_000, Some(10_000)),
            BudgetBucket::SmallMedium => (10_000, Some(25_000)),
            BudgetBucket::Medium => (25_000, Some(50_000)),
            BudgetBucket::MediumLarge => (50_000, Some(100_000)),
            BudgetBucket::Large => (100_000, Some(250_000)),
            BudgetBucket::Enterprise => (250_000, None),
        }
    }
}

// ---------------------------------------------------------------------------
// TimelineBucket
// ---------------------------------------------------------------------------

/// Coarse delivery-window band behind the free-text timeline labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineBucket {
    VeryShort,
    Short,
    ShortMedium,
    Medium,
    MediumLong,
    Long,
}

impl TimelineBucket {
    pub fn from_label(label: &str) -> TimelineBucket {
        match label {
            "1-2 weeks" => TimelineBucket::VeryShort,
            "3-4 weeks" => TimelineBucket::Short,
            "1-2 months" => TimelineBucket::ShortMedium,
            "2-3 months" => TimelineBucket::Medium,
            "3-6 months" => TimelineBucket::MediumLong,
            "6+ months" => TimelineBucket::Long,
            _ => TimelineBucket::Medium,
        }
    }

    /// Inclusive bounds in weeks; `Long` is open-ended.
    pub fn bounds_weeks(self) -> (u32, Option<u32>) {
        match self {
            TimelineBucket::VeryShort => (1, Some(2)),
            TimelineBucket::Short => (3, Some(4)),
            TimelineBucket::ShortMedium => (4, Some(9)),
            TimelineBucket::Medium => (9, Some(13)),
            TimelineBucket::MediumLong => (13, Some(26)),
            TimelineBucket::Long => (26, None),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

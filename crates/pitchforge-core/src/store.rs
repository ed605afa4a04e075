use crate::brief::ProjectBrief;
use crate::case_study::{seed_catalog, CaseStudy};
use crate::error::{PitchForgeError, Result};
use crate::pitch::SolutionPitch;
use crate::types::PitchStatus;

// ---------------------------------------------------------------------------
// Store traits
// ---------------------------------------------------------------------------

/// Repository of customer briefs. Injected into callers; implementations own
/// their own state (no process-wide catalogs).
pub trait BriefStore {
    fn create(&mut self, brief: ProjectBrief) -> Result<ProjectBrief>;
    fn get(&self, id: &str) -> Result<ProjectBrief>;
    fn list(&self) -> Result<Vec<ProjectBrief>>;
    fn list_by_submitter(&self, submitter: &str) -> Result<Vec<ProjectBrief>>;
    fn update(&mut self, brief: ProjectBrief) -> Result<()>;
}

pub trait CaseStudyStore {
    fn create(&mut self, case_study: CaseStudy) -> Result<CaseStudy>;
    fn get(&self, id: &str) -> Result<CaseStudy>;
    fn list(&self) -> Result<Vec<CaseStudy>>;
    fn list_by_industry(&self, industry: &str) -> Result<Vec<CaseStudy>>;
}

/// Repository of solution pitches. `create` validates required fields and
/// `set_status` authorizes the transition before any write lands.
pub trait PitchStore {
    fn create(&mut self, pitch: SolutionPitch) -> Result<SolutionPitch>;
    fn get(&self, id: &str) -> Result<SolutionPitch>;
    fn list(&self) -> Result<Vec<SolutionPitch>>;
    fn list_by_brief(&self, brief_id: &str) -> Result<Vec<SolutionPitch>>;
    fn set_status(&mut self, id: &str, target: PitchStatus) -> Result<SolutionPitch>;
    fn update(&mut self, pitch: SolutionPitch) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn check_brief(brief: &ProjectBrief) -> Result<()> {
    match brief.missing_field() {
        Some(field) => Err(PitchForgeError::MissingField {
            kind: "brief",
            field,
        }),
        None => Ok(()),
    }
}

fn check_case_study(case_study: &CaseStudy) -> Result<()> {
    match case_study.missing_field() {
        Some(field) => Err(PitchForgeError::MissingField {
            kind: "case study",
            field,
        }),
        None => Ok(()),
    }
}

fn check_pitch(pitch: &SolutionPitch) -> Result<()> {
    match pitch.missing_field() {
        Some(field) => Err(PitchForgeError::MissingField {
            kind: "pitch",
            field,
        }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// In-memory implementations
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InMemoryBriefs {
    briefs: Vec<ProjectBrief>,
}

impl InMemoryBriefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BriefStore for InMemoryBriefs {
    fn create(&mut self, brief: ProjectBrief) -> Result<ProjectBrief> {
        check_brief(&brief)?;
        self.briefs.push(brief.clone());
        Ok(brief)
    }

    fn get(&self, id: &str) -> Result<ProjectBrief> {
        self.briefs
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| PitchForgeError::BriefNotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<ProjectBrief>> {
        Ok(self.briefs.clone())
    }

    fn list_by_submitter(&self, submitter: &str) -> Result<Vec<ProjectBrief>> {
        Ok(self
            .briefs
            .iter()
            .filter(|b| b.submitted_by == submitter)
            .cloned()
            .collect())
    }

    fn update(&mut self, brief: ProjectBrief) -> Result<()> {
        check_brief(&brief)?;
        let slot = self
            .briefs
            .iter_mut()
            .find(|b| b.id == brief.id)
            .ok_or_else(|| PitchForgeError::BriefNotFound(brief.id.clone()))?;
        *slot = brief;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCaseStudies {
    case_studies: Vec<CaseStudy>,
}

impl InMemoryCaseStudies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the static starter catalog.
    pub fn with_catalog() -> Self {
        Self {
            case_studies: seed_catalog(),
        }
    }
}

impl CaseStudyStore for InMemoryCaseStudies {
    fn create(&mut self, case_study: CaseStudy) -> Result<CaseStudy> {
        check_case_study(&case_study)?;
        self.case_studies.push(case_study.clone());
        Ok(case_study)
    }

    fn get(&self, id: &str) -> Result<CaseStudy> {
        self.case_studies
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| PitchForgeError::CaseStudyNotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<CaseStudy>> {
        Ok(self.case_studies.clone())
    }

    fn list_by_industry(&self, industry: &str) -> Result<Vec<CaseStudy>> {
        Ok(self
            .case_studies
            .iter()
            .filter(|c| c.industry == industry)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPitches {
    pitches: Vec<SolutionPitch>,
}

impl InMemoryPitches {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PitchStore for InMemoryPitches {
    fn create(&mut self, pitch: SolutionPitch) -> Result<SolutionPitch> {
        check_pitch(&pitch)?;
        self.pitches.push(pitch.clone());
        Ok(pitch)
    }

    fn get(&self, id: &str) -> Result<SolutionPitch> {
        self.pitches
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| PitchForgeError::PitchNotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<SolutionPitch>> {
        Ok(self.pitches.clone())
    }

    fn list_by_brief(&self, brief_id: &str) -> Result<Vec<SolutionPitch>> {
        Ok(self
            .pitches
            .iter()
            .filter(|p| p.brief_id == brief_id)
            .cloned()
            .collect())
    }

    fn set_status(&mut self, id: &str, target: PitchStatus) -> Result<SolutionPitch> {
        let pitch = self
            .pitches
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PitchForgeError::PitchNotFound(id.to_string()))?;
        pitch.transition(target)?;
        Ok(pitch.clone())
    }

    fn update(&mut self, pitch: SolutionPitch) -> Result<()> {
        check_pitch(&pitch)?;
        let slot = self
            .pitches
            .iter_mut()
            .find(|p| p.id == pitch.id)
            .ok_or_else(|| PitchForgeError::PitchNotFound(pitch.id.clone()))?;
        *slot = pitch;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

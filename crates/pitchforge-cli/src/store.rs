use crate::io::{atomic_write, ensure_dir};
use pitchforge_core::brief::ProjectBrief;
use pitchforge_core::case_study::CaseStudy;
use pitchforge_core::error::{PitchForgeError, Result};
use pitchforge_core::pitch::SolutionPitch;
use pitchforge_core::store::{BriefStore, CaseStudyStore, PitchStore};
use pitchforge_core::types::PitchStatus;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const PITCHFORGE_DIR: &str = ".pitchforge";
pub const BRIEFS_DIR: &str = ".pitchforge/briefs";
pub const CASE_STUDIES_DIR: &str = ".pitchforge/case-studies";
pub const PITCHES_DIR: &str = ".pitchforge/pitches";

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// YAML-file-backed implementation of the core store traits. One record per
/// file, named by id, under `.pitchforge/` in the project root.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store at `root`. Fails if `pitchforge init` has not run.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.join(PITCHFORGE_DIR).is_dir() {
            return Err(PitchForgeError::NotInitialized);
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Create the directory layout and write the seed catalog. Idempotent;
    /// existing records are left alone.
    pub fn init(root: &Path) -> Result<Self> {
        for dir in [BRIEFS_DIR, CASE_STUDIES_DIR, PITCHES_DIR] {
            ensure_dir(&root.join(dir))?;
        }
        let store = Self {
            root: root.to_path_buf(),
        };
        for cs in pitchforge_core::case_study::seed_catalog() {
            let path = store.record_path(CASE_STUDIES_DIR, &cs.id);
            if !path.exists() {
                store.write_record(CASE_STUDIES_DIR, &cs.id, &cs)?;
            }
        }
        Ok(store)
    }

    fn record_path(&self, dir: &str, id: &str) -> PathBuf {
        self.root.join(dir).join(format!("{id}.yaml"))
    }

    fn write_record<T: Serialize>(&self, dir: &str, id: &str, record: &T) -> Result<()> {
        let data = serde_yaml::to_string(record)?;
        atomic_write(&self.record_path(dir, id), data.as_bytes())?;
        Ok(())
    }

    /// Load a record by exact id, or by unique id prefix.
    fn read_record<T: DeserializeOwned>(&self, dir: &str, id: &str) -> Result<Option<T>> {
        let exact = self.record_path(dir, id);
        let path = if exact.exists() {
            Some(exact)
        } else {
            self.match_prefix(dir, id)?
        };
        match path {
            Some(p) => {
                let data = std::fs::read_to_string(p)?;
                Ok(Some(serde_yaml::from_str(&data)?))
            }
            None => Ok(None),
        }
    }

    fn match_prefix(&self, dir: &str, prefix: &str) -> Result<Option<PathBuf>> {
        if prefix.is_empty() {
            return Ok(None);
        }
        let mut hits = Vec::new();
        for entry in std::fs::read_dir(self.root.join(dir))? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(stem) = name.strip_suffix(".yaml") {
                if stem.starts_with(prefix) {
                    hits.push(entry.path());
                }
            }
        }
        // Ambiguous prefixes don't resolve.
        if hits.len() == 1 {
            Ok(Some(hits.remove(0)))
        } else {
            Ok(None)
        }
    }

    fn read_all<T: DeserializeOwned>(&self, dir: &str) -> Result<Vec<T>> {
        let dir_path = self.root.join(dir);
        if !dir_path.is_dir() {
            return Err(PitchForgeError::NotInitialized);
        }
        let mut records = Vec::new();
        for entry in std::fs::read_dir(&dir_path)? {
            let entry = entry?;
            if entry.path().extension().and_then(|e| e.to_str()) == Some("yaml") {
                let data = std::fs::read_to_string(entry.path())?;
                records.push(serde_yaml::from_str(&data)?);
            }
        }
        Ok(records)
    }
}

// ---------------------------------------------------------------------------
// Trait implementations
// ---------------------------------------------------------------------------

impl BriefStore for FileStore {
    fn create(&mut self, brief: ProjectBrief) -> Result<ProjectBrief> {
        if let Some(field) = brief.missing_field() {
            return Err(PitchForgeError::MissingField {
                kind: "brief",
                field,
            });
        }
        self.write_record(BRIEFS_DIR, &brief.id, &brief)?;
        Ok(brief)
    }

    fn get(&self, id: &str) -> Result<ProjectBrief> {
        self.read_record(BRIEFS_DIR, id)?
            .ok_or_else(|| PitchForgeError::BriefNotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<ProjectBrief>> {
        let mut briefs: Vec<ProjectBrief> = self.read_all(BRIEFS_DIR)?;
        briefs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(briefs)
    }

    fn list_by_submitter(&self, submitter: &str) -> Result<Vec<ProjectBrief>> {
        let briefs = BriefStore::list(self)?;
        Ok(briefs
            .into_iter()
            .filter(|b| b.submitted_by == submitter)
            .collect())
    }

    fn update(&mut self, brief: ProjectBrief) -> Result<()> {
        // get() resolves prefixes; updates are keyed by the full id.
        BriefStore::get(self, &brief.id)?;
        self.write_record(BRIEFS_DIR, &brief.id, &brief)
    }
}

impl CaseStudyStore for FileStore {
    fn create(&mut self, case_study: CaseStudy) -> Result<CaseStudy> {
        if let Some(field) = case_study.missing_field() {
            return Err(PitchForgeError::MissingField {
                kind: "case study",
                field,
            });
        }
        self.write_record(CASE_STUDIES_DIR, &case_study.id, &case_study)?;
        Ok(case_study)
    }

    fn get(&self, id: &str) -> Result<CaseStudy> {
        self.read_record(CASE_STUDIES_DIR, id)?
            .ok_or_else(|| PitchForgeError::CaseStudyNotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<CaseStudy>> {
        let mut studies: Vec<CaseStudy> = self.read_all(CASE_STUDIES_DIR)?;
        studies.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(studies)
    }

    fn list_by_industry(&self, industry: &str) -> Result<Vec<CaseStudy>> {
        let studies = CaseStudyStore::list(self)?;
        Ok(studies
            .into_iter()
            .filter(|c| c.industry == industry)
            .collect())
    }
}

impl PitchStore for FileStore {
    fn create(&mut self, pitch: SolutionPitch) -> Result<SolutionPitch> {
        if let Some(field) = pitch.missing_field() {
            return Err(PitchForgeError::MissingField {
                kind: "pitch",
                field,
            });
        }
        self.write_record(PITCHES_DIR, &pitch.id, &pitch)?;
        Ok(pitch)
    }

    fn get(&self, id: &str) -> Result<SolutionPitch> {
        self.read_record(PITCHES_DIR, id)?
            .ok_or_else(|| PitchForgeError::PitchNotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<SolutionPitch>> {
        let mut pitches: Vec<SolutionPitch> = self.read_all(PITCHES_DIR)?;
        pitches.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(pitches)
    }

    fn list_by_brief(&self, brief_id: &str) -> Result<Vec<SolutionPitch>> {
        let pitches = PitchStore::list(self)?;
        Ok(pitches
            .into_iter()
            .filter(|p| p.brief_id == brief_id)
            .collect())
    }

    fn set_status(&mut self, id: &str, target: PitchStatus) -> Result<SolutionPitch> {
        let mut pitch = PitchStore::get(self, id)?;
        pitch.transition(target)?;
        self.write_record(PITCHES_DIR, &pitch.id, &pitch)?;
        Ok(pitch)
    }

    fn update(&mut self, pitch: SolutionPitch) -> Result<()> {
        PitchStore::get(self, &pitch.id)?;
        self.write_record(PITCHES_DIR, &pitch.id, &pitch)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

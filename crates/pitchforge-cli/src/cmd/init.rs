use crate::output::print_json;
use crate::store::FileStore;
use anyhow::Context;
use pitchforge_core::store::CaseStudyStore;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let store = FileStore::init(root).context("failed to initialize .pitchforge/")?;
    let catalog = CaseStudyStore::list(&store)?;

    if json {
        print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "case_studies": catalog.len(),
        }))?;
    } else {
        println!("Initialized PitchForge in {}", root.display());
        println!("Seeded {} case studies", catalog.len());
        println!("Next: pitchforge brief create --help");
    }
    Ok(())
}

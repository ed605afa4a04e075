use crate::output::{print_json, print_kv, print_table, short};
use crate::store::FileStore;
use anyhow::Context;
use clap::Subcommand;
use pitchforge_core::generator;
use pitchforge_core::matcher;
use pitchforge_core::pitch::SolutionPitch;
use pitchforge_core::store::{BriefStore, CaseStudyStore, PitchStore};
use pitchforge_core::types::PitchStatus;
use std::path::Path;

#[derive(Subcommand)]
pub enum PitchSubcommand {
    /// Draft a pitch for a brief from the best-matching case studies
    Create {
        /// Brief id (or unique prefix)
        #[arg(long)]
        brief: String,
        /// Team member drafting the pitch
        #[arg(long)]
        author: String,
        /// Pitch title (defaults to one derived from the brief)
        #[arg(long)]
        title: Option<String>,
        /// How many top-scoring case studies to include
        #[arg(long, default_value = "3")]
        top: usize,
    },
    /// List pitches
    List {
        /// Only pitches for this brief id
        #[arg(long)]
        brief: Option<String>,
    },
    /// Show a pitch, including its generated content
    Show { id: String },
    /// Submit a draft for review
    Submit { id: String },
    /// Approve a submitted pitch
    Approve { id: String },
    /// Reject a submitted pitch
    Reject {
        id: String,
        /// Reviewer feedback recorded on the pitch
        #[arg(long)]
        feedback: Option<String>,
    },
    /// Finalize an approved pitch
    Finalize { id: String },
    /// Move a rejected pitch back to draft for rework
    Revise { id: String },
}

pub fn run(root: &Path, subcmd: PitchSubcommand, json: bool) -> anyhow::Result<()> {
    let mut store = FileStore::open(root)?;
    match subcmd {
        PitchSubcommand::Create {
            brief,
            author,
            title,
            top,
        } => {
            let brief = BriefStore::get(&store, &brief)
                .with_context(|| format!("brief '{brief}' not found"))?;
            let candidates = CaseStudyStore::list(&store)?;

            // Rank the catalog and carry the live scores into the document.
            let selected: Vec<_> = matcher::rank(&brief, &candidates)
                .into_iter()
                .take(top)
                .map(|(score, cs)| {
                    let mut cs = cs.clone();
                    cs.relevance_score = score;
                    cs
                })
                .collect();

            let title = title.unwrap_or_else(|| format!("Solution Pitch: {}", brief.title));
            let content = generator::generate(&brief, &selected);
            let mut pitch = SolutionPitch::new(
                &brief.id,
                title,
                content,
                &author,
                selected.iter().map(|cs| cs.id.clone()).collect(),
            );
            pitch.client_email = Some(brief.submitted_by.clone());

            let pitch = PitchStore::create(&mut store, pitch).context("failed to create pitch")?;
            if json {
                print_json(&pitch)?;
            } else {
                println!("Created pitch {} — {}", short(&pitch.id), pitch.title);
                println!(
                    "Included {} case studies. Next: pitchforge pitch submit {}",
                    pitch.case_study_ids.len(),
                    short(&pitch.id)
                );
            }
            Ok(())
        }
        PitchSubcommand::List { brief } => {
            let pitches = match brief {
                Some(b) => PitchStore::list_by_brief(&store, &b)?,
                None => PitchStore::list(&store)?,
            };
            if json {
                print_json(&pitches)?;
                return Ok(());
            }
            if pitches.is_empty() {
                println!("No pitches yet.");
                return Ok(());
            }
            let rows = pitches
                .iter()
                .map(|p| {
                    vec![
                        short(&p.id).to_string(),
                        short(&p.brief_id).to_string(),
                        p.status.to_string(),
                        format!("v{}", p.version),
                        p.created_by.clone(),
                        p.title.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "BRIEF", "STATUS", "VER", "AUTHOR", "TITLE"], rows);
            Ok(())
        }
        PitchSubcommand::Show { id } => {
            let pitch =
                PitchStore::get(&store, &id).with_context(|| format!("pitch '{id}' not found"))?;
            if json {
                print_json(&pitch)?;
                return Ok(());
            }
            print_kv(&[
                ("Id", pitch.id.clone()),
                ("Brief", pitch.brief_id.clone()),
                ("Title", pitch.title.clone()),
                ("Status", pitch.status.to_string()),
                ("Version", pitch.version.to_string()),
                ("Author", pitch.created_by.clone()),
                (
                    "Client",
                    pitch.client_email.clone().unwrap_or_else(|| "-".to_string()),
                ),
                ("Updated", pitch.updated_at.format("%Y-%m-%d %H:%M").to_string()),
            ]);
            if let Some(ref feedback) = pitch.feedback {
                println!("\nFeedback:\n{feedback}");
            }
            println!("\n{}", pitch.content);
            Ok(())
        }
        PitchSubcommand::Submit { id } => transition(&mut store, &id, PitchStatus::Submitted, json),
        PitchSubcommand::Approve { id } => transition(&mut store, &id, PitchStatus::Approved, json),
        PitchSubcommand::Reject { id, feedback } => {
            let pitch =
                PitchStore::get(&store, &id).with_context(|| format!("pitch '{id}' not found"))?;
            let mut pitch = PitchStore::set_status(&mut store, &pitch.id, PitchStatus::Rejected)
                .with_context(|| format!("cannot reject pitch '{id}'"))?;
            if let Some(feedback) = feedback {
                pitch.set_feedback(feedback);
                PitchStore::update(&mut store, pitch.clone()).context("failed to save pitch")?;
            }
            report(&pitch, json)
        }
        PitchSubcommand::Finalize { id } => {
            transition(&mut store, &id, PitchStatus::Finalized, json)
        }
        PitchSubcommand::Revise { id } => transition(&mut store, &id, PitchStatus::Draft, json),
    }
}

fn transition(
    store: &mut FileStore,
    id: &str,
    target: PitchStatus,
    json: bool,
) -> anyhow::Result<()> {
    let pitch = PitchStore::get(store, id).with_context(|| format!("pitch '{id}' not found"))?;
    let pitch = PitchStore::set_status(store, &pitch.id, target)
        .with_context(|| format!("cannot move pitch '{id}' to {target}"))?;
    report(&pitch, json)
}

fn report(pitch: &SolutionPitch, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(&serde_json::json!({
            "id": pitch.id,
            "status": pitch.status.to_string(),
            "version": pitch.version,
        }))?;
    } else {
        println!(
            "Pitch {} is now {} (v{})",
            short(&pitch.id),
            pitch.status,
            pitch.version
        );
    }
    Ok(())
}

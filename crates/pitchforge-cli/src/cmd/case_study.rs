use crate::output::{print_json, print_table, short};
use crate::store::FileStore;
use anyhow::Context;
use clap::Subcommand;
use pitchforge_core::case_study::{industries, tags, CaseStudy};
use pitchforge_core::matcher;
use pitchforge_core::store::{BriefStore, CaseStudyStore};
use std::path::Path;

#[derive(Subcommand)]
pub enum CaseStudySubcommand {
    /// List the case-study catalog
    List {
        /// Only case studies in this industry
        #[arg(long)]
        industry: Option<String>,
    },
    /// Add a case study to the catalog
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        description: String,
        /// Comma-separated tags, e.g. "e-commerce,mobile"
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long)]
        outcome: String,
    },
    /// Score the catalog against a brief, best match first
    Match {
        /// Brief id (or unique prefix)
        brief: String,
    },
    /// Print the fixed industry list
    Industries,
    /// Print the fixed tag list
    Tags,
}

pub fn run(root: &Path, subcmd: CaseStudySubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CaseStudySubcommand::Industries => {
            if json {
                print_json(&industries())?;
            } else {
                for industry in industries() {
                    println!("{industry}");
                }
            }
            return Ok(());
        }
        CaseStudySubcommand::Tags => {
            if json {
                print_json(&tags())?;
            } else {
                for tag in tags() {
                    println!("{tag}");
                }
            }
            return Ok(());
        }
        _ => {}
    }

    let mut store = FileStore::open(root)?;
    match subcmd {
        CaseStudySubcommand::List { industry } => {
            let studies = match industry {
                Some(i) => CaseStudyStore::list_by_industry(&store, &i)?,
                None => CaseStudyStore::list(&store)?,
            };
            if json {
                print_json(&studies)?;
                return Ok(());
            }
            if studies.is_empty() {
                println!("No case studies.");
                return Ok(());
            }
            let rows = studies
                .iter()
                .map(|c| {
                    vec![
                        short(&c.id).to_string(),
                        c.industry.clone(),
                        c.tags.join(","),
                        c.title.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "INDUSTRY", "TAGS", "TITLE"], rows);
            Ok(())
        }
        CaseStudySubcommand::Add {
            title,
            industry,
            description,
            tags,
            outcome,
        } => {
            let tags: Vec<String> = tags
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            let cs = CaseStudy::new(title, industry, description, tags, outcome);
            let cs = CaseStudyStore::create(&mut store, cs)
                .context("failed to create case study")?;
            if json {
                print_json(&cs)?;
            } else {
                println!("Added case study {} — {}", short(&cs.id), cs.title);
            }
            Ok(())
        }
        CaseStudySubcommand::Match { brief } => {
            let brief = BriefStore::get(&store, &brief)
                .with_context(|| format!("brief '{brief}' not found"))?;
            let candidates = CaseStudyStore::list(&store)?;
            let ranked = matcher::rank(&brief, &candidates);

            if json {
                let scored: Vec<_> = ranked
                    .iter()
                    .map(|(score, cs)| {
                        serde_json::json!({
                            "id": cs.id,
                            "title": cs.title,
                            "industry": cs.industry,
                            "score": score,
                        })
                    })
                    .collect();
                print_json(&scored)?;
                return Ok(());
            }

            let rows = ranked
                .iter()
                .map(|(score, cs)| {
                    vec![
                        score.to_string(),
                        short(&cs.id).to_string(),
                        cs.industry.clone(),
                        cs.title.clone(),
                    ]
                })
                .collect();
            print_table(&["SCORE", "ID", "INDUSTRY", "TITLE"], rows);
            Ok(())
        }
        CaseStudySubcommand::Industries | CaseStudySubcommand::Tags => unreachable!(),
    }
}

use crate::output::{print_json, print_kv, print_table, short};
use crate::store::FileStore;
use anyhow::Context;
use clap::Subcommand;
use pitchforge_core::brief::ProjectBrief;
use pitchforge_core::store::BriefStore;
use std::path::Path;

#[derive(Subcommand)]
pub enum BriefSubcommand {
    /// Submit a new project brief
    Create {
        #[arg(long)]
        title: String,
        /// One of the fixed industry names (see `case-study industries`)
        #[arg(long)]
        industry: String,
        /// Budget range label, e.g. "$50,000 - $100,000"
        #[arg(long)]
        budget: String,
        /// Free-text project objectives
        #[arg(long)]
        objectives: String,
        /// Timeline range label, e.g. "2-3 months"
        #[arg(long)]
        timeline: String,
        #[arg(long, default_value = "")]
        client_details: String,
        /// Submitting customer's email
        #[arg(long)]
        submitted_by: String,
    },
    /// List briefs
    List {
        /// Only briefs submitted by this email
        #[arg(long)]
        submitter: Option<String>,
    },
    /// Show one brief
    Show { id: String },
    /// Assign a brief to a team member
    Assign { id: String, member: String },
}

pub fn run(root: &Path, subcmd: BriefSubcommand, json: bool) -> anyhow::Result<()> {
    let mut store = FileStore::open(root)?;
    match subcmd {
        BriefSubcommand::Create {
            title,
            industry,
            budget,
            objectives,
            timeline,
            client_details,
            submitted_by,
        } => {
            let brief = ProjectBrief::new(
                title,
                industry,
                budget,
                objectives,
                timeline,
                client_details,
                submitted_by,
            );
            let brief = BriefStore::create(&mut store, brief).context("failed to create brief")?;
            if json {
                print_json(&brief)?;
            } else {
                println!("Created brief {} — {}", short(&brief.id), brief.title);
                println!("Next: pitchforge case-study match {}", short(&brief.id));
            }
            Ok(())
        }
        BriefSubcommand::List { submitter } => {
            let briefs = match submitter {
                Some(s) => BriefStore::list_by_submitter(&store, &s)?,
                None => BriefStore::list(&store)?,
            };
            if json {
                print_json(&briefs)?;
                return Ok(());
            }
            if briefs.is_empty() {
                println!("No briefs yet.");
                return Ok(());
            }
            let rows = briefs
                .iter()
                .map(|b| {
                    vec![
                        short(&b.id).to_string(),
                        b.industry.clone(),
                        b.status.to_string(),
                        b.submitted_by.clone(),
                        b.title.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "INDUSTRY", "STATUS", "SUBMITTER", "TITLE"], rows);
            Ok(())
        }
        BriefSubcommand::Show { id } => {
            let brief =
                BriefStore::get(&store, &id).with_context(|| format!("brief '{id}' not found"))?;
            if json {
                print_json(&brief)?;
                return Ok(());
            }
            print_kv(&[
                ("Id", brief.id.clone()),
                ("Title", brief.title.clone()),
                ("Industry", brief.industry.clone()),
                ("Budget", brief.budget.clone()),
                ("Timeline", brief.timeline.clone()),
                ("Status", brief.status.to_string()),
                ("Submitted by", brief.submitted_by.clone()),
                (
                    "Assigned to",
                    brief.assigned_to.clone().unwrap_or_else(|| "-".to_string()),
                ),
                ("Created", brief.created_at.format("%Y-%m-%d %H:%M").to_string()),
            ]);
            println!("\nObjectives:\n{}", brief.objectives);
            if !brief.client_details.is_empty() {
                println!("\nClient details:\n{}", brief.client_details);
            }
            Ok(())
        }
        BriefSubcommand::Assign { id, member } => {
            let mut brief =
                BriefStore::get(&store, &id).with_context(|| format!("brief '{id}' not found"))?;
            brief.assign(&member);
            BriefStore::update(&mut store, brief.clone()).context("failed to save brief")?;
            if json {
                print_json(&brief)?;
            } else {
                println!("Assigned brief {} to {member}", short(&brief.id));
            }
            Ok(())
        }
    }
}

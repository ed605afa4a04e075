mod cmd;
mod io;
mod output;
mod root;
mod store;

use clap::{Parser, Subcommand};
use cmd::{brief::BriefSubcommand, case_study::CaseStudySubcommand, pitch::PitchSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pitchforge",
    about = "Pitch workflow toolkit — briefs, case-study matching, and pitch review",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .pitchforge/ or .git/)
    #[arg(long, global = true, env = "PITCHFORGE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize PitchForge in the current project
    Init,

    /// Manage customer briefs
    Brief {
        #[command(subcommand)]
        subcommand: BriefSubcommand,
    },

    /// Manage the case-study catalog and match it against briefs
    #[command(name = "case-study")]
    CaseStudy {
        #[command(subcommand)]
        subcommand: CaseStudySubcommand,
    },

    /// Draft, review, and finalize solution pitches
    Pitch {
        #[command(subcommand)]
        subcommand: PitchSubcommand,
    },

    /// Sign in against the mock directory
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// List directory accounts
    Users {
        /// Filter by role: customer, team_manager, team_member
        #[arg(long)]
        role: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Brief { subcommand } => cmd::brief::run(&root, subcommand, cli.json),
        Commands::CaseStudy { subcommand } => cmd::case_study::run(&root, subcommand, cli.json),
        Commands::Pitch { subcommand } => cmd::pitch::run(&root, subcommand, cli.json),
        Commands::Login { email, password } => cmd::login::login(&email, &password, cli.json),
        Commands::Users { role } => cmd::login::users(role.as_deref(), cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

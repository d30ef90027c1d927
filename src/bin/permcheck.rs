use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use opshub::access::AccessService;
use opshub::config::{AccessConfig, load_catalog};
use opshub::store::{MemoryPolicyStore, PolicyFixture, PolicyStore, RestPolicyStore};
use opshub_core::ActionKind;

#[derive(Parser)]
#[command(name = "permcheck")]
#[command(about = "Inspect effective permissions for an opshub subject", long_about = None)]
struct Cli {
    /// JSON fixture file with a subject, its role, and its permissions.
    /// When set, no policy store is contacted.
    #[arg(short = 'f', long, global = true)]
    fixture: Option<PathBuf>,

    /// Base URL of a live policy store (overrides OPSHUB_POLICY_STORE_URL)
    #[arg(long, global = true)]
    store_url: Option<String>,

    /// JSON catalog file overriding the built-in page list
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the subject's full effective permission matrix
    Matrix {
        /// Subject id to resolve
        #[arg(short = 's', long)]
        subject_id: i64,
    },
    /// Answer a single "can subject do action on page?" question
    Check {
        /// Subject id to resolve
        #[arg(short = 's', long)]
        subject_id: i64,

        /// Page key to check
        page: String,

        /// Action to check (view, add, edit, delete)
        #[arg(default_value = "view")]
        action: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    opshub::logging::init_tracing();

    let cli = Cli::parse();
    let catalog = Arc::new(load_catalog(cli.catalog.as_deref()).context("loading page catalog")?);

    if let Some(path) = &cli.fixture {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading fixture {}", path.display()))?;
        let fixture: PolicyFixture = serde_json::from_str(&raw).context("parsing fixture")?;
        let store = MemoryPolicyStore::from_fixture(fixture);
        run(AccessService::new(store, catalog), cli.command).await
    } else {
        let base_url = cli
            .store_url
            .unwrap_or_else(|| AccessConfig::from_env().policy_store_url);
        let store = RestPolicyStore::new(base_url);
        run(AccessService::new(store, catalog), cli.command).await
    }
}

async fn run<S: PolicyStore>(
    service: AccessService<S>,
    command: Commands,
) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Matrix { subject_id } => {
            let matrix = service.effective_matrix(subject_id).await?;
            println!("{:<22} {:>5} {:>5} {:>5} {:>6}", "page", "view", "add", "edit", "delete");
            for (page, actions) in matrix.iter() {
                println!(
                    "{:<22} {:>5} {:>5} {:>5} {:>6}",
                    page,
                    mark(actions.can_view),
                    mark(actions.can_add),
                    mark(actions.can_edit),
                    mark(actions.can_delete),
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            subject_id,
            page,
            action,
        } => {
            let action = ActionKind::parse(&action)
                .ok_or_else(|| anyhow!("unknown action \"{action}\" (expected view, add, edit, or delete)"))?;
            let allowed = service.can_access(subject_id, &page, Some(action)).await;
            println!(
                "subject {} {} {} on {}",
                subject_id,
                if allowed { "CAN" } else { "CANNOT" },
                action,
                page
            );
            // Denials exit non-zero so the command scripts cleanly.
            Ok(if allowed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn mark(allowed: bool) -> &'static str {
    if allowed { "yes" } else { "-" }
}

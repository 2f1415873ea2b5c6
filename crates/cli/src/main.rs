//! `prodboard` command-line client for the production/sales dashboard
//!
//! Each invocation loads configuration, restores the stored session and runs
//! one dashboard workflow, then prints the resulting view.

mod presenter;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueHint};
use prodboard_core::SessionClient;
use prodboard_domain::constants::DEFAULT_PERFORMANCE_LIMIT;
use prodboard_domain::{
    Credentials, FileSelection, Registration, ReportFormat, ReportKind, TrendPeriod,
};
use prodboard_infra::{config, observability, session_client_from_config};
use tracing::debug;

use crate::presenter::Section;

#[derive(Parser, Debug)]
#[command(author, version, about = "Production/sales dashboard client", long_about = None)]
struct Cli {
    /// Print the resulting view state as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Restore the session and show the dashboard (or the login view)
    Status,
    /// Summary cards with the category and top-product breakdowns
    Summary,
    /// Product performance table
    Performance {
        /// Number of products to rank
        #[arg(long, default_value_t = DEFAULT_PERFORMANCE_LIMIT)]
        limit: u32,
    },
    /// Revenue over time
    Trends {
        /// daily, weekly or monthly
        #[arg(long, default_value = "daily")]
        period: TrendPeriod,
    },
    /// Upload a production/sales spreadsheet, then refresh the dashboard
    Upload {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Recent import batches
    History,
    /// Download a report into the configured directory
    Report {
        /// performance, trends, categories or complete
        kind: ReportKind,
        /// excel or csv
        #[arg(long, default_value = "excel")]
        format: ReportFormat,
    },
    /// Profile of the signed-in user
    Whoami,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load().context("loading configuration")?;
    observability::init_logging(&config.logging).context("initialising logging")?;
    debug!(base_url = %config.api.base_url, "configuration ready");

    let client = session_client_from_config(&config).context("building dashboard client")?;
    let (ok, sections) = run(&client, cli.command).await?;

    let state = client.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", presenter::render(&state, &sections));
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn run(client: &SessionClient, command: Command) -> Result<(bool, Vec<Section>)> {
    let outcome = match command {
        Command::Login { username, password } => {
            let ok = client.login(&Credentials::new(username, password)).await;
            (ok, dashboard_sections(ok))
        }
        Command::Register { username, email, full_name, password } => {
            let registration = Registration { username, email, full_name, password };
            client.show_register();
            (client.register(&registration).await, Vec::new())
        }
        Command::Logout => {
            client.logout();
            (true, Vec::new())
        }
        Command::Status => {
            client.bootstrap().await;
            let ok = client.is_authenticated();
            (ok, dashboard_sections(ok))
        }
        Command::Summary => {
            require_session(client)?;
            let ok = client.load_summary().await;
            (ok, vec![Section::Summary, Section::Categories, Section::TopProducts])
        }
        Command::Performance { limit } => {
            require_session(client)?;
            let ok = client.load_performance(limit).await;
            (ok, vec![Section::Performance])
        }
        Command::Trends { period } => {
            require_session(client)?;
            let ok = client.load_revenue_trends(period).await;
            (ok, vec![Section::RevenueTrends])
        }
        Command::Upload { file } => {
            require_session(client)?;
            client.select_file(read_selection(&file)?);
            let ok = client.upload_file().await;
            let mut sections = vec![Section::Upload];
            if ok {
                sections.extend(dashboard_sections(true));
            }
            (ok, sections)
        }
        Command::History => {
            require_session(client)?;
            let ok = client.load_import_history().await;
            (ok, vec![Section::ImportHistory])
        }
        Command::Report { kind, format } => {
            require_session(client)?;
            let saved = client.download_report_as(kind, format).await;
            if let Some(path) = &saved {
                debug!(path = %path.display(), "report written");
            }
            (saved.is_some(), Vec::new())
        }
        Command::Whoami => {
            require_session(client)?;
            let ok = client.load_current_user().await;
            (ok, vec![Section::User])
        }
    };
    Ok(outcome)
}

fn dashboard_sections(signed_in: bool) -> Vec<Section> {
    if signed_in {
        vec![Section::Summary, Section::Performance]
    } else {
        Vec::new()
    }
}

fn require_session(client: &SessionClient) -> Result<()> {
    if !client.show_dashboard() {
        bail!("no active session; run `prodboard login` first");
    }
    Ok(())
}

fn read_selection(path: &Path) -> Result<FileSelection> {
    let content =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} is not a file", path.display()))?;
    Ok(FileSelection::new(file_name, content))
}

//! tarefas - Tarefas+ server and admin CLI

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tarefas_core::{AppConfig, DataStore};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tarefas",
    version,
    about = "Tarefas+ - tasks, public sharing and comments",
    long_about = "Web app for personal tasks. Tasks can be made public and shared by link;\n\
                  signed-in visitors comment on public tasks.\n\
                  \n\
                  Examples:\n\
                    tarefas serve                        # Run the web server\n\
                    tarefas serve --port 8080            # Custom port\n\
                    tarefas tasks ana@example.com        # List a user's tasks\n\
                    tarefas comments <task-id> --json    # Comments on a task as JSON\n\
                    tarefas stats                        # Print store summary\n\
                  \n\
                  Environment Variables:\n\
                    TAREFAS_CONFIG                       # Config file path\n\
                    TAREFAS_DATABASE                     # Database file path\n\
                    TAREFAS_HOST / TAREFAS_PORT          # Bind address\n\
                    TAREFAS_PUBLIC_URL                   # Base URL for share links\n\
                    RUST_LOG                             # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Config file (default: <config dir>/tarefas/config.toml, if present)
    #[arg(long, env = "TAREFAS_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(long, env = "TAREFAS_DATABASE")]
    database: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web server
    Serve {
        #[arg(long, env = "TAREFAS_HOST")]
        host: Option<String>,
        #[arg(long, env = "TAREFAS_PORT")]
        port: Option<u16>,
        /// Base URL used in share links
        #[arg(long, env = "TAREFAS_PUBLIC_URL")]
        public_url: Option<String>,
    },
    /// List the tasks owned by a user, newest first
    Tasks {
        email: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the comments on a task, oldest first
    Comments {
        task_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print store stats and exit
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(database) = cli.database {
        config.database_path = database;
    }
    debug!(database = %config.database_path.display(), "Configuration resolved");

    match cli.mode {
        Mode::Serve {
            host,
            port,
            public_url,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(public_url) = public_url {
                config.public_url = public_url;
            }
            run_serve(config).await?;
        }
        Mode::Tasks { email, json } => {
            run_tasks(config, email, json)?;
        }
        Mode::Comments { task_id, json } => {
            run_comments(config, task_id, json)?;
        }
        Mode::Stats => {
            run_stats(config)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(config: &AppConfig) -> Result<DataStore> {
    config.validate().context("Invalid configuration")?;
    DataStore::open(&config.database_path, config.store_config()).with_context(|| {
        format!(
            "Failed to open database {}",
            config.database_path.display()
        )
    })
}

async fn run_serve(config: AppConfig) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::{Duration, Instant};

    let start = Instant::now();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .context("Invalid spinner template")?
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));

    spinner.set_message("Opening database...");
    let store = match open_store(&config) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    let counts = store.counts().context("Failed to read store counts")?;
    spinner.finish_with_message(format!(
        "✓ Ready in {:.2}s ({} tasks, {} comments)",
        start.elapsed().as_secs_f64(),
        counts.tasks,
        counts.comments
    ));

    println!("\n🌐 Tarefas+:   http://{}", config.bind_addr());
    println!("   Share links: {}/task/<id>", config.store_config().public_url);

    tarefas_web::run(store, &config.bind_addr()).await
}

fn run_tasks(config: AppConfig, email: String, json: bool) -> Result<()> {
    let store = open_store(&config)?;
    let tasks = store
        .list_tasks(&email)
        .with_context(|| format!("Failed to list tasks for {}", email))?;
    println!("{}", cli::format_task_table(&tasks, json));
    Ok(())
}

fn run_comments(config: AppConfig, task_id: String, json: bool) -> Result<()> {
    let store = open_store(&config)?;
    let task = store
        .database()
        .get_task(&task_id)?
        .with_context(|| format!("Task not found: {}", task_id))?;
    let comments = store.database().comments_for_task(&task.id)?;
    println!("{}", cli::format_comment_table(&comments, json));
    Ok(())
}

fn run_stats(config: AppConfig) -> Result<()> {
    let store = open_store(&config)?;
    let counts = store.counts()?;

    println!("{}", cli::format_stats(&config, &counts));
    Ok(())
}

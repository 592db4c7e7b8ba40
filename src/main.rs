//! GRC Dashboard CLI
//!
//! Terminal front end for the GRC-MMAP dashboard:
//! - Show the dashboard overview
//! - List control maturity from the compliance status endpoint
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use grc_dashboard::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use grc_dashboard::view::{control_rows, CONTROL_SECTION_TITLE, FETCH_ERROR_MESSAGE};
use grc_dashboard::{render_text, DashboardView, HttpSummaryClient, TextStyle, ViewState};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "grc-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Risk and control maturity overview from the GRC-MMAP API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Summary endpoint URL (overrides config)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard overview (default)
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List control maturity from the compliance status endpoint
    Controls,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(url) = &cli.url {
        config.dashboard.url = url.clone();
    }

    init_logging(&config.logging);

    let style = TextStyle {
        color: config.dashboard.color && !cli.no_color && std::io::stdout().is_terminal(),
    };

    match cli.command.unwrap_or(Commands::Show {
        format: OutputFormat::Table,
    }) {
        Commands::Show { format } => show(&config, format, style).await,
        Commands::Controls => controls(&config).await,
        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("creating {:?}", parent))?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(config: &LoggingConfig) {
    // RUST_LOG wins over the configured level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("grc_dashboard={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

async fn show(config: &Config, format: OutputFormat, style: TextStyle) -> anyhow::Result<ExitCode> {
    let client = HttpSummaryClient::new(&config.dashboard.url, config.dashboard.request_timeout())?;
    let mut view = DashboardView::mount(Arc::new(client));

    if format == OutputFormat::Table && std::io::stderr().is_terminal() {
        eprintln!("{}", render_text(&view.state(), style));
    }

    let outcome = tokio::select! {
        state = view.wait() => Some(state),
        _ = tokio::signal::ctrl_c() => None,
    };

    let Some(state) = outcome else {
        view.unmount();
        tracing::warn!("Interrupted, dashboard fetch cancelled");
        return Ok(ExitCode::from(130));
    };

    let exit = if matches!(state, ViewState::Loaded(_)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    match (format, &state) {
        (OutputFormat::Json, ViewState::Loaded(summary)) => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        (OutputFormat::Json, _) => {
            eprintln!("{}", render_text(&state, TextStyle::default()));
        }
        (OutputFormat::Table, _) => {
            println!("{}", render_text(&state, style));
        }
    }

    Ok(exit)
}

async fn controls(config: &Config) -> anyhow::Result<ExitCode> {
    let client = HttpSummaryClient::new(&config.dashboard.url, config.dashboard.request_timeout())?;

    match client.fetch_compliance_status().await {
        Ok(controls) => {
            println!("{}", CONTROL_SECTION_TITLE);
            println!("{}", "-".repeat(CONTROL_SECTION_TITLE.len()));

            if controls.is_empty() {
                println!("No controls have findings attached.");
            }
            for row in control_rows(&controls) {
                println!("{}", row.text());
            }

            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "API fetch error");
            eprintln!("Error: {}", FETCH_ERROR_MESSAGE);
            Ok(ExitCode::FAILURE)
        }
    }
}

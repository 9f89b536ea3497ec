use anyhow::Result;
use brevia_client::SummarizerFactory;
use brevia_core::config::Config;
use brevia_tui::App;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "KEYS:\n  i    edit the focused pane      s  summarize the input\n  u    upload a .docx document    e  export the summary\n  Tab  switch panes               q  quit\n\nThe summary is exported as summary.pdf or summary.docx in the export\ndirectory. Run with --offline to try the interface without a running\nsummarization service."
)]
struct Cli {
    /// Configuration file path
    #[arg(long, help = "Path to configuration file")]
    config: Option<PathBuf>,

    /// Summarization endpoint URL
    #[arg(long, help = "Override the summarization endpoint URL")]
    url: Option<String>,

    /// Run without a summarization service
    #[arg(long, help = "Use a fixed placeholder summary instead of the endpoint")]
    offline: bool,

    /// Directory for exported artifacts
    #[arg(long, help = "Directory summary.pdf / summary.docx are written to")]
    export_dir: Option<PathBuf>,

    /// Color theme (dark or light)
    #[arg(long, help = "Select the color theme")]
    theme: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, help = "Set log level")]
    log_level: Option<String>,

    /// Set log directory
    #[arg(long, help = "Directory for log files")]
    log_dir: Option<PathBuf>,

    /// Disable file logging
    #[arg(long, help = "Log to stderr instead of files (corrupts the TUI screen)")]
    no_file_logging: bool,
}

/// Initialize tracing. Logs go to a file by default so output never fights
/// the TUI for the terminal; the returned guard flushes on drop.
fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = cli.log_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if cli.no_file_logging {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let log_dir = match &cli.log_dir {
        Some(dir) => dir.clone(),
        None => default_log_dir()?,
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "brevia.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

fn default_log_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "brevia", "brevia")
        .ok_or_else(|| anyhow::anyhow!("Could not determine log directory"))?;
    Ok(project_dirs.data_local_dir().join("logs"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before parsing configuration
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let _log_guard = init_tracing(&cli)?;

    info!("Starting Brevia");

    // Load configuration, then apply CLI overrides
    let mut config = Config::load(cli.config.as_deref()).await.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    if let Some(url) = &cli.url {
        config.endpoint.url = url.clone();
    }
    if cli.offline {
        config.endpoint.offline = true;
    }
    if let Some(export_dir) = &cli.export_dir {
        config.export.output_dir = export_dir.clone();
    }
    if let Some(theme) = &cli.theme {
        config.tui.theme = theme.clone();
    }

    info!(
        "Endpoint: {} (offline: {}), export directory: {}",
        config.endpoint.url,
        config.endpoint.offline,
        config.export.output_dir.display()
    );

    // Make sure exports have somewhere to land
    tokio::fs::create_dir_all(&config.export.output_dir)
        .await
        .map_err(|e| {
            error!("Failed to create export directory: {}", e);
            anyhow::anyhow!(
                "Failed to create export directory {}: {}",
                config.export.output_dir.display(),
                e
            )
        })?;

    let summarizer = SummarizerFactory::create(&config.endpoint).map_err(|e| {
        error!("Failed to create summarizer: {}", e);
        anyhow::anyhow!("Failed to create summarizer: {}", e)
    })?;

    let mut app = App::new(config, summarizer).map_err(|e| {
        error!("Failed to initialize application: {}", e);
        anyhow::anyhow!("Failed to initialize application: {}", e)
    })?;

    match app.run().await {
        Ok(_) => {
            info!("Brevia exited successfully");
            Ok(())
        }
        Err(e) => {
            error!("Brevia encountered an error: {}", e);
            Err(anyhow::anyhow!("Application error: {}", e))
        }
    }
}

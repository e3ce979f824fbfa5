use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use notesync_common::{logger, AppConfig};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    match find_project_root().map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            dotenv::from_path(&env_path).ok();
        }
        _ => {
            dotenv::dotenv().ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "notesync")]
#[command(about = "NoteSync - structured summaries of meeting notes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Host to bind to (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Directory with the static web page (overrides STATIC_DIR)
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Log to the console only
    #[arg(long)]
    no_log_file: bool,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded configuration
    fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server_host = host.clone();
        }
        if let Some(port) = self.port {
            config.server_port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir = dir.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let args = match cli.command {
        Some(Commands::Serve(args)) => args,
        None => ServeArgs::default(),
    };

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate()?;

    logger::setup_logging(&config, !args.no_log_file)?;

    tracing::info!("NoteSync starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Model: {}", config.groq_model);
    tracing::info!(
        "  Completion API: {}",
        if config.has_llm_credentials() { "enabled" } else { "disabled (fallback summaries)" }
    );

    println!("NoteSync server running at http://{}", config.server_bind_address());

    notesync_server::start_server(config).await?;

    Ok(())
}

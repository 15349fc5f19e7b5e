use clap::{ArgAction, Parser, Subcommand};
use commands::{config, fetch, serve};
use std::path::PathBuf;
use upnext_config::PathManager;

mod api;
mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "upnext")]
#[command(about = "UpNext - upcoming episodes and movie releases from Sonarr and Radarr in one feed")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a TOML config file (environment variables override it)
    #[arg(short, long, global = true, env = "UPNEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Also write JSON logs to a daily-rotated file (serve defaults to <base>/logs/upnext.log in the container)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the agenda feed over HTTP (default)
    #[command(long_about = "Serve GET /api/agenda, GET /api/stats and GET /health. Every agenda request re-fetches both upstreams; nothing is cached.")]
    Serve {
        /// Address to listen on, overrides the configured bind address
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Build the agenda once and print it as JSON
    Agenda {
        /// Pretty-print the JSON
        #[arg(long, action = ArgAction::SetTrue)]
        pretty: bool,
    },
    /// Fetch library statistics once and print them as JSON
    Stats {
        /// Pretty-print the JSON
        #[arg(long, action = ArgAction::SetTrue)]
        pretty: bool,
    },
    /// Show the resolved configuration (API keys masked)
    Config {
        /// Show API keys in full
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Serve { bind: None });
    let serving = matches!(command, Commands::Serve { .. });
    let log_file = PathManager::default().log_file_for(cli.log_file.as_deref(), serving);

    logging::init_logging(cli.verbose, cli.quiet, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let app_config = commands::load_config(cli.config)?;

    match command {
        Commands::Serve { bind } => serve::run_serve(app_config, bind).await,
        Commands::Agenda { pretty } => fetch::run_agenda(app_config, pretty).await,
        Commands::Stats { pretty } => fetch::run_stats(app_config, pretty).await,
        Commands::Config { full } => config::run_show(&app_config, full),
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod api;
mod cmd;
mod config;
mod constants;
mod shared_types;
mod utils;

use crate::cmd::config::ConfigCommand;
use crate::cmd::graph::GraphCommand;
use crate::cmd::pixel::PixelCommand;
use crate::cmd::user::UserCommand;
use crate::cmd::webhook::WebhookCommand;
use crate::config::{CliConfig, Credentials, LogLevel};
use crate::shared_types::{AppContext, CliSubCmd};
use crate::utils::{paths::get_absolute_path, term};

#[derive(Parser)]
#[command(name = "pixela", version, about = "command-line client for pixe.la")]
struct Cli {
    #[arg(short, long, global = true, env = constants::ENV_USERNAME)]
    /// pixe.la username, falls back to the credentials file
    username: Option<String>,

    #[arg(short, long, global = true, env = constants::ENV_TOKEN, hide_env_values = true)]
    /// pixe.la token, falls back to the credentials file
    token: Option<String>,

    #[arg(long, global = true)]
    /// credentials file, default: ~/.pixela.yaml
    config: Option<PathBuf>,

    #[arg(long, global = true, env = constants::ENV_BASE_URL)]
    /// overrides the base url from the settings file
    base_url: Option<String>,

    #[arg(short, long, global = true)]
    /// print debug logs and full responses
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    User(UserCommand),
    Graph(GraphCommand),
    Pixel(PixelCommand),
    Webhook(WebhookCommand),
    Config(ConfigCommand),
}

fn init_logging(verbose: bool, log_level: LogLevel) {
    let fallback = if verbose {
        LogLevel::Verbose.as_filter()
    } else {
        log_level.as_filter()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_context(cli: &Cli, config: CliConfig) -> anyhow::Result<AppContext> {
    let credentials_path = match &cli.config {
        Some(path) => get_absolute_path(path)?,
        None => Credentials::get_default_filepath()?,
    };
    let creds = Credentials::load_from(&credentials_path)?;
    debug!(path = %credentials_path.display(), "credentials loaded");

    Ok(AppContext {
        config,
        username: cli.username.clone().or(creds.username),
        token: cli.token.clone().or(creds.token),
        base_url: cli.base_url.clone(),
        credentials_path,
        verbose: cli.verbose,
    })
}

async fn run(cli: Cli, config: anyhow::Result<CliConfig>) -> anyhow::Result<()> {
    let ctx = build_context(&cli, config?)?;

    match cli.commands {
        Commands::User(_cmd) => _cmd.run(&ctx).await,
        Commands::Graph(_cmd) => _cmd.run(&ctx).await,
        Commands::Pixel(_cmd) => _cmd.run(&ctx).await,
        Commands::Webhook(_cmd) => _cmd.run(&ctx).await,
        Commands::Config(_cmd) => _cmd.run(&ctx).await,
    }
}

#[tokio::main]
pub async fn main() {
    let cli = Cli::parse();

    let config = CliConfig::load();
    let log_level = config
        .as_ref()
        .map(|config| config.get_log_level())
        .unwrap_or_default();
    init_logging(cli.verbose, log_level);

    if let Err(err) = run(cli, config).await {
        term::print_error(&err);
        std::process::exit(1);
    }
}

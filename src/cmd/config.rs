use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use crate::{
    config::{CliConfig, LogLevel},
    shared_types::{AppContext, CliSubCmd},
};

#[derive(Parser)]
#[group(required = true, multiple = true)]
pub struct ConfigCommand {
    #[arg(long)]
    /// default log level is "normal", only warnings and errors are shown
    set_log_level: Option<LogLevel>,

    #[arg(long)]
    /// pixe.la instance to talk to, default: https://pixe.la
    set_base_url: Option<String>,

    #[arg(long)]
    /// request timeout in seconds, default: 10
    set_timeout: Option<u64>,

    #[arg(long)]
    /// print the effective settings
    show: bool,
}

impl CliSubCmd for ConfigCommand {
    async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let filepath = CliConfig::get_config_filepath()?;
        let mut config = CliConfig::load_from(&filepath)?;
        let mut changed = false;

        if let Some(log_level) = self.set_log_level {
            config.set_log_level(log_level);
            changed = true;
        }
        if let Some(base_url) = &self.set_base_url {
            config.set_base_url(base_url)?;
            changed = true;
        }
        if let Some(timeout) = self.set_timeout {
            config.set_timeout_secs(timeout)?;
            changed = true;
        }

        if changed {
            config
                .save_to_file(&filepath)
                .with_context(|| format!("error occured while writing to {}", filepath.display()))?;
            info!(path = %filepath.display(), "settings saved");
            println!("{}", "settings saved".bold());
        }

        if self.show {
            println!("{}: {}", "config file".bright_black(), filepath.display());
            println!(
                "{}: {}",
                "credentials file".bright_black(),
                ctx.credentials_path.display()
            );
            println!("base_url = {}", config.get_base_url());
            println!("timeout_secs = {}", config.get_timeout().as_secs());
            println!(
                "log_level = {}",
                serde_json::to_string(&config.get_log_level())?
            );
        }

        Ok(())
    }
}

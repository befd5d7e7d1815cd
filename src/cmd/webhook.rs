use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::{
    shared_types::{AppContext, CliSubCmd},
    utils::term,
};

#[derive(Parser)]
pub struct WebhookCommand {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// create a webhook that increments or decrements a graph's pixel when invoked
    Create {
        graph_id: String,

        /// increment|decrement
        #[arg(value_name = "TYPE")]
        webhook_type: String,
    },

    /// list all your webhooks
    Get,

    /// invoke a webhook by its hash
    Invoke { hash: String },

    Delete { hash: String },
}

impl CliSubCmd for WebhookCommand {
    async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let client = ctx.client()?;

        match &self.command {
            Commands::Create {
                graph_id,
                webhook_type,
            } => {
                let res = client.create_webhook(graph_id, webhook_type).await?;
                term::print_outcome(
                    &format!("webhook for '{}' created", graph_id),
                    &res,
                    ctx.verbose,
                )?;
                println!(
                    "hash: {}",
                    res.webhook_hash.as_deref().unwrap_or_default().cyan()
                );
            }
            Commands::Get => term::print_json(&client.get_webhook_definitions().await?)?,
            Commands::Invoke { hash } => {
                let res = client.invoke_webhook(hash).await?;
                term::print_outcome("webhook invoked", &res, ctx.verbose)?;
            }
            Commands::Delete { hash } => {
                let res = client.delete_webhook(hash).await?;
                term::print_outcome("webhook deleted", &res, ctx.verbose)?;
            }
        };

        Ok(())
    }
}

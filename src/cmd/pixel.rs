use clap::{Parser, Subcommand};

use crate::{
    shared_types::{AppContext, CliSubCmd},
    utils::term,
};

#[derive(Parser)]
pub struct PixelCommand {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// record a quantity for a date, replaces an existing pixel
    Create {
        graph_id: String,
        /// format: yyyyMMdd
        date: String,
        quantity: String,

        #[arg(long)]
        /// arbitrary JSON, up to 10KB
        optional_data: Option<String>,
    },

    /// get the pixel of a date
    Get { graph_id: String, date: String },

    /// update the pixel of a date
    Update {
        graph_id: String,
        date: String,
        quantity: String,

        #[arg(long)]
        optional_data: Option<String>,
    },

    /// increment today's pixel
    Inc { graph_id: String },

    /// decrement today's pixel
    Dec { graph_id: String },

    Delete { graph_id: String, date: String },
}

impl CliSubCmd for PixelCommand {
    async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let client = ctx.client()?;

        match &self.command {
            Commands::Create {
                graph_id,
                date,
                quantity,
                optional_data,
            } => {
                let res = client
                    .create_pixel(graph_id, date, quantity, optional_data.as_deref())
                    .await?;
                term::print_outcome(
                    &format!("pixel {} of '{}' recorded", date, graph_id),
                    &res,
                    ctx.verbose,
                )?;
            }
            Commands::Get { graph_id, date } => {
                term::print_json(&client.get_pixel(graph_id, date).await?)?
            }
            Commands::Update {
                graph_id,
                date,
                quantity,
                optional_data,
            } => {
                let res = client
                    .update_pixel(graph_id, date, quantity, optional_data.as_deref())
                    .await?;
                term::print_outcome(
                    &format!("pixel {} of '{}' updated", date, graph_id),
                    &res,
                    ctx.verbose,
                )?;
            }
            Commands::Inc { graph_id } => {
                let res = client.increment_pixel(graph_id).await?;
                term::print_outcome(
                    &format!("today's pixel of '{}' incremented", graph_id),
                    &res,
                    ctx.verbose,
                )?;
            }
            Commands::Dec { graph_id } => {
                let res = client.decrement_pixel(graph_id).await?;
                term::print_outcome(
                    &format!("today's pixel of '{}' decremented", graph_id),
                    &res,
                    ctx.verbose,
                )?;
            }
            Commands::Delete { graph_id, date } => {
                let res = client.delete_pixel(graph_id, date).await?;
                term::print_outcome(
                    &format!("pixel {} of '{}' deleted", date, graph_id),
                    &res,
                    ctx.verbose,
                )?;
            }
        };

        Ok(())
    }
}

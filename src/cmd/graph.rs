use clap::{Parser, Subcommand};

use crate::{
    api::graph::{CreateGraphOpts, UpdateGraphOpts},
    shared_types::{AppContext, CliSubCmd},
    utils::term,
};

#[derive(Parser)]
pub struct GraphCommand {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// create a new graph
    Create {
        id: String,
        name: String,
        unit: String,

        /// quantity type: int|float
        #[arg(value_name = "TYPE")]
        num_type: String,

        /// shibafu|momiji|sora|ichou|ajisai|kuro
        color: String,

        #[arg(long)]
        /// e.g. "Asia/Tokyo", defaults to UTC on pixe.la's side
        timezone: Option<String>,

        #[arg(long)]
        /// none|increment|decrement
        self_sufficient: Option<String>,
    },

    /// list definitions of all your graphs
    Def,

    /// update a graph's definition, only the given fields change
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        unit: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        timezone: Option<String>,

        #[arg(long = "purge")]
        /// url to purge from the cdn cache when the graph changes, can be repeated
        purge_cache_urls: Vec<String>,

        #[arg(long)]
        self_sufficient: Option<String>,
    },

    /// delete a graph and all of its pixels
    Delete { id: String },

    /// print the graph as svg
    Svg {
        id: String,

        #[arg(long)]
        /// last date shown in the graph, format: yyyyMMdd
        date: Option<String>,

        #[arg(long)]
        /// e.g. "short" or "badge"
        mode: Option<String>,
    },

    /// list dates that have a pixel
    Pixels {
        id: String,

        #[arg(long)]
        /// format: yyyyMMdd
        from: Option<String>,

        #[arg(long)]
        /// format: yyyyMMdd
        to: Option<String>,
    },
}

impl CliSubCmd for GraphCommand {
    async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let client = ctx.client()?;

        match &self.command {
            Commands::Create {
                id,
                name,
                unit,
                num_type,
                color,
                timezone,
                self_sufficient,
            } => {
                let res = client
                    .create_graph(&CreateGraphOpts {
                        id,
                        name,
                        unit,
                        num_type,
                        color,
                        timezone: timezone.as_deref(),
                        self_sufficient: self_sufficient.as_deref(),
                    })
                    .await?;
                term::print_outcome(&format!("graph '{}' created", id), &res, ctx.verbose)?;
            }
            Commands::Def => term::print_json(&client.get_graph_definitions().await?)?,
            Commands::Update {
                id,
                name,
                unit,
                color,
                timezone,
                purge_cache_urls,
                self_sufficient,
            } => {
                let res = client
                    .update_graph(
                        id,
                        &UpdateGraphOpts {
                            name: name.as_deref(),
                            unit: unit.as_deref(),
                            color: color.as_deref(),
                            timezone: timezone.as_deref(),
                            purge_cache_urls: Some(purge_cache_urls.as_slice()),
                            self_sufficient: self_sufficient.as_deref(),
                        },
                    )
                    .await?;
                term::print_outcome(&format!("graph '{}' updated", id), &res, ctx.verbose)?;
            }
            Commands::Delete { id } => {
                let res = client.delete_graph(id).await?;
                term::print_outcome(&format!("graph '{}' deleted", id), &res, ctx.verbose)?;
            }
            Commands::Svg { id, date, mode } => {
                let svg = client
                    .get_graph_svg(id, date.as_deref(), mode.as_deref())
                    .await?;
                println!("{}", svg);
            }
            Commands::Pixels { id, from, to } => term::print_json(
                &client
                    .get_graph_pixels_date_list(id, from.as_deref(), to.as_deref())
                    .await?,
            )?,
        };

        Ok(())
    }
}

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use crate::{
    config::Credentials,
    shared_types::{AppContext, CliSubCmd},
    utils::term,
};

#[derive(Parser)]
pub struct UserCommand {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// register a new pixe.la user, the credentials are saved to the credentials file
    /// if it doesn't exist yet
    Create {
        #[arg(id = "new_username", value_name = "USERNAME")]
        username: String,

        #[arg(id = "new_user_token", value_name = "TOKEN")]
        token: String,

        #[arg(long, default_value = "yes")]
        /// whether you agree to the terms of service: yes|no
        agree_terms_of_service: String,

        #[arg(long, default_value = "yes")]
        /// whether you are not a minor: yes|no
        not_minor: String,
    },

    /// replace the token of the current user
    Update { new_token: String },

    /// delete a user, all of its graphs are gone with it
    Delete {
        #[arg(id = "target_username", value_name = "USERNAME")]
        username: String,

        #[arg(id = "target_token", value_name = "TOKEN")]
        token: String,
    },
}

impl UserCommand {
    async fn handle_create(
        &self,
        ctx: &AppContext,
        username: &str,
        token: &str,
        agree_terms_of_service: &str,
        not_minor: &str,
    ) -> anyhow::Result<()> {
        let client = ctx.client_for(username, token)?;
        let res = client
            .create_user(agree_terms_of_service, not_minor)
            .await?;
        term::print_outcome(&format!("user '{}' created", username), &res, ctx.verbose)?;

        let creds = Credentials {
            username: Some(username.to_string()),
            token: Some(token.to_string()),
        };
        if creds.save_new(&ctx.credentials_path)? {
            println!(
                "{}",
                format!("credentials saved to {}", ctx.credentials_path.display()).bright_black()
            );
        } else {
            warn!(
                path = %ctx.credentials_path.display(),
                "credentials file already exists, not overwriting"
            );
            println!(
                "{}",
                format!(
                    "Note: {} already exists, save these credentials yourself:",
                    ctx.credentials_path.display()
                )
                .bright_black()
            );
            println!("username: {}\ntoken: {}", username, token);
        }

        Ok(())
    }
}

impl CliSubCmd for UserCommand {
    async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        match &self.command {
            Commands::Create {
                username,
                token,
                agree_terms_of_service,
                not_minor,
            } => {
                self.handle_create(ctx, username, token, agree_terms_of_service, not_minor)
                    .await?
            }
            Commands::Update { new_token } => {
                let res = ctx.client()?.update_user(new_token).await?;
                term::print_outcome("token updated", &res, ctx.verbose)?;
            }
            Commands::Delete { username, token } => {
                let res = ctx.client_for(username, token)?.delete_user().await?;
                term::print_outcome(&format!("user '{}' deleted", username), &res, ctx.verbose)?;
            }
        };

        Ok(())
    }
}

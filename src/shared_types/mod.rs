use std::path::PathBuf;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

mod models;

pub use models::*;

use crate::{
    api::{ClientOpts, Pixela},
    config::CliConfig,
};

pub trait CliSubCmd {
    async fn run(&self, ctx: &AppContext) -> anyhow::Result<()>;
}

/// envelope returned by every non-GET pixe.la endpoint
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_success: bool,
    pub webhook_hash: Option<String>,
}

/// everything a command needs, resolved once from flags, env, settings and credentials
pub struct AppContext {
    pub config: CliConfig,
    pub username: Option<String>,
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub credentials_path: PathBuf,
    pub verbose: bool,
}

impl AppContext {
    pub fn client_opts(&self) -> ClientOpts {
        ClientOpts {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| self.config.get_base_url().to_string()),
            timeout: self.config.get_timeout(),
            debug: self.verbose,
        }
    }

    /// client for the configured user
    pub fn client(&self) -> anyhow::Result<Pixela> {
        let username = self.username.as_deref().ok_or(anyhow!(
            "username is required (use --username, PIXELA_USERNAME or the credentials file)"
        ))?;
        let token = self.token.as_deref().ok_or(anyhow!(
            "token is required (use --token, PIXELA_TOKEN or the credentials file)"
        ))?;

        self.client_for(username, token)
    }

    /// client for credentials given explicitly on the command line
    pub fn client_for(&self, username: &str, token: &str) -> anyhow::Result<Pixela> {
        Ok(Pixela::new(username, token, &self.client_opts())?)
    }
}

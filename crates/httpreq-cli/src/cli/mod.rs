//! CLI for httpreq: one subcommand per HTTP verb.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use httpreq_core::{config, CurlTransport, Method, Request};
use std::path::PathBuf;
use std::time::Duration;

use commands::{run_download, run_read};

/// Top-level CLI for httpreq.
#[derive(Debug, Parser)]
#[command(name = "httpreq")]
#[command(about = "httpreq: send one HTTP request, print or save the response", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Send a GET request.
    Get {
        #[command(flatten)]
        target: Target,
    },

    /// Send a POST request with a body.
    Post {
        #[command(flatten)]
        target: Target,
        /// Request body, sent as-is.
        #[arg(long, default_value = "")]
        data: String,
    },

    /// Send a PUT request with a body.
    Put {
        #[command(flatten)]
        target: Target,
        /// Request body, sent as-is.
        #[arg(long, default_value = "")]
        data: String,
    },

    /// Send a PATCH request with a body.
    Patch {
        #[command(flatten)]
        target: Target,
        /// Request body, sent as-is.
        #[arg(long, default_value = "")]
        data: String,
    },

    /// Send a DELETE request.
    Delete {
        #[command(flatten)]
        target: Target,
    },
}

/// Options shared by every verb.
#[derive(Debug, Args)]
pub struct Target {
    /// Absolute http(s) URL.
    pub url: String,

    /// Save the response body to this file instead of printing it.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Send `Authorization: token <TOKEN>`. Wins over --user/--password.
    #[arg(long)]
    pub token: Option<String>,

    /// Basic auth username.
    #[arg(long, requires = "password")]
    pub user: Option<String>,

    /// Basic auth password.
    #[arg(long, requires = "user")]
    pub password: Option<String>,

    /// Override the request Content-Type.
    #[arg(long)]
    pub content_type: Option<String>,

    /// Connect and read timeout in milliseconds (default from config).
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,
}

impl Target {
    /// Command-line options override config defaults.
    fn apply(&self, request: &mut Request) {
        // Credentials on the command line replace any from the config file.
        if self.token.is_some() || self.user.is_some() {
            request.clear_authentication();
        }
        if let (Some(user), Some(pass)) = (&self.user, &self.password) {
            request.set_basic_auth(user.clone(), pass.clone());
        }
        if let Some(token) = &self.token {
            request.set_token(token.clone());
        }
        if let Some(ct) = &self.content_type {
            request.set_content_type(ct.clone());
        }
        if let Some(ms) = self.timeout {
            request.set_timeout(Duration::from_millis(ms));
        }
    }
}

impl CliCommand {
    pub fn into_parts(self) -> (Method, Target, Option<String>) {
        match self {
            CliCommand::Get { target } => (Method::Get, target, None),
            CliCommand::Post { target, data } => (Method::Post, target, Some(data)),
            CliCommand::Put { target, data } => (Method::Put, target, Some(data)),
            CliCommand::Patch { target, data } => (Method::Patch, target, Some(data)),
            CliCommand::Delete { target } => (Method::Delete, target, None),
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!(timeout_ms = cfg.timeout_ms, "loaded config");

        let (method, target, data) = cli.command.into_parts();
        let mut request = Request::with_transport(method, &target.url, data, CurlTransport)
            .with_context(|| format!("{} {}", method, target.url))?;
        request.apply_config(&cfg);
        target.apply(&mut request);

        match &target.output {
            Some(path) => run_download(&mut request, path)?,
            None => run_read(&mut request)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

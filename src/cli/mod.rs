//
//  onesky-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI definition using clap derive macros

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::api::{ClientConfig, OneSkyClient};
use crate::config::Config;
use crate::output::{request_echo, OutputWriter};
use crate::shell::Shell;

/// OneSky CLI - Work with the OneSky translation platform from the command line
#[derive(Parser, Debug)]
#[command(
    name = "onesky",
    version,
    about = "Work with the OneSky translation platform from the command line",
    long_about = "onesky opens an interactive shell over the OneSky platform API.\n\n\
                  Every platform endpoint is a shell command; type 'help' once inside.",
    after_help = "Credentials can also be given as ONESKY_API_KEY and ONESKY_API_SECRET."
)]
pub struct Cli {
    /// Public API key of the OneSky account
    #[arg(env = "ONESKY_API_KEY")]
    pub api_key: String,

    /// API secret used to sign requests
    #[arg(env = "ONESKY_API_SECRET", hide_env_values = true)]
    pub api_secret: String,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options that override the configuration file
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Base URL of the platform API
    #[arg(long, env = "ONESKY_API_URL")]
    pub api_url: Option<String>,

    /// Directory exported files are saved to
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to an alternative configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Never ask for confirmation before deleting
    #[arg(long, env = "ONESKY_NO_PROMPT")]
    pub no_prompt: bool,
}

impl Cli {
    /// Loads the configuration file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config> {
        match &self.global.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Builds the client settings: flags first, then the file, then defaults.
    pub fn client_config(&self, config: &Config) -> ClientConfig {
        let mut client = ClientConfig::new(&self.api_key, &self.api_secret);

        if let Some(url) = self.global.api_url.as_ref().or(config.core.api_url.as_ref()) {
            client = client.with_api_url(url.as_str());
        }
        if let Some(dir) = self
            .global
            .download_dir
            .as_ref()
            .or(config.core.download_dir.as_ref())
        {
            client = client.with_download_dir(dir);
        }
        let timeout = self
            .global
            .timeout
            .map(Duration::from_secs)
            .or_else(|| config.timeout());
        if let Some(timeout) = timeout {
            client = client.with_timeout(timeout);
        }

        client
    }

    /// Checks whether destructive commands should ask first.
    pub fn confirm_enabled(&self, config: &Config) -> bool {
        !self.global.no_prompt && config.prompt_enabled()
    }

    /// Opens the interactive shell on stdin and stdout.
    pub async fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let writer = OutputWriter::stdout();

        let client_config = self.client_config(&config).with_observer(request_echo(writer));
        debug!(?client_config, "Starting shell");
        let client = OneSkyClient::new(client_config).context("Failed to create HTTP client")?;

        let mut shell = Shell::new(client, std::io::stdin().lock(), std::io::stdout())
            .with_writer(writer)
            .with_confirm(self.confirm_enabled(&config));
        shell.run().await
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::api::DEFAULT_API_URL;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("onesky").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["key", "secret"]);
        let client = cli.client_config(&Config::default());

        assert_eq!(client.api_key(), "key");
        assert_eq!(client.api_url(), DEFAULT_API_URL);
        assert_eq!(client.download_dir(), Path::new("."));
        assert_eq!(client.timeout(), None);
        assert!(cli.confirm_enabled(&Config::default()));
    }

    #[test]
    fn test_flags_override_file() {
        let mut config = Config::default();
        config.core.api_url = Some("http://file/1/".to_string());
        config.core.download_dir = Some(PathBuf::from("from-file"));
        config.core.timeout_secs = Some(30);

        let cli = parse(&["key", "secret", "--api-url", "http://flag/1/", "--timeout", "5"]);
        let client = cli.client_config(&config);

        assert_eq!(client.api_url(), "http://flag/1/");
        assert_eq!(client.download_dir(), Path::new("from-file"));
        assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_prompt_switches() {
        let mut config = Config::default();
        assert!(!parse(&["k", "s", "--no-prompt"]).confirm_enabled(&config));

        config.core.prompt = "disabled".to_string();
        assert!(!parse(&["k", "s"]).confirm_enabled(&config));
    }
}

//
//  onesky-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # OneSky CLI Library
//!
//! A client library and interactive shell for the OneSky translation platform API.
//!
//! ## Overview
//!
//! Every endpoint of the platform API (project groups, projects, files, translations,
//! import tasks, quotations, orders and locales) goes through one authenticated request
//! executor. The executor signs the request, sends it, and normalizes the response into
//! an [`ApiResponse`]: the HTTP status code plus either a decoded JSON body or a record
//! describing a downloaded file.
//!
//! ## Module Structure
//!
//! - [`api`]: The request executor and the endpoint methods built on top of it
//! - [`auth`]: Request signing (`api_key`, `timestamp`, `dev_hash`)
//! - [`config`]: Configuration file management
//! - [`shell`]: The interactive command shell
//! - [`output`]: Terminal rendering of requests and responses
//! - [`cli`]: Command-line interface definition using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use onesky_cli::{ClientConfig, OneSkyClient, Pagination};
//!
//! # async fn example() -> Result<(), onesky_cli::ApiError> {
//! let config = ClientConfig::new("my-api-key", "my-api-secret");
//! let client = OneSkyClient::new(config)?;
//!
//! let response = client.project_group_list(&Pagination::default()).await?;
//! println!("{} {:?}", response.status, response.outcome);
//! # Ok(())
//! # }
//! ```

/// Platform API client.
///
/// Contains the authenticated request executor ([`OneSkyClient::execute`]) and one
/// module per resource family with the endpoint methods.
pub mod api;

/// Request signing.
///
/// Every request carries the API key, the current Unix timestamp and an MD5 digest
/// of the timestamp concatenated with the API secret.
pub mod auth;

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/onesky/config.toml`
/// - macOS: `~/Library/Application Support/onesky/config.toml`
/// - Windows: `%APPDATA%\onesky\config.toml`
pub mod config;

/// Terminal output for the interactive shell.
pub mod output;

/// Interactive command shell.
///
/// An explicit registry maps command names to endpoint handlers together with their
/// required and optional argument names.
pub mod shell;

pub use api::common::{ApiError, ApiResponse, Method, Outcome, Params, UploadSource};
pub use api::endpoints::Pagination;
pub use api::{ClientConfig, OneSkyClient, RequestObserver};
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "onesky";

/// Application version constant, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;
}

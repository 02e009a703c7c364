//
//  onesky-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the OneSky platform API.
//!
//! ## Architecture
//!
//! - [`client`]: The authenticated request executor shared by every endpoint
//! - [`endpoints`]: One module per resource family, each a thin mapping from typed
//!   arguments to a path template and a parameter set
//! - [`common`]: Shared types (errors, parameters, outcomes, uploads)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use onesky_cli::api::{ClientConfig, OneSkyClient};
//!
//! let client = OneSkyClient::new(
//!     ClientConfig::new("api-key", "api-secret").with_download_dir("translations"),
//! )
//! .expect("Failed to create client");
//! ```
//!
//! ## Error Handling
//!
//! Only transport and local file failures are errors. A non-success HTTP status is
//! returned as data in [`ApiResponse::status`](common::ApiResponse), and a body that
//! is not JSON decodes to an empty object.

/// The authenticated request executor.
///
/// Provides [`OneSkyClient`] and its [`ClientConfig`].
pub mod client;

/// Endpoint methods grouped by resource family.
pub mod endpoints;

/// Common types shared by the executor and the endpoints.
///
/// Includes:
/// - [`common::ApiError`]: Error type for API operations
/// - [`common::ApiResponse`]: Status code plus normalized outcome
/// - [`common::Params`]: Flat query parameter mapping
pub mod common;

pub use client::{ClientConfig, OneSkyClient, RequestObserver, DEFAULT_API_URL};

//
//  onesky-cli
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Low-level file operations used by [`Config`](super::Config) to locate and read
//! the configuration file.
//!
//! ## Notes
//!
//! - All functions accept `&Path` to support both `Path` and `PathBuf`
//! - Read operations return the raw file content as a `String`

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist
/// - The file cannot be opened (permissions, in use, etc.)
/// - The file contains invalid UTF-8 data
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))
}

/// Checks whether a configuration file exists at `path`.
///
/// # Notes
///
/// - This is a thin wrapper around `Path::is_file()`
/// - Returns `false` for directories
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}

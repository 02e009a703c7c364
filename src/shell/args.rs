//
//  onesky-cli
//  shell/args.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Positional argument access for shell command handlers.
//!
//! Arity is checked by the shell before a handler runs, so handlers may ask for
//! any required position directly. Optional positions past the end of the line
//! read as absent.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

/// The tokens following a command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    tokens: Vec<String>,
}

impl Args {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the missing parameter if the line was too short.
    pub fn text(&self, index: usize, name: &str) -> Result<&str> {
        self.opt_text(index)
            .ok_or_else(|| anyhow!("Missing value for {name}"))
    }

    pub fn opt_text(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Parses the token at `index` into `T`.
    ///
    /// ```rust
    /// use onesky_cli::shell::Args;
    ///
    /// let args = Args::new(vec!["42".into(), "abc".into()]);
    /// assert_eq!(args.parse::<u64>(0, "id").unwrap(), 42);
    /// assert!(args.parse::<u64>(1, "id").is_err());
    /// ```
    pub fn parse<T>(&self, index: usize, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        convert(self.text(index, name)?, name)
    }

    pub fn parse_opt<T>(&self, index: usize, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.opt_text(index)
            .map(|value| convert(value, name))
            .transpose()
    }

    /// Reads an optional yes/no flag. Accepts `true`/`false`, `yes`/`no` and `1`/`0`.
    pub fn flag_opt(&self, index: usize, name: &str) -> Result<Option<bool>> {
        self.opt_text(index)
            .map(|value| match value.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(true),
                "false" | "no" | "0" => Ok(false),
                _ => bail!("Invalid value for {name}: '{value}' (expected true or false)"),
            })
            .transpose()
    }

    /// Splits a comma-separated token into its non-empty parts.
    pub fn list(&self, index: usize, name: &str) -> Result<Vec<&str>> {
        let items: Vec<&str> = self
            .text(index, name)?
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect();
        if items.is_empty() {
            bail!("Invalid value for {name}: expected at least one entry");
        }
        Ok(items)
    }
}

fn convert<T>(value: &str, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e| anyhow!("Invalid value for {name}: '{value}' ({e})"))
}

//
//  onesky-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Terminal rendering for the interactive shell:
//!
//! - the echo of every outgoing request (`GET <url>` plus its encoded parameters)
//! - the status line, coloured by range (green below 300, yellow below 400, red
//!   otherwise)
//! - the response outcome as pretty-printed JSON
//!
//! Colour is decided once per [`OutputWriter`]; with colour disabled the output is
//! plain text, which is what the tests and piped sessions see.
//!
//! ## Example
//!
//! ```rust
//! use onesky_cli::output::{OutputWriter, StatusClass};
//!
//! let writer = OutputWriter::new(false);
//! assert_eq!(writer.format_status(404), "Status code: 404");
//! assert_eq!(StatusClass::of(302), StatusClass::Redirect);
//! ```

use std::fmt::Display;
use std::io::Write;

use console::{style, StyledObject};

use crate::api::common::{ApiResponse, Method, Params};

/// Range a status code falls into, which picks its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Below 300.
    Success,
    /// 300 to 399.
    Redirect,
    /// 400 and above.
    Error,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        if status < 300 {
            Self::Success
        } else if status < 400 {
            Self::Redirect
        } else {
            Self::Error
        }
    }
}

/// Writes shell output, with or without ANSI colour.
#[derive(Debug, Clone, Copy)]
pub struct OutputWriter {
    color: bool,
}

impl OutputWriter {
    /// Creates a writer.
    ///
    /// # Parameters
    ///
    /// * `color` - Whether to emit ANSI colour codes
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Creates a writer that colours output when stdout supports it.
    pub fn stdout() -> Self {
        Self::new(console::colors_enabled())
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    fn paint<D: Display>(&self, value: D) -> StyledObject<D> {
        style(value).force_styling(self.color)
    }

    /// The banner printed when the shell starts.
    pub fn intro(&self) -> String {
        format!(
            "\nWelcome to the OneSky command-line interface! Type {} for a list of commands.\n",
            self.paint("help").yellow()
        )
    }

    /// The input prompt.
    pub fn prompt(&self) -> String {
        self.paint("onesky> ").blue().to_string()
    }

    /// Renders an outgoing request as two lines: verb and URL, then the
    /// url-encoded parameters.
    pub fn format_request(&self, method: Method, url: &str, params: &Params) -> String {
        format!(
            "{} {}\nparams: {}",
            self.paint(method).green(),
            url,
            params.to_query_string()
        )
    }

    /// Renders the status line.
    pub fn format_status(&self, status: u16) -> String {
        let code = self.paint(status);
        let code = match StatusClass::of(status) {
            StatusClass::Success => code.green(),
            StatusClass::Redirect => code.yellow(),
            StatusClass::Error => code.red(),
        };
        format!("Status code: {code}")
    }

    /// Writes the status line followed by the pretty-printed outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_response<W: Write>(&self, out: &mut W, response: &ApiResponse) -> anyhow::Result<()> {
        writeln!(out, "{}", self.format_status(response.status))?;
        writeln!(out, "Response:")?;
        writeln!(out, "{}", serde_json::to_string_pretty(&response.outcome)?)?;
        Ok(())
    }

    /// Writes an error line prefixed with `Error:`.
    pub fn write_error<W: Write>(&self, out: &mut W, msg: &str) -> std::io::Result<()> {
        writeln!(out, "{} {}", self.paint("Error:").red().bold(), msg)
    }
}

/// Builds a request observer that echoes each outgoing request to stdout.
pub fn request_echo(writer: OutputWriter) -> impl Fn(Method, &str, &Params) + Send + Sync + 'static {
    move |method, url, params| println!("{}", writer.format_request(method, url, params))
}

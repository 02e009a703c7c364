//
//  onesky-cli
//  shell/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Interactive Shell
//!
//! A line-oriented command loop over the platform client. Each line names one
//! command from the [`Registry`] followed by its positional arguments, split with
//! shell quoting rules:
//!
//! ```text
//! onesky> project_group_create "My Group" en
//! onesky> translation_export 42 ja strings.po
//! onesky> file_delete 42 strings.po
//! Are you sure? (y/N): y
//! ```
//!
//! The shell reads from any [`BufRead`] and writes to any [`Write`], so sessions
//! can be driven from tests as well as from a terminal. Confirmation answers are
//! read from the same input as commands.
//!
//! ## Submodules
//!
//! - [`args`]: Typed access to positional arguments
//! - [`registry`]: Command descriptors and lookup

mod args;
mod commands;
mod registry;

pub use args::Args;
pub use registry::{CommandSpec, Handler, HandlerFuture, Registry};

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::api::OneSkyClient;
use crate::output::OutputWriter;

/// What the loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The interactive command loop.
pub struct Shell<R, W> {
    client: OneSkyClient,
    registry: Registry,
    input: R,
    output: W,
    writer: OutputWriter,
    confirm: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with the builtin commands, plain output and confirmation
    /// enabled.
    pub fn new(client: OneSkyClient, input: R, output: W) -> Self {
        Self {
            client,
            registry: Registry::builtin(),
            input,
            output,
            writer: OutputWriter::new(false),
            confirm: true,
        }
    }

    pub fn with_writer(mut self, writer: OutputWriter) -> Self {
        self.writer = writer;
        self
    }

    /// Enables or disables the confirmation prompt for destructive commands.
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consumes the shell and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `EOF` is typed or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only when the input or output stream fails. Failed
    /// commands are reported on the output and the loop continues.
    pub async fn run(&mut self) -> Result<()> {
        write!(self.output, "{}", self.writer.intro())?;
        writeln!(self.output)?;

        loop {
            write!(self.output, "{}", self.writer.prompt())?;
            self.output.flush()?;

            // Blocking read on the runtime thread; no other task runs while the
            // shell waits for a line.
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            if self.handle_line(line.trim()).await? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Executes one input line.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let mut tokens = match shell_words::split(line) {
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(self.output, "Parse error: {e}")?;
                return Ok(Flow::Continue);
            }
        };
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }
        let name = tokens.remove(0);

        match name.as_str() {
            "EOF" => {
                writeln!(self.output)?;
                return Ok(Flow::Exit);
            }
            "help" => {
                self.help(tokens.first().map(String::as_str))?;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        let Some(spec) = self.registry.get(&name).copied() else {
            writeln!(self.output, "*** Unknown syntax: {line}")?;
            return Ok(Flow::Continue);
        };

        if !spec.accepts(tokens.len()) {
            writeln!(self.output, "{}", spec.usage())?;
            return Ok(Flow::Continue);
        }

        if spec.confirm && self.confirm && !self.ask_confirmation()? {
            writeln!(self.output, "Canceled.")?;
            return Ok(Flow::Continue);
        }

        debug!(command = spec.name, args = tokens.len(), "Dispatching shell command");
        let result = (spec.handler)(&self.client, Args::new(tokens)).await;
        match result {
            Ok(response) => self.writer.write_response(&mut self.output, &response)?,
            Err(e) => self.writer.write_error(&mut self.output, &format!("{e:#}"))?,
        }
        Ok(Flow::Continue)
    }

    /// Asks until the answer is yes or no. Empty input and end of input count as no.
    fn ask_confirmation(&mut self) -> Result<bool> {
        loop {
            write!(self.output, "Are you sure? (y/N): ")?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Ok(false);
            }
            match answer.trim().to_ascii_lowercase().as_str() {
                "" | "n" | "no" => return Ok(false),
                "y" | "yes" => return Ok(true),
                _ => continue,
            }
        }
    }

    fn help(&mut self, topic: Option<&str>) -> Result<()> {
        match topic {
            Some(name) => match self.registry.get(name) {
                Some(spec) => writeln!(self.output, "{}\n  {}", spec.usage(), spec.summary)?,
                None => writeln!(self.output, "*** No help on {name}")?,
            },
            None => {
                writeln!(self.output, "Documented commands (type help <topic>):")?;
                for spec in self.registry.iter() {
                    writeln!(self.output, "  {:<34}{}", spec.name, spec.summary)?;
                }
                writeln!(self.output, "  {:<34}{}", "EOF", "Leave the shell")?;
            }
        }
        Ok(())
    }
}

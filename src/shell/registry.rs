//
//  onesky-cli
//  shell/registry.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Command registry for the interactive shell.
//!
//! Every shell command is described by a [`CommandSpec`]: its name, the names of
//! its required and optional positional parameters, whether it needs confirmation,
//! and the handler that maps its arguments onto a client call. The registry is a
//! plain sorted map built once at startup.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use super::args::Args;
use super::commands::COMMANDS;
use crate::api::common::ApiResponse;
use crate::api::OneSkyClient;

/// Future returned by a command handler.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<ApiResponse>> + 'a>>;

/// Converts parsed arguments into one client call.
pub type Handler = for<'a> fn(&'a OneSkyClient, Args) -> HandlerFuture<'a>;

/// Descriptor of a single shell command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    /// Ask `Are you sure?` before running.
    pub confirm: bool,
    pub summary: &'static str,
    pub handler: Handler,
}

impl CommandSpec {
    /// Checks whether `count` arguments satisfy the command's arity.
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.required.len() && count <= self.required.len() + self.optional.len()
    }

    /// Builds the usage line, e.g. `Usage: file_list <project_id> [page] [per_page]`.
    pub fn usage(&self) -> String {
        let mut usage = format!("Usage: {}", self.name);
        for name in self.required {
            usage.push_str(&format!(" <{name}>"));
        }
        for name in self.optional {
            usage.push_str(&format!(" [{name}]"));
        }
        usage
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .field("confirm", &self.confirm)
            .finish_non_exhaustive()
    }
}

/// Lookup table from command name to descriptor.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: BTreeMap<&'static str, CommandSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry holding every platform command.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for spec in COMMANDS {
            registry.register(*spec);
        }
        registry
    }

    /// Adds a command, replacing any existing one with the same name.
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.insert(spec.name, spec);
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Iterates over the commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

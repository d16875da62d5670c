//! # Command Registry
//!
//! Maps command names and aliases to handlers. A [`Registry`] is put together
//! with a [`RegistryBuilder`] before the read loop starts and never changes
//! afterwards.
//!
//! Lookups are exact and case-sensitive. A token is first looked up as a
//! command name, then as an alias.
//!
//! Names and aliases share one namespace. [`RegistryBuilder::build`] rejects
//! duplicate names, aliases shadowing a command and aliases registered twice,
//! so a bad table fails at start-up instead of silently resolving to whichever
//! entry came last.

use crate::commands::CmdResult;
use crate::context::Session;
use crate::error::{Result, VaError};
use crate::store::StateStore;
use std::collections::{BTreeMap, HashMap};

/// What a command sees when it runs.
pub struct CmdContext<'a, S: StateStore> {
    pub session: &'a mut Session<S>,
    pub registry: &'a Registry<S>,
}

pub type Handler<S> = fn(&mut CmdContext<'_, S>, &[String]) -> Result<CmdResult>;

pub struct CommandEntry<S: StateStore> {
    pub name: String,
    pub help: String,
    pub handler: Handler<S>,
}

impl<S: StateStore> CommandEntry<S> {
    /// First line of the help text, used in the overview.
    pub fn summary(&self) -> &str {
        self.help.lines().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub name: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpView {
    Overview(Vec<HelpEntry>),
    Command { name: String, text: String },
}

pub struct Registry<S: StateStore> {
    commands: BTreeMap<String, CommandEntry<S>>,
    aliases: HashMap<String, String>,
}

impl<S: StateStore> Registry<S> {
    pub fn builder() -> RegistryBuilder<S> {
        RegistryBuilder::new()
    }

    /// Canonical name for `token`, if it is a command or an alias.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        if let Some((name, _)) = self.commands.get_key_value(token) {
            return Some(name.as_str());
        }
        self.aliases.get(token).map(String::as_str)
    }

    pub fn entry(&self, name: &str) -> Option<&CommandEntry<S>> {
        self.commands.get(name)
    }

    /// Command names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// `(alias, target)` pairs, in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    /// Help for one command (aliases allowed) or an overview of all of them.
    /// Returns `None` when `name` does not resolve.
    pub fn help(&self, name: Option<&str>) -> Option<HelpView> {
        match name {
            None => Some(HelpView::Overview(
                self.commands
                    .values()
                    .map(|entry| HelpEntry {
                        name: entry.name.clone(),
                        summary: entry.summary().to_string(),
                    })
                    .collect(),
            )),
            Some(token) => {
                let entry = self.resolve(token).and_then(|n| self.entry(n))?;
                Some(HelpView::Command {
                    name: entry.name.clone(),
                    text: entry.help.clone(),
                })
            }
        }
    }
}

pub struct RegistryBuilder<S: StateStore> {
    entries: Vec<(CommandEntry<S>, Vec<String>)>,
}

impl<S: StateStore> Default for RegistryBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateStore> RegistryBuilder<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Queue a command. Help text is trimmed; the first line becomes its summary.
    pub fn register(
        mut self,
        name: &str,
        aliases: &[&str],
        help: &str,
        handler: Handler<S>,
    ) -> Self {
        let entry = CommandEntry {
            name: name.to_string(),
            help: help.trim().to_string(),
            handler,
        };
        let aliases = aliases.iter().map(|a| a.to_string()).collect();
        self.entries.push((entry, aliases));
        self
    }

    pub fn build(self) -> Result<Registry<S>> {
        let mut commands = BTreeMap::new();
        let mut pending_aliases = Vec::new();

        for (entry, aliases) in self.entries {
            if entry.name.is_empty() {
                return Err(VaError::Registry("command name cannot be empty".into()));
            }
            if commands.contains_key(&entry.name) {
                return Err(VaError::Registry(format!(
                    "command '{}' registered twice",
                    entry.name
                )));
            }
            for alias in aliases {
                pending_aliases.push((alias, entry.name.clone()));
            }
            commands.insert(entry.name.clone(), entry);
        }

        let mut aliases: HashMap<String, String> = HashMap::new();
        for (alias, target) in pending_aliases {
            if commands.contains_key(&alias) {
                return Err(VaError::Registry(format!(
                    "alias '{}' for '{}' collides with a command name",
                    alias, target
                )));
            }
            if let Some(existing) = aliases.get(&alias) {
                return Err(VaError::Registry(format!(
                    "alias '{}' claimed by both '{}' and '{}'",
                    alias, existing, target
                )));
            }
            aliases.insert(alias, target);
        }

        log::debug!(
            "registry built with {} commands and {} aliases",
            commands.len(),
            aliases.len()
        );
        Ok(Registry { commands, aliases })
    }
}

pub mod context;
pub mod session;

pub use context::CommandContext;
pub use session::{Outcome, Session};

use std::collections::HashMap;

use log::warn;

use crate::commands::{Builtin, Handler};
use crate::config::BuiltinsConfig;

/// Registry of built-ins, keyed by the name they answer to.
///
/// Names missing from the registry run as external programs.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    builtins: HashMap<String, Builtin>,
}

impl CommandRegistry {
    /// A registry with no built-ins: every stage runs externally.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every built-in under its own name.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for builtin in Builtin::ALL {
            registry.register(builtin.name(), builtin);
        }
        registry
    }

    /// Build the registry from configuration.
    pub fn from_config(config: &BuiltinsConfig) -> Self {
        let mut registry = Self::empty();

        for name in &config.enabled {
            if config.disabled.contains(name) {
                continue;
            }
            match Builtin::from_name(name) {
                Some(builtin) => registry.register(name.clone(), builtin),
                None => warn!("unknown built-in `{name}` in config, ignoring"),
            }
        }

        for (alias, target) in &config.aliases {
            match Builtin::from_name(target) {
                Some(builtin) => registry.register(alias.clone(), builtin),
                None => warn!("alias `{alias}` points at unknown built-in `{target}`, ignoring"),
            }
        }

        registry
    }

    /// Register (or re-point) `name`.
    pub fn register(&mut self, name: impl Into<String>, builtin: Builtin) {
        self.builtins.insert(name.into(), builtin);
    }

    /// Unregister `name` so it runs as an external program.
    pub fn remove(&mut self, name: &str) -> Option<Builtin> {
        self.builtins.remove(name)
    }

    /// Look up a built-in by exact name.
    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.builtins.get(name).copied()
    }

    /// How a stage called `name` runs.
    pub fn resolve(&self, name: &str) -> Handler {
        self.get(name).map_or(Handler::External, Handler::Builtin)
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }
}

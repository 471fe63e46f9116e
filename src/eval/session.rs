use log::debug;

use super::{CommandContext, CommandRegistry};
use crate::config::Config;
use crate::error::ShellError;
use crate::parse::{self, Pipeline};
use crate::scope::Scope;

/// Result of interpreting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output of the last stage; empty when nothing ran.
    Output(String),
    /// A stage named the exit keyword.
    Exit,
}

impl Outcome {
    pub fn output(&self) -> Option<&str> {
        match self {
            Outcome::Output(out) => Some(out),
            Outcome::Exit => None,
        }
    }
}

/// One interactive session: the variables and handlers that outlive a line.
#[derive(Debug)]
pub struct Session {
    scope: Scope,
    registry: CommandRegistry,
    exit_keyword: String,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self::with_registry(
            CommandRegistry::from_config(&config.builtins),
            config.settings.exit_keyword.clone(),
        )
    }

    pub fn with_registry(registry: CommandRegistry, exit_keyword: impl Into<String>) -> Self {
        Self {
            scope: Scope::new(),
            registry,
            exit_keyword: exit_keyword.into(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Interpret one line: classify, tokenize, expand and parse it, then run
    /// the resulting pipeline.
    ///
    /// An error aborts this line only. Assignments are visible to later
    /// tokens on the same line but reach the session Scope only once the
    /// whole line has parsed.
    pub fn interpret(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let rich = parse::richen_line(line)?;
        let tokens = parse::tokenize(&rich);
        let mut scope = self.scope.clone();
        let pipeline = parse::parse(&tokens, &mut scope)?;
        self.scope = scope;
        self.execute(&pipeline)
    }

    /// Run each stage in order, handing its output to the next as input.
    pub fn execute(&self, pipeline: &Pipeline) -> Result<Outcome, ShellError> {
        let mut output = None;

        for (stage, command) in pipeline.commands.iter().enumerate() {
            let name = command.name();
            if name.is_empty() {
                return Err(ShellError::EmptyCommand { stage });
            }
            if name == self.exit_keyword {
                debug!("stage {stage}: exit");
                return Ok(Outcome::Exit);
            }

            let handler = self.registry.resolve(&name);
            debug!("stage {stage}: {command} via {handler}");
            let ctx = CommandContext::new(name, command.args(), output.take());
            output = Some(handler.run(&ctx)?);
        }

        Ok(Outcome::Output(output.unwrap_or_default()))
    }
}

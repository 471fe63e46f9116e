//! richsh: a line-oriented command interpreter.
//!
//! A line goes through a strictly forward pipeline: every character is
//! classified as escaped or not, the classified characters are grouped into
//! words and `|` / `=` operators, `$name` references are expanded against the
//! session [`Scope`](scope::Scope), and the tokens are parsed into a
//! [`Pipeline`](parse::Pipeline) of commands. Each stage runs to completion and
//! its output becomes the next stage's input.
//!
//! # Architecture
//!
//! - **[`parse`]** — Character classifier, richener, tokenizer, expander, pipeline parser.
//! - **[`eval`]** — Session, handler registry, pipeline executor.
//! - **[`commands`]** — Built-ins (echo, cat, wc, pwd) and the external-process fallback.
//! - **[`scope`]** — Session variables.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — File logging to `~/.local/share/richsh/session.log`.

/// Built-in command implementations and external process spawning.
pub mod commands;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Errors that abort a line.
pub mod error;
/// Session state, handler registry and pipeline execution.
pub mod eval;
/// File-based session logging.
pub mod logging;
/// Line parsing: classified characters, tokens, expansion, pipelines.
pub mod parse;
/// Session variables.
pub mod scope;

pub use error::ShellError;
pub use eval::{Outcome, Session};

/// Interpret a single line in a fresh session built from the default config.
///
/// This is the main entry point for tests and simple usage.
/// For an interactive session, build a [`Session`] and keep it across lines.
pub fn interpret(line: &str) -> Result<Outcome, ShellError> {
    let config = config::Config::default_config();
    Session::new(&config).interpret(line)
}

//! Errors that abort the processing of a single input line.

use std::path::PathBuf;

/// Everything that can go wrong while interpreting one line.
///
/// None of these end the session: the caller reports the error and moves on
/// to the next line with Scope and registry intact.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The line ends with a backslash that has nothing left to escape.
    #[error("incorrect line: ends with an escape character")]
    TrailingEscape,

    /// A `|` where a command name is expected.
    #[error("syntax error near unexpected token `|`: {detail}")]
    DanglingPipe { detail: &'static str },

    /// `name =` with nothing on the right, or `=` with nothing on the left.
    #[error("incorrect assignment: {detail}")]
    IncompleteAssignment { detail: &'static str },

    /// The left-hand side of an assignment is not an identifier.
    #[error("incorrect assignment: `{name}` is not a valid identifier")]
    InvalidAssignment { name: String },

    /// A pipeline stage whose name expanded to nothing.
    #[error("empty command name in pipeline stage {stage}")]
    EmptyCommand { stage: usize },

    /// The external program could not be started.
    #[error("{name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A built-in failed to read a file.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

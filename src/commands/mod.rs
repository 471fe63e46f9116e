//! Command handlers: the built-ins and the external-process fallback.
//!
//! Built-ins form a closed set, so dispatch is a `match` over [`Builtin`]
//! rather than a table of function pointers. Anything not registered as a
//! built-in runs as an external program.

/// File dump; passes its input through when given no file.
pub mod cat;
/// Joins its arguments with spaces.
pub mod echo;
/// Spawns a real program and captures its stdout.
pub mod external;
/// Reports the working directory.
pub mod pwd;
/// Line, word and byte counts.
pub mod wc;

use std::fmt;
use std::path::Path;

use crate::error::ShellError;
use crate::eval::CommandContext;

/// A command implemented in-process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Echo,
    Cat,
    Wc,
    Pwd,
}

impl Builtin {
    pub const ALL: [Builtin; 4] = [Builtin::Echo, Builtin::Cat, Builtin::Wc, Builtin::Pwd];

    /// The name the built-in is registered under by default.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Echo => "echo",
            Builtin::Cat => "cat",
            Builtin::Wc => "wc",
            Builtin::Pwd => "pwd",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn run(self, ctx: &CommandContext) -> Result<String, ShellError> {
        match self {
            Builtin::Echo => echo::run(ctx),
            Builtin::Cat => cat::run(ctx),
            Builtin::Wc => wc::run(ctx),
            Builtin::Pwd => pwd::run(ctx),
        }
    }
}

/// How a pipeline stage gets executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Builtin(Builtin),
    External,
}

impl Handler {
    pub fn run(self, ctx: &CommandContext) -> Result<String, ShellError> {
        match self {
            Handler::Builtin(builtin) => builtin.run(ctx),
            Handler::External => external::run(ctx),
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Builtin(b) => write!(f, "builtin {}", b.name()),
            Handler::External => f.write_str("external"),
        }
    }
}

/// Read a whole file for a built-in, naming the path on failure.
fn read_file(path: &str) -> Result<String, ShellError> {
    std::fs::read_to_string(path).map_err(|source| ShellError::Io {
        path: Path::new(path).to_path_buf(),
        source,
    })
}

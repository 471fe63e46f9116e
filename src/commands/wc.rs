use std::fmt;

use super::read_file;
use crate::error::ShellError;
use crate::eval::CommandContext;

/// Counts as reported by `wc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
}

impl Counts {
    pub fn of(text: &str) -> Self {
        Self {
            lines: text.matches('\n').count(),
            words: text.split_whitespace().count(),
            bytes: text.len(),
        }
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lines, self.words, self.bytes)
    }
}

/// Counts the first argument's file, or the input when there is none.
pub fn run(ctx: &CommandContext) -> Result<String, ShellError> {
    let counts = match ctx.first_arg() {
        Some(path) => Counts::of(&read_file(path)?),
        None => Counts::of(ctx.input()),
    };
    Ok(counts.to_string())
}

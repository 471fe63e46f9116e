use std::path::PathBuf;

use crate::error::ShellError;
use crate::eval::CommandContext;

pub fn run(_ctx: &CommandContext) -> Result<String, ShellError> {
    let cwd = std::env::current_dir().map_err(|source| ShellError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    Ok(cwd.display().to_string())
}

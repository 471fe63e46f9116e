use super::read_file;
use crate::error::ShellError;
use crate::eval::CommandContext;

pub fn run(ctx: &CommandContext) -> Result<String, ShellError> {
    match ctx.first_arg() {
        Some(path) => read_file(path),
        None => Ok(ctx.input().to_string()),
    }
}

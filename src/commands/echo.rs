use crate::error::ShellError;
use crate::eval::CommandContext;

/// Arguments joined by single spaces. Input is ignored.
pub fn run(ctx: &CommandContext) -> Result<String, ShellError> {
    Ok(ctx.args.join(" "))
}

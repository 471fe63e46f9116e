use log::debug;

use super::expand::expand_token;
use super::types::{Command, Pipeline, Token};
use crate::error::ShellError;
use crate::scope::Scope;

/// Build a pipeline from tokens, performing assignments along the way.
///
/// Each token is expanded against `scope` at the moment it is consumed, so an
/// assignment is visible to every token after it on the same line.
///
/// `name = value` (spaces optional, the `=` is always its own token) in
/// command-name position sets a variable and produces no stage. An `=` in
/// argument position is an ordinary argument.
pub fn parse(tokens: &[Token], scope: &mut Scope) -> Result<Pipeline, ShellError> {
    let mut commands = Vec::new();
    let mut stage_pending = false;
    let mut i = 0;

    while let Some(token) = tokens.get(i) {
        if token.is_pipe() {
            return Err(ShellError::DanglingPipe {
                detail: "pipe with nothing before it",
            });
        }
        if token.is_assign() {
            return Err(ShellError::IncompleteAssignment {
                detail: "no left-hand-side name",
            });
        }

        if tokens.get(i + 1).is_some_and(Token::is_assign) {
            let value = tokens
                .get(i + 2)
                .filter(|t| t.is_word())
                .ok_or(ShellError::IncompleteAssignment {
                    detail: "no right-hand-side expression",
                })?;
            let name = expand_token(token, scope).to_string();
            let value = expand_token(value, scope).to_string();
            debug!("assign {name}={value}");
            scope.set(name, value)?;
            i += 3;
            continue;
        }

        let name = expand_token(token, scope);
        i += 1;
        let mut arguments = Vec::new();
        while let Some(arg) = tokens.get(i)
            && !arg.is_pipe()
        {
            arguments.push(expand_token(arg, scope));
            i += 1;
        }
        commands.push(Command { name, arguments });
        stage_pending = false;

        // tokens[i], if present, is a pipe
        if i < tokens.len() {
            stage_pending = true;
            i += 1;
        }
    }

    if stage_pending {
        return Err(ShellError::DanglingPipe {
            detail: "pipe with nothing after it",
        });
    }

    Ok(Pipeline { commands })
}

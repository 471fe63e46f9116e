use std::io::Write;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use crate::error::ShellError;
use crate::eval::CommandContext;

/// The argv as a copy-pasteable shell string, for log records.
fn render_argv(ctx: &CommandContext) -> String {
    let words = std::iter::once(ctx.name.as_str()).chain(ctx.args.iter().map(String::as_str));
    shlex::try_join(words).unwrap_or_else(|_| format!("{} {}", ctx.name, ctx.args.join(" ")))
}

/// Wait for the stdin writer. Returns false, after logging, if it panicked.
fn join_writer(writer: JoinHandle<()>, ctx: &CommandContext) -> bool {
    let joined = writer.join().is_ok();
    if !joined {
        warn!("{}: stdin writer thread panicked", render_argv(ctx));
    }
    joined
}

/// Run `ctx.name` as a program and capture its stdout.
///
/// The stage input, if any, is written to the child's stdin from a separate
/// thread so a child that fills its stdout pipe before draining stdin cannot
/// deadlock us. A non-zero exit is logged and its output returned anyway.
pub fn run(ctx: &CommandContext) -> Result<String, ShellError> {
    let spawn_error = |source| ShellError::Spawn {
        name: ctx.name.clone(),
        source,
    };

    debug!("spawning {}", render_argv(ctx));
    let mut child = Command::new(&ctx.name)
        .args(&ctx.args)
        .stdin(if ctx.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(spawn_error)?;

    let writer = match (child.stdin.take(), ctx.stdin.clone()) {
        (Some(mut pipe), Some(input)) => Some(thread::spawn(move || {
            // the child may exit without reading; a broken pipe is not our error
            let _ = pipe.write_all(input.as_bytes());
        })),
        _ => None,
    };

    let output = child.wait_with_output().map_err(spawn_error)?;
    if let Some(writer) = writer {
        join_writer(writer, ctx);
    }

    if !output.status.success() {
        warn!("{} exited with {}", render_argv(ctx), output.status);
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

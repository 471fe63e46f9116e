/// What a handler gets to see when one pipeline stage runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// The stringified command name.
    pub name: String,
    /// Stringified arguments, quote marks and escapes included.
    pub args: Vec<String>,
    /// Output of the previous stage; `None` for the first stage.
    pub stdin: Option<String>,
}

impl CommandContext {
    pub fn new(name: impl Into<String>, args: Vec<String>, stdin: Option<String>) -> Self {
        Self {
            name: name.into(),
            args,
            stdin,
        }
    }

    /// The stage input, empty for the first stage.
    pub fn input(&self) -> &str {
        self.stdin.as_deref().unwrap_or("")
    }

    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

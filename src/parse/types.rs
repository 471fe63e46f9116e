//! Types produced by the line parser and consumed by the eval layer.

use std::fmt;

use super::rich::RichChar;

/// Which quoting region the scanner is currently in.
///
/// The richener, the tokenizer and the expander all track quotes through
/// [`QuoteState::transition`], so the three passes cannot disagree on where a
/// quoted region starts or ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    #[default]
    Outside,
    InSingle,
    InDouble,
}

impl QuoteState {
    /// State after consuming `c`.
    ///
    /// Only unescaped quotes toggle, and a quote of one kind has no effect
    /// inside the other kind.
    pub fn transition(self, c: RichChar) -> Self {
        match self {
            QuoteState::Outside if c.is_single_quote() => QuoteState::InSingle,
            QuoteState::Outside if c.is_double_quote() => QuoteState::InDouble,
            QuoteState::InSingle if c.is_single_quote() => QuoteState::Outside,
            QuoteState::InDouble if c.is_double_quote() => QuoteState::Outside,
            state => state,
        }
    }

    /// Backslash escapes are recognized everywhere except inside single quotes.
    pub fn allows_escapes(self) -> bool {
        self != QuoteState::InSingle
    }
}

/// What a token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A shell word, possibly quoted.
    Word,
    /// `|` — pipe stdout of the previous stage into the next
    Pipe,
    /// `=` — assignment operator
    Assign,
}

/// One shell word or single-character operator.
///
/// Words keep their quote marks and escape markers; rendering a token with
/// `Display` reproduces the source text it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    chars: Vec<RichChar>,
}

impl Token {
    pub fn word(chars: Vec<RichChar>) -> Self {
        Self {
            kind: TokenKind::Word,
            chars,
        }
    }

    /// Build an operator token from an unescaped `|` or `=`.
    ///
    /// Anything else becomes a one-character word.
    pub fn operator(c: RichChar) -> Self {
        let kind = if c.is_pipe() {
            TokenKind::Pipe
        } else if c.is_equal_sign() {
            TokenKind::Assign
        } else {
            TokenKind::Word
        };
        Self {
            kind,
            chars: vec![c],
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn chars(&self) -> &[RichChar] {
        &self.chars
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_pipe(&self) -> bool {
        self.kind == TokenKind::Pipe
    }

    pub fn is_assign(&self) -> bool {
        self.kind == TokenKind::Assign
    }

    /// Quoting context of the whole token, decided by its first character.
    pub fn quote_context(&self) -> QuoteState {
        match self.chars.first() {
            Some(c) => QuoteState::Outside.transition(*c),
            None => QuoteState::Outside,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| fmt::Display::fmt(c, f))
    }
}

/// One pipeline stage: a name and its arguments, already expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: Token,
    pub arguments: Vec<Token>,
}

impl Command {
    /// The stringified command name.
    pub fn name(&self) -> String {
        self.name.to_string()
    }

    /// The stringified arguments, in order.
    pub fn args(&self) -> Vec<String> {
        self.arguments.iter().map(Token::to_string).collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.arguments {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Commands joined by `|`, in execution order.
///
/// An empty pipeline means the line held only assignments, or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    pub commands: Vec<Command>,
}

impl Pipeline {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Token {
        Token::word(s.chars().map(RichChar::plain).collect())
    }

    #[test]
    fn quote_transition_ignores_other_kind() {
        let state = QuoteState::InDouble.transition(RichChar::plain('\''));
        assert_eq!(state, QuoteState::InDouble);
        let state = QuoteState::InSingle.transition(RichChar::plain('"'));
        assert_eq!(state, QuoteState::InSingle);
    }

    #[test]
    fn quote_transition_ignores_escaped() {
        let state = QuoteState::Outside.transition(RichChar::escaped('"'));
        assert_eq!(state, QuoteState::Outside);
    }

    #[test]
    fn operator_kinds() {
        assert!(Token::operator(RichChar::plain('|')).is_pipe());
        assert!(Token::operator(RichChar::plain('=')).is_assign());
        assert!(Token::operator(RichChar::escaped('|')).is_word());
    }

    #[test]
    fn token_context_from_first_char() {
        assert_eq!(word("'a'").quote_context(), QuoteState::InSingle);
        assert_eq!(word("\"a\"").quote_context(), QuoteState::InDouble);
        assert_eq!(word("a'b'").quote_context(), QuoteState::Outside);
        let escaped = Token::word(vec![RichChar::escaped('\''), RichChar::plain('a')]);
        assert_eq!(escaped.quote_context(), QuoteState::Outside);
    }

    #[test]
    fn pipeline_display() {
        let pipeline = Pipeline {
            commands: vec![
                Command {
                    name: word("echo"),
                    arguments: vec![word("a"), word("b")],
                },
                Command {
                    name: word("wc"),
                    arguments: vec![],
                },
            ],
        };
        assert_eq!(pipeline.to_string(), "echo a b | wc");
        assert_eq!(pipeline.len(), 2);
    }
}

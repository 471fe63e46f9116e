//! Escape-aware character classification and the line richener.

use std::fmt;

use super::types::QuoteState;
use crate::error::ShellError;

/// The escape introducer.
pub const ESCAPE: char = '\\';

/// Characters whose escaped form reads as an escape sequence (`\n`, `\ `, ...)
/// rather than a literal, so they never extend an identifier.
const EXPANDABLE_WHEN_ESCAPED: &[char] = &['n', 't', 'v', 'r', ' ', '\\', '\'', '"'];

/// A source character plus whether it was written behind a backslash.
///
/// Escaped characters never carry their special meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RichChar {
    ch: char,
    escaped: bool,
}

impl RichChar {
    pub const fn new(ch: char, escaped: bool) -> Self {
        Self { ch, escaped }
    }

    pub const fn plain(ch: char) -> Self {
        Self::new(ch, false)
    }

    pub const fn escaped(ch: char) -> Self {
        Self::new(ch, true)
    }

    pub fn ch(self) -> char {
        self.ch
    }

    pub fn is_escaped(self) -> bool {
        self.escaped
    }

    fn special(self, c: char) -> bool {
        !self.escaped && self.ch == c
    }

    pub fn is_space(self) -> bool {
        !self.escaped && self.ch.is_whitespace()
    }

    pub fn is_single_quote(self) -> bool {
        self.special('\'')
    }

    pub fn is_double_quote(self) -> bool {
        self.special('"')
    }

    pub fn is_quote(self) -> bool {
        self.is_single_quote() || self.is_double_quote()
    }

    pub fn is_pipe(self) -> bool {
        self.special('|')
    }

    pub fn is_equal_sign(self) -> bool {
        self.special('=')
    }

    pub fn is_dollar(self) -> bool {
        self.special('$')
    }

    fn is_escape_sequence(self) -> bool {
        self.escaped && EXPANDABLE_WHEN_ESCAPED.contains(&self.ch)
    }

    pub fn is_identifier_char(self) -> bool {
        !self.is_escape_sequence() && (self.ch.is_ascii_alphanumeric() || self.ch == '_')
    }

    pub fn is_identifier_first_char(self) -> bool {
        !self.is_escape_sequence() && (self.ch.is_ascii_alphabetic() || self.ch == '_')
    }
}

impl fmt::Display for RichChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.escaped {
            write!(f, "{ESCAPE}{}", self.ch)
        } else {
            write!(f, "{}", self.ch)
        }
    }
}

/// Classify every character of `line`, resolving backslash escapes.
///
/// A backslash outside quotes or inside double quotes escapes exactly one
/// following character; inside single quotes it is an ordinary character.
/// Unterminated quotes are accepted here.
pub fn richen_line(line: &str) -> Result<Vec<RichChar>, ShellError> {
    let mut rich = Vec::with_capacity(line.len());
    let mut state = QuoteState::Outside;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c == ESCAPE && state.allows_escapes() {
            let escaped = chars.next().ok_or(ShellError::TrailingEscape)?;
            rich.push(RichChar::escaped(escaped));
            continue;
        }
        let c = RichChar::plain(c);
        state = state.transition(c);
        rich.push(c);
    }

    Ok(rich)
}

/// Re-serialize classified characters back into source text.
pub fn render(chars: &[RichChar]) -> String {
    chars.iter().map(RichChar::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(line: &str) {
        let rich = richen_line(line).unwrap();
        assert_eq!(render(&rich), line, "line: {line}");
    }

    #[test]
    fn escaped_loses_special_meaning() {
        for c in ['|', '=', '$', '\'', '"', ' '] {
            let rc = RichChar::escaped(c);
            assert!(!rc.is_pipe());
            assert!(!rc.is_equal_sign());
            assert!(!rc.is_dollar());
            assert!(!rc.is_quote());
            assert!(!rc.is_space());
        }
    }

    #[test]
    fn identifier_chars() {
        assert!(RichChar::plain('a').is_identifier_first_char());
        assert!(RichChar::plain('_').is_identifier_first_char());
        assert!(!RichChar::plain('1').is_identifier_first_char());
        assert!(RichChar::plain('1').is_identifier_char());
        assert!(!RichChar::plain('-').is_identifier_char());
    }

    #[test]
    fn escape_sequence_letters_not_identifier() {
        assert!(!RichChar::escaped('n').is_identifier_char());
        assert!(!RichChar::escaped('t').is_identifier_first_char());
        // escaped without cause: still an identifier letter
        assert!(RichChar::escaped('x').is_identifier_char());
    }

    #[test]
    fn richen_marks_escapes() {
        let rich = richen_line(r"a\|b").unwrap();
        assert_eq!(
            rich,
            vec![
                RichChar::plain('a'),
                RichChar::escaped('|'),
                RichChar::plain('b')
            ]
        );
    }

    #[test]
    fn richen_no_escapes_in_single_quotes() {
        let rich = richen_line(r"'\n'").unwrap();
        assert!(rich.iter().all(|c| !c.is_escaped()));
        assert_eq!(rich.len(), 4);
    }

    #[test]
    fn richen_escapes_in_double_quotes() {
        let rich = richen_line(r#""a\"b""#).unwrap();
        assert_eq!(rich[2], RichChar::escaped('"'));
        assert_eq!(rich.len(), 5);
    }

    #[test]
    fn richen_double_inside_single() {
        // the " is literal inside single quotes, so the \ after the closing '
        // is an escape again
        let rich = richen_line(r#"'"'\x"#).unwrap();
        assert_eq!(rich.last(), Some(&RichChar::escaped('x')));
    }

    #[test]
    fn trailing_escape_rejected() {
        assert!(matches!(
            richen_line(r"echo \"),
            Err(ShellError::TrailingEscape)
        ));
    }

    #[test]
    fn trailing_backslash_in_single_quotes_accepted() {
        assert!(richen_line(r"echo '\").is_ok());
    }

    #[test]
    fn unterminated_quote_accepted() {
        assert!(richen_line("echo \"abc").is_ok());
    }

    #[test]
    fn round_trips() {
        for line in [
            "echo abc",
            "",
            "$",
            r"echo \'",
            r#"echo \""#,
            r"echo \\",
            r"echo oo\o",
            r"echo \$oo",
            "echo '$meow'",
            r#"echo '"$meow"'"#,
            r"echo '\'",
            r"echo '\'''",
            r#"a "b \" c" 'd'"#,
            "x=1 | y = 2",
        ] {
            round_trip(line);
        }
    }
}

use super::rich::RichChar;
use super::types::{QuoteState, Token};
use crate::scope::Scope;

const DOLLAR: RichChar = RichChar::plain('$');

enum ExpandState {
    Plain,
    SawDollar,
    ReadingName(String),
}

/// Handle `c` as ordinary text: either it opens a reference or it is copied.
fn plain(c: RichChar, out: &mut Vec<RichChar>) -> ExpandState {
    if c.is_dollar() {
        ExpandState::SawDollar
    } else {
        out.push(c);
        ExpandState::Plain
    }
}

fn splice(name: &str, scope: &Scope, out: &mut Vec<RichChar>) {
    out.extend(scope.get(name).chars().map(RichChar::plain));
}

/// Replace `$name` references in one token with their values from `scope`.
///
/// Operators and single-quoted words come back unchanged. Substituted text is
/// made of plain characters, so it never turns into an escape or a quote.
/// A `$` not followed by an identifier is kept literally.
pub fn expand_token(token: &Token, scope: &Scope) -> Token {
    if !token.is_word() || token.quote_context() == QuoteState::InSingle {
        return token.clone();
    }

    let mut out = Vec::with_capacity(token.chars().len());
    let mut state = ExpandState::Plain;

    for &c in token.chars() {
        state = match state {
            ExpandState::Plain => plain(c, &mut out),
            ExpandState::SawDollar if c.is_identifier_first_char() => {
                ExpandState::ReadingName(c.ch().to_string())
            }
            ExpandState::SawDollar => {
                out.push(DOLLAR);
                out.push(c);
                ExpandState::Plain
            }
            ExpandState::ReadingName(mut name) if c.is_identifier_char() => {
                name.push(c.ch());
                ExpandState::ReadingName(name)
            }
            ExpandState::ReadingName(name) => {
                splice(&name, scope, &mut out);
                plain(c, &mut out)
            }
        };
    }

    match state {
        ExpandState::Plain => {}
        ExpandState::SawDollar => out.push(DOLLAR),
        ExpandState::ReadingName(name) => splice(&name, scope, &mut out),
    }

    Token::word(out)
}

/// Expand every token independently; no reference spans two tokens.
pub fn expand_identifiers(tokens: &[Token], scope: &Scope) -> Vec<Token> {
    tokens.iter().map(|t| expand_token(t, scope)).collect()
}

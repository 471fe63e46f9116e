use super::rich::RichChar;
use super::types::{QuoteState, Token};

/// Move the in-progress word (if any) onto the token list.
fn flush(tokens: &mut Vec<Token>, word: &mut Vec<RichChar>) {
    if !word.is_empty() {
        tokens.push(Token::word(std::mem::take(word)));
    }
}

/// Split classified characters into words and `|` / `=` operators.
///
/// Outside quotes, whitespace separates words and every unescaped `|` or `=`
/// is a token of its own. An opening quote starts a fresh word that runs up to
/// and including the matching closing quote; an unterminated quote runs to the
/// end of the line.
pub fn tokenize(line: &[RichChar]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = Vec::new();
    let mut state = QuoteState::Outside;

    for &c in line {
        match state {
            QuoteState::Outside => {
                if c.is_pipe() || c.is_equal_sign() {
                    flush(&mut tokens, &mut word);
                    tokens.push(Token::operator(c));
                } else if c.is_quote() {
                    flush(&mut tokens, &mut word);
                    word.push(c);
                    state = state.transition(c);
                } else if c.is_space() {
                    flush(&mut tokens, &mut word);
                } else {
                    word.push(c);
                }
            }
            QuoteState::InSingle | QuoteState::InDouble => {
                word.push(c);
                state = state.transition(c);
                if state == QuoteState::Outside {
                    flush(&mut tokens, &mut word);
                }
            }
        }
    }
    flush(&mut tokens, &mut word);

    tokens
}

pub mod expand;
pub mod pipeline;
pub mod rich;
pub mod tokenize;
pub mod types;

pub use expand::{expand_identifiers, expand_token};
pub use pipeline::parse;
pub use rich::{RichChar, render, richen_line};
pub use tokenize::tokenize;
pub use types::{Command, Pipeline, QuoteState, Token, TokenKind};

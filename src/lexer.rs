use crate::error::CompileError;
use logos::{Logos, SpannedIter};
use thiserror::Error;

/// Reserved: every character of the input belongs to some token, so the lexer currently
/// never fails.
#[derive(Default, Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    #[default]
    #[error("invalid token")]
    InvalidToken,
}

/// The tokens of a search expression.
///
/// Operators are not tokens on their own: ` AND ` and ` OR ` are recognized by the splitter as a
/// [`Token::Word`] surrounded by two [`Token::Space`], which keeps `ANDROID` or `a AND(b)` as
/// plain text. Every character of the input belongs to exactly one token.
#[derive(Clone, Copy, Debug, Logos, PartialEq, Eq)]
#[logos(error = LexicalError)]
pub enum Token<'source> {
    #[token("(")]
    LeftParenthesis,
    #[token(")")]
    RightParenthesis,
    #[token(" ")]
    Space,
    #[regex(r"[^() ]+", |lex| lex.slice())]
    Word(&'source str),
}

pub type Spanned<Tok, Location, Error> = Result<(Location, Tok, Location), Error>;

pub struct Lexer<'input> {
    token_stream: SpannedIter<'input, Token<'input>>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            token_stream: Token::lexer(input).spanned(),
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Token<'input>, usize, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.token_stream.next().map(|(token, span)| {
            Ok((
                span.start,
                token.map_err(CompileError::Lexical)?,
                span.end,
            ))
        })
    }
}

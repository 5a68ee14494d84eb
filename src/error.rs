use crate::lexer::LexicalError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Reserved for lexers that are not total; not produced today.
    #[error("failed to lex the expression with {0:?}")]
    Lexical(LexicalError),
    #[error("unbalanced parentheses at byte {position}")]
    UnbalancedParentheses { position: usize },
    #[error("the expression (or one of its operands) is empty")]
    EmptyExpression,
    #[error("{fragment:?} contains parentheses but is not wholly enclosed by them")]
    UnexpectedParenthesis { fragment: String },
    #[error("parentheses are nested deeper than the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

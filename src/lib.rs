//! Compile boolean search expressions into [disjunctive normal form](https://en.wikipedia.org/wiki/Disjunctive_normal_form).
//!
//! A search expression combines terms with `AND`, `OR` and parentheses. Once compiled, it becomes
//! a list of clauses, each clause being a list of terms: the expression holds for a document
//! exactly when every term of at least one clause is found in it. A matcher can then test a
//! document with flat containment checks only.
//!
//! # Examples
//!
//! ```
//! use boolean_dnf::compile;
//!
//! let dnf = compile("(Java OR (spring AND hibernate)) AND (Bangalore OR chennai)").unwrap();
//!
//! assert_eq!(
//!     vec![
//!         vec!["Java", "Bangalore"],
//!         vec!["Java", "chennai"],
//!         vec!["spring", "hibernate", "Bangalore"],
//!         vec!["spring", "hibernate", "chennai"],
//!     ],
//!     dnf.into_vec()
//! );
//! ```
//!
//! # Grammar
//!
//! ```text
//! Expr := Or
//! Or   := And (" OR " And)*
//! And  := Atom (" AND " Atom)*
//! Atom := Term | "(" Expr ")"
//! ```
//!
//! * Operators are case-sensitive and need a space on each side: `a and b`, `a AND(b)` or
//!   `ANDROID` are plain terms;
//! * Any run of whitespace (tabs and newlines included) counts as a single space, and terms are
//!   trimmed;
//! * `AND` binds tighter than `OR`.
//!
//! # Ordering
//!
//! The clauses follow the left-to-right order of the alternatives in the expression. Inside a
//! conjunction, the terms coming from parenthesized groups are placed before the plain terms:
//!
//! ```
//! let dnf = boolean_dnf::compile("a AND (b OR c)").unwrap();
//! assert_eq!("b AND a OR c AND a", dnf.to_string());
//! ```
//!
//! Nothing is deduplicated: `a AND a` compiles to a single clause holding `a` twice. The number
//! of clauses grows with the product of the alternatives of every conjoined group, which is
//! inherent to the normal form.
mod compiler;
mod dnf;
mod error;
mod lexer;
mod split;
mod strings;
#[cfg(test)]
mod test_utils;

pub use crate::{
    compiler::{compile, Compiler},
    dnf::{Clause, Dnf, Term},
    error::CompileError,
    lexer::LexicalError,
    split::Delimiter,
};

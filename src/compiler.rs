use crate::{
    dnf::{Clause, Dnf, Term},
    error::CompileError,
    split::{split_top_level, Delimiter},
    strings::{
        check_balance, contains_brackets, enclosed_content, normalize_whitespace,
        strip_outer_brackets,
    },
};
use log::{debug, trace};

/// Compile `expression` into disjunctive normal form with the default [`Compiler`].
///
/// # Examples
///
/// ```rust
/// let dnf = boolean_dnf::compile("a AND (b OR c)").unwrap();
/// assert_eq!(
///     vec![vec!["b", "a"], vec!["c", "a"]],
///     dnf.into_vec()
/// );
/// ```
#[inline]
pub fn compile(expression: &str) -> Result<Dnf, CompileError> {
    Compiler::default().compile(expression)
}

/// Compiles `AND`/`OR` expressions into [`Dnf`].
///
/// The expression tree is never built: each level of parentheses is compiled recursively and
/// the partial results are combined with the [`Dnf`] algebra. The recursion depth equals the
/// nesting depth of the parentheses and is bounded by [`Compiler::max_depth`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compiler {
    max_depth: usize,
}

impl Default for Compiler {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

impl Compiler {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many levels of parentheses can be nested inside the expression.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boolean_dnf::{CompileError, Compiler};
    ///
    /// let compiler = Compiler::new().with_max_depth(1);
    /// assert!(compiler.compile("a AND (b OR c)").is_ok());
    /// assert_eq!(
    ///     Err(CompileError::NestingTooDeep { limit: 1 }),
    ///     compiler.compile("a AND (b OR (c AND (d OR e)))")
    /// );
    /// ```
    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Compile `expression` into disjunctive normal form.
    ///
    /// # Errors
    ///
    /// * [`CompileError::UnbalancedParentheses`] when a parenthesis is never closed or closes
    ///   nothing;
    /// * [`CompileError::EmptyExpression`] when the expression, or any of its operands, is blank;
    /// * [`CompileError::UnexpectedParenthesis`] when an operand mixes text and parentheses, as in
    ///   `x(y)`;
    /// * [`CompileError::NestingTooDeep`] when the parentheses are nested deeper than
    ///   [`Compiler::max_depth`].
    pub fn compile(&self, expression: &str) -> Result<Dnf, CompileError> {
        check_balance(expression)?;
        let dnf = self.compile_at(expression, 0)?;
        debug!("compiled {expression:?} into {} clause(s)", dnf.len());
        Ok(dnf)
    }

    fn compile_at(&self, expression: &str, depth: usize) -> Result<Dnf, CompileError> {
        if depth > self.max_depth {
            return Err(CompileError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        trace!("compiling {expression:?} at depth {depth}");

        let expression = normalize_whitespace(strip_outer_brackets(expression));
        if expression.trim().is_empty() {
            return Err(CompileError::EmptyExpression);
        }

        let alternatives = split_top_level(&expression, Delimiter::Or)?
            .into_iter()
            .map(|alternative| self.compile_conjunction(alternative, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dnf::concat(alternatives))
    }

    /// Compile an operand of `OR`. The groups are conjoined first, in order, and the plain terms
    /// are appended at the end of every clause.
    fn compile_conjunction(&self, expression: &str, depth: usize) -> Result<Dnf, CompileError> {
        let mut conjuncts = Vec::new();
        let mut terms = Vec::new();
        for operand in split_top_level(expression, Delimiter::And)? {
            let operand = operand.trim();
            if operand.is_empty() {
                return Err(CompileError::EmptyExpression);
            }

            if !contains_brackets(operand) {
                terms.push(Term::from(operand));
                continue;
            }

            if enclosed_content(operand).is_none() {
                return Err(CompileError::UnexpectedParenthesis {
                    fragment: operand.to_string(),
                });
            }
            conjuncts.push(self.compile_at(operand, depth + 1)?);
        }
        conjuncts.push(Dnf::from(Clause::from(terms)));

        Ok(Dnf::fold_and(conjuncts))
    }
}

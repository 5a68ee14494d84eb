use crate::split::Delimiter;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// An atomic search token.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term(String);

impl Term {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A conjunction of [`Term`]s.
///
/// The order of the terms carries no meaning but is kept stable so that compiling the same
/// expression always yields the same clauses. Repeated terms are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clause(Vec<Term>);

impl Clause {
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.0.iter()
    }

    /// Conjunction of two clauses: the terms of `self` followed by the terms of `other`.
    pub fn and_merge(&self, other: &Clause) -> Clause {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl From<Vec<Term>> for Clause {
    fn from(terms: Vec<Term>) -> Self {
        Self(terms)
    }
}

impl FromIterator<Term> for Clause {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Clause {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(&Delimiter::And.to_string()))
    }
}

/// A boolean expression in disjunctive normal form: it holds when at least one of its
/// [`Clause`]s holds.
///
/// # Algebra
///
/// * [`Dnf::cross_product`] is the conjunction of two DNFs. Every clause of the left-hand side
///   is merged with every clause of the right-hand side, the left-hand side driving the outer
///   loop;
/// * [`Dnf::fold_and`] conjoins a sequence of DNFs, starting from [`Dnf::identity`];
/// * [`Dnf::concat`] is the disjunction of a sequence of DNFs.
///
/// The identity holds a single empty clause, not zero clauses: the cross product of any DNF
/// with it is that DNF, whereas the cross product with an empty DNF is always empty (`false`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dnf(Vec<Clause>);

impl Dnf {
    /// The neutral element of [`Dnf::cross_product`], i.e. `true`.
    #[inline]
    pub fn identity() -> Self {
        Self(vec![Clause::default()])
    }

    #[inline]
    pub fn clauses(&self) -> &[Clause] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.0.iter()
    }

    pub fn cross_product(&self, other: &Dnf) -> Dnf {
        self.iter()
            .cartesian_product(other.iter())
            .map(|(left, right)| left.and_merge(right))
            .collect()
    }

    pub fn fold_and<I>(dnfs: I) -> Dnf
    where
        I: IntoIterator<Item = Dnf>,
    {
        dnfs.into_iter()
            .fold(Self::identity(), |result, dnf| result.cross_product(&dnf))
    }

    pub fn concat<I>(dnfs: I) -> Dnf
    where
        I: IntoIterator<Item = Dnf>,
    {
        dnfs.into_iter().flatten().collect()
    }

    /// Convert into plain nested lists of strings.
    pub fn into_vec(self) -> Vec<Vec<String>> {
        self.into_iter()
            .map(|clause| clause.into_iter().map(Term::into_string).collect())
            .collect()
    }
}

impl From<Clause> for Dnf {
    fn from(clause: Clause) -> Self {
        Self(vec![clause])
    }
}

impl From<Vec<Clause>> for Dnf {
    fn from(clauses: Vec<Clause>) -> Self {
        Self(clauses)
    }
}

impl FromIterator<Clause> for Dnf {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Dnf {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dnf {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Write the DNF back as an expression: clauses joined by ` OR `, terms by ` AND `.
///
/// Compiling the written expression yields the same DNF as long as no term contains the
/// operators or parentheses.
impl Display for Dnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(&Delimiter::Or.to_string()))
    }
}

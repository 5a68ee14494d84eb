use crate::{
    error::CompileError,
    lexer::{Lexer, Token},
};

/// The operators of the expression grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    And,
    Or,
}

impl Delimiter {
    #[inline]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " {} ", self.keyword())
    }
}

/// Split `input` on every ` AND ` (or ` OR `) that is not nested inside parentheses.
///
/// Occurrences are matched left to right without overlapping, so `a AND AND b` splits into `a`
/// and `AND b`. A `)` without a matching `(` is treated as closing nothing; callers are expected
/// to reject unbalanced input beforehand.
pub(crate) fn split_top_level<'a>(
    input: &'a str,
    delimiter: Delimiter,
) -> Result<Vec<&'a str>, CompileError> {
    let tokens = Lexer::new(input).collect::<Result<Vec<_>, _>>()?;
    let keyword = delimiter.keyword();

    let mut fragments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut index = 0;
    while index < tokens.len() {
        match &tokens[index..] {
            [(_, Token::LeftParenthesis, _), ..] => depth += 1,
            [(_, Token::RightParenthesis, _), ..] => depth = depth.saturating_sub(1),
            [(space, Token::Space, _), (_, Token::Word(word), _), (_, Token::Space, end), ..]
                if depth == 0 && *word == keyword =>
            {
                fragments.push(&input[start..*space]);
                start = *end;
                index += 3;
                continue;
            }
            _ => {}
        }
        index += 1;
    }
    fragments.push(&input[start..]);

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_the_delimiter() {
        let actual = split_top_level("a AND b AND c", Delimiter::And);
        assert_eq!(Ok(vec!["a", "b", "c"]), actual);
    }

    #[test]
    fn leave_a_string_without_delimiter_as_is() {
        let actual = split_top_level("Bangalore", Delimiter::Or);
        assert_eq!(Ok(vec!["Bangalore"]), actual);
    }

    #[test]
    fn only_split_on_the_requested_delimiter() {
        let actual = split_top_level("Bangalore AND chennai OR mumbai AND calcutta", Delimiter::Or);
        assert_eq!(
            Ok(vec!["Bangalore AND chennai", "mumbai AND calcutta"]),
            actual
        );
    }

    #[test]
    fn do_not_split_inside_parentheses() {
        let actual = split_top_level("a AND (b AND c)", Delimiter::And);
        assert_eq!(Ok(vec!["a", "(b AND c)"]), actual);
    }

    #[test]
    fn keep_nested_groups_intact() {
        let actual = split_top_level(
            "(Java OR (spring AND hibernate)) AND (Bangalore OR chennai)",
            Delimiter::And,
        );
        assert_eq!(
            Ok(vec!["(Java OR (spring AND hibernate))", "(Bangalore OR chennai)"]),
            actual
        );
    }

    #[test]
    fn do_not_split_an_enclosed_expression() {
        let actual = split_top_level("((a OR b) OR (c OR d))", Delimiter::Or);
        assert_eq!(Ok(vec!["((a OR b) OR (c OR d))"]), actual);
    }

    #[test]
    fn split_between_sibling_groups() {
        let actual = split_top_level("(a OR b) OR (c OR d)", Delimiter::Or);
        assert_eq!(Ok(vec!["(a OR b)", "(c OR d)"]), actual);
    }

    #[test]
    fn require_a_space_on_both_sides_of_the_delimiter() {
        assert_eq!(
            Ok(vec!["a AND(b)"]),
            split_top_level("a AND(b)", Delimiter::And)
        );
        assert_eq!(Ok(vec!["ANDROID"]), split_top_level("ANDROID", Delimiter::And));
        assert_eq!(
            Ok(vec!["a and b"]),
            split_top_level("a and b", Delimiter::And)
        );
    }

    #[test]
    fn do_not_reuse_the_space_of_a_previous_delimiter() {
        let actual = split_top_level("a AND AND b", Delimiter::And);
        assert_eq!(Ok(vec!["a", "AND b"]), actual);
    }

    #[test]
    fn split_consecutive_delimiters_without_overlap() {
        let actual = split_top_level("a AND AND AND b", Delimiter::And);
        assert_eq!(Ok(vec!["a", "AND", "b"]), actual);
    }

    #[test]
    fn produce_empty_fragments_around_dangling_delimiters() {
        let actual = split_top_level(" AND a AND ", Delimiter::And);
        assert_eq!(Ok(vec!["", "a", ""]), actual);
    }

    #[test]
    fn can_split_an_empty_string() {
        assert_eq!(Ok(vec![""]), split_top_level("", Delimiter::Or));
    }

    #[test]
    fn display_the_delimiter_with_its_surrounding_spaces() {
        assert_eq!(" AND ", Delimiter::And.to_string());
        assert_eq!(" OR ", Delimiter::Or.to_string());
    }
}

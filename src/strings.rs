use crate::error::CompileError;
use itertools::Itertools;

/// Replace every run of whitespace (spaces, tabs, newlines, ...) with a single space.
///
/// Leading and trailing runs are collapsed too, but not removed.
pub(crate) fn normalize_whitespace(input: &str) -> String {
    input
        .chars()
        .map(|character| {
            if character.is_whitespace() {
                ' '
            } else {
                character
            }
        })
        .coalesce(|previous, current| match (previous, current) {
            (' ', ' ') => Ok(' '),
            other => Err(other),
        })
        .collect()
}

#[inline]
pub(crate) fn contains_brackets(input: &str) -> bool {
    input.contains(['(', ')'])
}

/// Return the content between the first `(` and its matching `)` when that `)` is the last
/// character of the input, i.e. when a single pair of parentheses encloses the whole input.
///
/// `(a OR b) AND (c OR d)` is not enclosed: its first `(` closes before the end.
pub(crate) fn enclosed_content(input: &str) -> Option<&str> {
    if !input.starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (position, character) in input.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => continue,
        }

        if depth == 0 {
            return (position + 1 == input.len()).then(|| &input[1..position]);
        }
    }

    None
}

/// Remove at most one pair of parentheses enclosing the whole input, surrounding whitespace
/// aside. Anything else is returned untouched, whitespace included.
#[inline]
pub(crate) fn strip_outer_brackets(input: &str) -> &str {
    enclosed_content(input.trim()).unwrap_or(input)
}

/// Fail on the first `)` that closes nothing, or on the innermost `(` that is never closed.
pub(crate) fn check_balance(input: &str) -> Result<(), CompileError> {
    let mut opened = Vec::new();
    for (position, character) in input.char_indices() {
        match character {
            '(' => opened.push(position),
            ')' => {
                opened
                    .pop()
                    .ok_or(CompileError::UnbalancedParentheses { position })?;
            }
            _ => {}
        }
    }

    match opened.pop() {
        Some(position) => Err(CompileError::UnbalancedParentheses { position }),
        None => Ok(()),
    }
}

//! Leading-token extraction from raw type tokens.
//!
//! Two slightly different grammars are needed, so both live here as pure
//! functions, testable without the mapping table:
//!
//! - [`base_token`]: the longest run of non-whitespace, non-bracket
//!   characters from the start. Used when resolving a parameter's type
//!   through the mapping table.
//! - [`leading_token`]: everything up to the first `[` (the whole string if
//!   there is none). Used when deriving a return value's category.

/// Whether a character terminates a base token.
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || c == '[' || c == ']'
}

/// The longest leading run of non-whitespace, non-bracket characters.
///
/// Returns an empty slice when the input starts with a boundary character
/// (or is itself empty).
pub fn base_token(token: &str) -> &str {
    let end = token.find(is_boundary).unwrap_or(token.len());
    &token[..end]
}

/// Everything before the first `[`, or the whole string if there is none.
///
/// Returns `None` when no leading token can be extracted at all (empty
/// input, or input that starts with `[`).
pub fn leading_token(token: &str) -> Option<&str> {
    let end = token.find('[').unwrap_or(token.len());
    if end == 0 {
        None
    } else {
        Some(&token[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_token_stops_at_bracket() {
        assert_eq!(base_token("matrix[double]"), "matrix");
        assert_eq!(base_token("list[unknown]"), "list");
    }

    #[test]
    fn base_token_stops_at_whitespace() {
        assert_eq!(base_token("matrix [double]"), "matrix");
        assert_eq!(base_token("double value"), "double");
    }

    #[test]
    fn base_token_takes_whole_simple_token() {
        assert_eq!(base_token("double"), "double");
        assert_eq!(base_token("Boolean"), "Boolean");
    }

    #[test]
    fn base_token_empty_cases() {
        assert_eq!(base_token(""), "");
        assert_eq!(base_token("[double]"), "");
        assert_eq!(base_token(" matrix"), "");
    }

    #[test]
    fn leading_token_stops_only_at_bracket() {
        assert_eq!(leading_token("matrix[double]"), Some("matrix"));
        // Whitespace is not a boundary for category derivation.
        assert_eq!(leading_token("matrix [double]"), Some("matrix "));
    }

    #[test]
    fn leading_token_whole_string_without_bracket() {
        assert_eq!(leading_token("double"), Some("double"));
    }

    #[test]
    fn leading_token_malformed_inputs() {
        assert_eq!(leading_token(""), None);
        assert_eq!(leading_token("[double]"), None);
    }
}

//! Identifier and type-expression validation.
//!
//! These checks are the sole gate between user input and DDL text. Every
//! planner operation validates its inputs here before the dialect builders
//! interpolate them into a statement.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SchemaError};

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("invalid identifier regex"));

static TYPE_EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[A-Za-z0-9(),'" _]+$"#).expect("invalid type expression regex")
});

/// Returns true if `s` is a safe table or column name.
///
/// A valid identifier is non-empty, does not start with a digit and
/// contains only ASCII letters, digits and underscores.
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

/// Returns true if `s` is a safe column type expression.
///
/// Allows letters, digits, parentheses, commas, spaces, underscores and
/// quote characters, so `VARCHAR(255)` or `DECIMAL(10,2)` pass while
/// anything that could terminate a statement or open a comment is rejected.
#[must_use]
pub fn is_safe_type_expression(s: &str) -> bool {
    TYPE_EXPRESSION_RE.is_match(s)
}

/// Validates an identifier, returning it on success.
pub fn ensure_identifier(s: &str) -> Result<&str> {
    if is_valid_identifier(s) {
        Ok(s)
    } else {
        Err(SchemaError::Validation(format!("invalid identifier '{s}'")))
    }
}

/// Validates a type expression, returning it on success.
pub fn ensure_type_expression(s: &str) -> Result<&str> {
    if is_safe_type_expression(s) {
        Ok(s)
    } else {
        Err(SchemaError::Validation(format!(
            "invalid type expression '{s}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("posts"));
        assert!(is_valid_identifier("created_at"));
        assert!(is_valid_identifier("_hidden"));
        assert!(is_valid_identifier("Table2"));
        assert!(is_valid_identifier("a"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier("user name"));
        assert!(!is_valid_identifier("users;drop"));
        assert!(!is_valid_identifier("users--"));
        assert!(!is_valid_identifier("tab`le"));
        assert!(!is_valid_identifier("naïve"));
    }

    #[test]
    fn test_safe_type_expressions() {
        assert!(is_safe_type_expression("INT"));
        assert!(is_safe_type_expression("VARCHAR(255)"));
        assert!(is_safe_type_expression("DECIMAL(10,2)"));
        assert!(is_safe_type_expression("ENUM('a', 'b')"));
        assert!(is_safe_type_expression("DOUBLE PRECISION"));
    }

    #[test]
    fn test_unsafe_type_expressions() {
        assert!(!is_safe_type_expression(""));
        assert!(!is_safe_type_expression("INT; DROP TABLE users"));
        assert!(!is_safe_type_expression("INT -- comment"));
        assert!(!is_safe_type_expression("INT/*x*/"));
        assert!(!is_safe_type_expression("INT\nNOT NULL"));
    }

    #[test]
    fn test_ensure_helpers() {
        assert!(ensure_identifier("posts").is_ok());
        assert!(matches!(
            ensure_identifier("1posts"),
            Err(SchemaError::Validation(_))
        ));
        assert!(ensure_type_expression("TEXT").is_ok());
        assert!(matches!(
            ensure_type_expression("TEXT;"),
            Err(SchemaError::Validation(_))
        ));
    }
}

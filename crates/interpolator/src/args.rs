//! Argument parser: raw comma-separated argument text to typed values.

use std::collections::HashMap;

use finance_tools::{ArgValue, ParamKind, ParamSpec};
use thiserror::Error;

/// Errors produced while parsing a call's raw argument substring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong number of arguments for the tool's schema.
    #[error("expected {expected} arguments, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// A decimal parameter that does not parse as a number.
    #[error("invalid decimal for '{name}': '{token}'")]
    InvalidDecimal { name: &'static str, token: String },
}

/// Parse a raw argument substring against a tool's positional schema.
///
/// Arguments are split on commas (argument lists are flat, so no comma
/// nesting is possible), trimmed, and stripped of one matching pair of
/// surrounding `'` or `"` quotes. Internal quotes are kept as-is. Decimal
/// coercion uses `f64::from_str`, which is locale-independent; non-finite
/// spellings like `inf` parse here and are left to tool validation.
pub fn parse_args(
    raw: &str,
    schema: &[ParamSpec],
) -> Result<HashMap<String, ArgValue>, ParseError> {
    let tokens: Vec<&str> = if raw.trim().is_empty() {
        Vec::new()
    } else {
        raw.split(',').collect()
    };

    if tokens.len() != schema.len() {
        return Err(ParseError::ArityMismatch {
            expected: schema.len(),
            found: tokens.len(),
        });
    }

    let mut params = HashMap::with_capacity(schema.len());
    for (spec, token) in schema.iter().zip(tokens) {
        let token = unquote(token.trim());
        let value = match spec.kind {
            ParamKind::Decimal => {
                let parsed = token.parse::<f64>().map_err(|_| ParseError::InvalidDecimal {
                    name: spec.name,
                    token: token.to_string(),
                })?;
                ArgValue::Decimal(parsed)
            }
            ParamKind::Text => ArgValue::Text(token.to_string()),
        };
        params.insert(spec.name.to_string(), value);
    }

    Ok(params)
}

/// Strip one matching pair of surrounding quote characters, if present.
fn unquote(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &token[1..token.len() - 1];
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG_EXPENSE: &[ParamSpec] = &[
        ParamSpec::decimal("amount"),
        ParamSpec::text("category"),
        ParamSpec::text("description"),
    ];

    #[test]
    fn test_quoted_arguments() {
        let params = parse_args("50.0, 'Food', 'Groceries'", LOG_EXPENSE).unwrap();

        assert_eq!(params["amount"], ArgValue::Decimal(50.0));
        assert_eq!(params["category"], ArgValue::Text("Food".to_string()));
        assert_eq!(params["description"], ArgValue::Text("Groceries".to_string()));
    }

    #[test]
    fn test_double_quotes_and_bare_text() {
        let params = parse_args("50, \"Food\", Groceries", LOG_EXPENSE).unwrap();

        assert_eq!(params["amount"], ArgValue::Decimal(50.0));
        assert_eq!(params["category"], ArgValue::Text("Food".to_string()));
        assert_eq!(params["description"], ArgValue::Text("Groceries".to_string()));
    }

    #[test]
    fn test_internal_quotes_kept() {
        let schema = &[ParamSpec::text("description")];
        let params = parse_args("'it''s fine'", schema).unwrap();
        assert_eq!(params["description"], ArgValue::Text("it''s fine".to_string()));
    }

    #[test]
    fn test_invalid_decimal() {
        let err = parse_args("abc, Food, Groceries", LOG_EXPENSE).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidDecimal {
                name: "amount",
                token: "abc".to_string(),
            }
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let err = parse_args("50.0, 'Food'", LOG_EXPENSE).unwrap_err();
        assert_eq!(err, ParseError::ArityMismatch { expected: 3, found: 2 });

        let err = parse_args("50.0, a, b, c", LOG_EXPENSE).unwrap_err();
        assert_eq!(err, ParseError::ArityMismatch { expected: 3, found: 4 });
    }

    #[test]
    fn test_empty_args_for_nullary_schema() {
        assert!(parse_args("", &[]).unwrap().is_empty());
        assert!(parse_args("   ", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_args_for_binary_schema() {
        let schema = &[ParamSpec::text("from_currency"), ParamSpec::text("to_currency")];
        let err = parse_args("", schema).unwrap_err();
        assert_eq!(err, ParseError::ArityMismatch { expected: 2, found: 0 });
    }

    #[test]
    fn test_non_finite_decimal_passes_through() {
        let schema = &[ParamSpec::decimal("amount")];
        let params = parse_args("inf", schema).unwrap();
        assert!(matches!(params["amount"], ArgValue::Decimal(v) if v.is_infinite()));
    }
}

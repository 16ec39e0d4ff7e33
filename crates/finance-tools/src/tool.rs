//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Expected kind of a positional tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A decimal number.
    Decimal,
    /// A plain string.
    Text,
}

/// One entry in a tool's ordered parameter schema.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Parameter name (used as the key in [`ToolArgs`]).
    pub name: &'static str,
    /// Expected kind.
    pub kind: ParamKind,
}

impl ParamSpec {
    /// A decimal parameter.
    pub const fn decimal(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Decimal,
        }
    }

    /// A text parameter.
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Text,
        }
    }
}

/// A typed argument value.
///
/// Arguments come from a text scanner, not JSON, so decimals are carried
/// as raw `f64` - including non-finite values, which tools must be able
/// to see and reject during validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A decimal number.
    Decimal(f64),
    /// A plain string.
    Text(String),
}

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, ArgValue>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, ArgValue>) -> Self {
        Self { params }
    }

    /// Get a decimal parameter, returning an error if missing or not a decimal.
    pub fn get_decimal(&self, key: &str) -> Result<f64, ToolError> {
        match self.params.get(key) {
            Some(ArgValue::Decimal(v)) => Ok(*v),
            Some(ArgValue::Text(_)) => Err(ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected decimal".to_string(),
            }),
            None => Err(ToolError::MissingParameter(key.to_string())),
        }
    }

    /// Get a text parameter, returning an error if missing or not text.
    pub fn get_text(&self, key: &str) -> Result<&str, ToolError> {
        match self.params.get(key) {
            Some(ArgValue::Text(s)) => Ok(s),
            Some(ArgValue::Decimal(_)) => Err(ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            }),
            None => Err(ToolError::MissingParameter(key.to_string())),
        }
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The result content, already formatted for substitution into text.
    pub content: String,
    /// Whether the execution was successful.
    pub success: bool,
}

impl ToolOutput {
    /// Create a successful output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed output.
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: false,
        }
    }
}

/// Trait for tools the assistant can invoke from generated text.
///
/// Each tool has a fixed positional parameter schema; the interpolation
/// engine parses the model's raw argument text against [`Tool::params`]
/// before dispatch.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (the literal call name in generated text).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Ordered positional parameter schema.
    fn params(&self) -> &[ParamSpec];

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_accessors() {
        let mut params = HashMap::new();
        params.insert("amount".to_string(), ArgValue::Decimal(50.0));
        params.insert("category".to_string(), ArgValue::Text("Food".to_string()));
        let args = ToolArgs::new(params);

        assert_eq!(args.get_decimal("amount").unwrap(), 50.0);
        assert_eq!(args.get_text("category").unwrap(), "Food");
        assert!(matches!(
            args.get_decimal("category"),
            Err(ToolError::InvalidParameter { .. })
        ));
        assert!(matches!(
            args.get_text("missing"),
            Err(ToolError::MissingParameter(_))
        ));
    }

    #[test]
    fn test_args_carry_non_finite_decimals() {
        let mut params = HashMap::new();
        params.insert("amount".to_string(), ArgValue::Decimal(f64::INFINITY));
        let args = ToolArgs::new(params);

        assert!(args.get_decimal("amount").unwrap().is_infinite());
    }
}

//! Interpolation driver: scan, parse, dispatch, substitute.

use std::ops::Range;
use std::sync::Arc;

use finance_tools::{Tool, ToolArgs, ToolError, ToolRegistry};
use ledger::StorageError;
use tracing::{debug, warn};

use crate::args::parse_args;
use crate::scanner::find_call;

/// Recognized call kinds in dispatch priority order, paired with the
/// action phrase used in error annotations.
const PRIORITY: &[(&str, &str)] = &[
    ("calculate_total_expenses", "calculating total expenses"),
    ("log_expense", "logging expense"),
    ("get_exchange_rate", "fetching exchange rate"),
];

/// A recovered per-call failure.
///
/// The span refers to the working text at the moment the call was
/// scanned; the original call expression at that span is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallError {
    /// Byte span of the failed call expression.
    pub span: Range<usize>,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Result of interpolating one block of generated text.
///
/// Text is always produced, even when some calls fail; errors are
/// informational annotations, not fatal.
#[derive(Debug, Clone)]
pub struct Interpolation {
    /// The final text with tool results substituted.
    pub text: String,
    /// Per-call failures, in processing order.
    pub errors: Vec<CallError>,
}

/// Rewrites generated text by executing the tool calls embedded in it.
///
/// Each recognized call kind is processed once, in the fixed order of
/// [`PRIORITY`], against the text as mutated by earlier kinds; only the
/// first occurrence of each kind is substituted. Failed calls leave their
/// span byte-identical and append a trailing `Error <action>: <reason>`
/// note instead.
pub struct Interpolator {
    registry: Arc<ToolRegistry>,
}

impl Interpolator {
    /// Create a driver over the given tool registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Interpolate one block of generated text.
    ///
    /// Per-call failures are recovered and annotated; only a storage
    /// failure aborts, since the request cannot be salvaged without the
    /// ledger.
    pub async fn interpolate(&self, raw: &str) -> Result<Interpolation, StorageError> {
        let mut text = raw.to_string();
        let mut errors = Vec::new();

        for &(name, action) in PRIORITY {
            let Some(tool) = self.registry.get(name) else {
                continue;
            };

            let Some(found) = find_call(&text, name) else {
                continue;
            };
            let span = found.span.clone();
            let raw_args = found.args.to_string();

            debug!("Found call '{}' at {:?}", name, span);

            let parsed = match parse_args(&raw_args, tool.params()) {
                Ok(parsed) => parsed,
                Err(e) => {
                    annotate(&mut text, &mut errors, span, action, format!("parse error: {}", e));
                    continue;
                }
            };

            match self.registry.execute(name, ToolArgs::new(parsed)).await {
                Ok(output) if output.success => {
                    text.replace_range(span, &output.content);
                }
                Ok(output) => {
                    annotate(&mut text, &mut errors, span, action, output.content);
                }
                Err(ToolError::Storage(e)) => return Err(e),
                Err(e) => {
                    annotate(&mut text, &mut errors, span, action, e.to_string());
                }
            }
        }

        Ok(Interpolation { text, errors })
    }
}

/// Record a recovered failure: the call's span stays untouched and a
/// trailing note is appended to the evolving text.
fn annotate(
    text: &mut String,
    errors: &mut Vec<CallError>,
    span: Range<usize>,
    action: &str,
    reason: String,
) {
    warn!("Error {}: {}", action, reason);
    text.push_str(&format!("\nError {}: {}", action, reason));
    errors.push(CallError { span, reason });
}

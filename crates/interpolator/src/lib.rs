//! Tool-call interpolation engine.
//!
//! The generation backend has no native tool calling: the model is told to
//! write call expressions like `calculate_total_expenses()` inline in its
//! reply, and this crate rewrites that text with the real results before
//! it reaches the user.
//!
//! The pipeline per text block is scan -> parse -> dispatch -> substitute:
//!
//! - [`scanner`] finds `name(...)` occurrences and their byte spans
//! - [`args`] parses the raw argument substring against the tool's
//!   positional schema
//! - [`Interpolator`] dispatches to the registry and splices results (or
//!   trailing error notes) into the text
//!
//! Failures never discard the rest of the text: a failed call leaves its
//! span byte-identical and appends a human-readable note at the end.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use finance_tools::{default_registry, StaticRates};
//! use interpolator::Interpolator;
//! use ledger::MemoryLedger;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = default_registry(
//!         Arc::new(MemoryLedger::seeded()),
//!         Arc::new(StaticRates::new().with_rate("USD", "EUR", 0.85)),
//!     );
//!     let driver = Interpolator::new(Arc::new(registry));
//!
//!     let out = driver
//!         .interpolate("Your total is calculate_total_expenses() USD.")
//!         .await
//!         .unwrap();
//!     assert_eq!(out.text, "Your total is 170.00 USD.");
//! }
//! ```

pub mod args;
mod driver;
pub mod scanner;

pub use args::{parse_args, ParseError};
pub use driver::{CallError, Interpolation, Interpolator};
pub use scanner::{find_call, CallMatch};

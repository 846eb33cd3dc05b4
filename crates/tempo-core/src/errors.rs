//! Cross-cutting error types for Tempo.
//!
//! Gateway-specific errors (`StoreError`, `LlmError`) are defined in their
//! respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Tempo crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A date string was not in `YYYY-MM-DD` form.
    #[error("Invalid date format: {input}. Use YYYY-MM-DD")]
    InvalidDate { input: String },
}

use thiserror::Error;

/// Errors from the power-law regression core
///
/// The logarithmic transform is only defined for strictly positive
/// timestamps and prices, and the closed-form regression is only solvable
/// when the timestamps carry some variance. Callers get a typed error for
/// each failure mode instead of a NaN or Infinity.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("Log domain violation: {0}")]
    Domain(String),
    #[error("Degenerate input: {0}")]
    Degenerate(String),
    #[error("Non-finite result: {0}")]
    NonFinite(String),
}

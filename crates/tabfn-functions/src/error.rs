//! Error types for analytic function construction.

/// Errors raised when constructing an analytic function with invalid
/// parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
    /// A logarithm base must be positive, finite, and not 1.
    #[error("{base} is not a valid logarithm base (must be positive, finite, and not 1)")]
    InvalidLogBase {
        /// The rejected base.
        base: f64,
    },
}

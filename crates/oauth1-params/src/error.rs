//! Parameter store error types.

/// Errors returned by [`ParameterBag`](crate::ParameterBag) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    /// The key's string form is empty.
    #[error("invalid parameter key: key must not be empty")]
    InvalidKey,
}

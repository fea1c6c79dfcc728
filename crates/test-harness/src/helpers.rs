//! The harness error type.

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("{context}: unexpected response {got}")]
    UnexpectedResponse { context: String, got: String },

    #[error("no question is showing")]
    NoActiveQuestion,

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },
}

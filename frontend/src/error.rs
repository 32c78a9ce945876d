use thiserror::Error;

/// Failure to turn a stat label such as `"200+"` into a count-up target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("stat label {0:?} contains no digits")]
    NoDigits(String),
    #[error("stat label {0:?} does not fit in a counter")]
    OutOfRange(String),
}

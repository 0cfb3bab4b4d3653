//! Error types for shipping selection.

use thiserror::Error;

/// Errors that can occur while selecting a shipping method.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShippingError {
    /// The chosen index does not point at an offered option.
    #[error("Invalid shipping option index {index} (options: {len})")]
    InvalidIndex { index: usize, len: usize },
}

//! Error types for Dojo forms

use thiserror::Error;

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Form error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A helper was given an element without a name
    #[error("{0} requires that the element has an assigned name; none discovered")]
    MissingName(&'static str),

    /// No element or fieldset with this name exists in the form
    #[error("Invalid element name \"{0}\" provided")]
    InvalidElement(String),
}

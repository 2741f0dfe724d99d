//! Error types for linkification
//!
//! Only option validation can fail. Every text input is accepted and
//! passed through unchanged where nothing matches.

use thiserror::Error;

/// Result type alias for linkify operations
pub type LinkifyResult<T> = Result<T, LinkifyError>;

#[derive(Debug, Error)]
pub enum LinkifyError {
    /// Attribute value contains both quote characters and can not be
    /// quoted without escaping
    #[error("The value for {name} contains both single and double quotes (' and \"): {value}")]
    InvalidAttribute { name: String, value: String },

    /// Protocol is not a URI scheme name
    #[error("Invalid protocol '{0}': expected a URI scheme such as 'https'")]
    InvalidProtocol(String),

    /// URL pattern failed to compile
    #[error("Failed to compile URL pattern: {0}")]
    Pattern(#[from] regex::Error),
}

//! # Error Types
//!
//! Library error enums. The animation scheduler and the scene composer have no
//! fallible operations of their own; errors only come from parsing colors,
//! reading configuration overrides and the contact form collaborator.

use thiserror::Error;

/// Failure to parse a `#rrggbb` color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

/// Failure to read an environment override
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid integer: {source}")]
    Integer {
        var: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("{var} is not a valid number: {source}")]
    Float {
        var: &'static str,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Outcome of a rejected remote form submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Contact form errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Crate-wide error
#[derive(Debug, Error)]
pub enum FolioError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Contact(#[from] ContactError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = ContactError::MissingFields(vec!["name", "message"]);
        assert_eq!(err.to_string(), "missing required fields: name, message");
    }

    #[test]
    fn test_submit_error_converts() {
        let err: ContactError = SubmitError::Rejected("quota".into()).into();
        assert!(matches!(err, ContactError::Submit(SubmitError::Rejected(_))));
        let top: FolioError = err.into();
        assert_eq!(top.to_string(), "submission rejected: quota");
    }
}

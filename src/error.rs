//! Error types for the flip-book timing model.

use thiserror::Error;

/// Errors from the page timing model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimingError {
    /// The sequence configuration cannot produce at least one page.
    #[error("Invalid flip-book configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl TimingError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        TimingError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_message() {
        let err = TimingError::invalid("sample_interval must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid flip-book configuration: sample_interval must be positive"
        );
    }
}

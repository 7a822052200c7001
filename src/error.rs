//! Error types for skill registration.

use thiserror::Error;

/// Errors that can occur while building matcher descriptors.
///
/// Registration is a one-shot, load-time operation, so every variant here is
/// fail-fast: nothing is retried and nothing leaks into the handler's own
/// runtime behaviour. Validation of regex, cron, and format-string *syntax*
/// is deliberately left to the external dispatcher that consumes the
/// descriptors.
#[derive(Debug, Clone, Error)]
pub enum SkillError {
    /// The matching condition is outside the enumerated set for the matcher
    /// kind it was supplied to.
    #[error("invalid matching condition '{condition}' for {kind} matcher")]
    InvalidMatchingCondition {
        /// The matcher kind the condition was supplied for.
        kind: &'static str,
        /// The rejected condition string.
        condition: String,
    },
}

/// Result type for registration operations.
pub type SkillResult<T> = Result<T, SkillError>;

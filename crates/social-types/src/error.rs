//! Errors raised while constructing a call description.

/// The only failures of intent construction. Shape drift in remote payloads
/// is never an error; see the normalizer in the root crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    /// A raw argument could not be coerced into its typed form.
    #[error("malformed argument #{position} ({input:?}): {reason}")]
    MalformedArgument {
        position: usize,
        input: String,
        reason: String,
    },

    /// The module path or function name is not a well-formed Move path.
    #[error("invalid call target {target:?}: {reason}")]
    InvalidTarget { target: String, reason: String },
}

impl IntentError {
    pub fn malformed(position: usize, input: &str, reason: impl Into<String>) -> Self {
        IntentError::MalformedArgument {
            position,
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_target(target: impl Into<String>, reason: impl Into<String>) -> Self {
        IntentError::InvalidTarget {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

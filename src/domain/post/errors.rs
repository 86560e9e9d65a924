// ============================================================================
// Post Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    /// A payload or routing field failed type/shape validation.
    #[error("#{field}: {problem}")]
    InvalidField { field: String, problem: String },

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("{0} doesn't exist")]
    NotFound(String),

    #[error("content already disabled")]
    AlreadyDisabled,

    #[error("content already enabled")]
    AlreadyEnabled,

    #[error("Command not recognized")]
    UnrecognizedCommand,

    #[error("Event not recognized")]
    UnrecognizedEvent,

    /// Replay folded an event onto a state shape that cannot legally
    /// precede it.
    #[error("data out of sequence")]
    OutOfSequence,

    /// Collaborator I/O failure: event fetch or emission.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl PostError {
    pub(crate) fn invalid_field(field: &str, problem: &str) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            problem: problem.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = PostError::invalid_field("text", "value is not a string");
        assert_eq!(err.to_string(), "#text: value is not a string");

        assert_eq!(
            PostError::AlreadyExists("1".to_string()).to_string(),
            "1 already exists"
        );
        assert_eq!(
            PostError::NotFound("1".to_string()).to_string(),
            "1 doesn't exist"
        );
        assert_eq!(PostError::OutOfSequence.to_string(), "data out of sequence");
    }
}

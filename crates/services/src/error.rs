//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use study_core::model::{
    QuestionBankError, QuizOutcomeError, ResourceError, Subject, SubjectError,
};

/// Errors emitted by the quiz engine and quiz sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no quiz available for {subject}")]
    Unavailable { subject: Subject },
    #[error("question {index} is out of range (quiz has {total})")]
    QuestionOutOfRange { index: usize, total: usize },
    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },
    #[error("quiz already completed")]
    Completed,
    #[error("quiz not finished: {answered} of {total} answered")]
    Incomplete { answered: usize, total: usize },
    #[error(transparent)]
    Outcome(#[from] QuizOutcomeError),
}

impl QuizError {
    /// True for the "no quiz for this subject" warning, which callers surface
    /// to the learner instead of treating as a failure.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, QuizError::Unavailable { .. })
    }
}

/// Errors emitted while loading reference data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReferenceDataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
    #[error("{section} refers to {subject}, which is not in the subject list")]
    NotInCatalog {
        section: &'static str,
        subject: Subject,
    },
    #[error("starter value for {subject} is {value}, must be at most 100")]
    PercentOutOfRange { subject: Subject, value: u32 },
    #[error(transparent)]
    Subject(#[from] SubjectError),
    #[error(transparent)]
    Question(#[from] QuestionBankError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::model::Subject;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizOutcomeError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score {correct} exceeds question count {total}")]
    ScoreExceedsTotal { correct: usize, total: usize },
}

/// Correct answers out of the questions asked, rendered as `k/n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    correct: usize,
    total: usize,
}

impl QuizScore {
    /// # Errors
    ///
    /// Returns `QuizOutcomeError::ScoreExceedsTotal` if `correct > total`.
    pub fn new(correct: usize, total: usize) -> Result<Self, QuizOutcomeError> {
        if correct > total {
            return Err(QuizOutcomeError::ScoreExceedsTotal { correct, total });
        }
        Ok(Self { correct, total })
    }

    /// Returns the number of correct answers.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Returns the number of questions asked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns true if every answer was correct.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }

    /// Score as a whole percentage, rounded half up. An empty quiz scores 0.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let scaled = (self.correct * 100 + self.total / 2) / self.total;
        u32::try_from(scaled).unwrap_or(100)
    }
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Result of a finished quiz, handed to progress tracking by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    subject: Subject,
    score: QuizScore,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizOutcome {
    /// # Errors
    ///
    /// Returns `QuizOutcomeError::InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn new(
        subject: Subject,
        score: QuizScore,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizOutcomeError> {
        if completed_at < started_at {
            return Err(QuizOutcomeError::InvalidTimeRange);
        }
        Ok(Self {
            subject,
            score,
            started_at,
            completed_at,
        })
    }

    /// Returns the subject the quiz covered.
    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Returns the final score.
    #[must_use]
    pub fn score(&self) -> QuizScore {
        self.score
    }

    /// Returns when the quiz started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the last answer was recorded.
    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

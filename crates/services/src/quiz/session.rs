use chrono::{DateTime, Utc};
use std::fmt;

use study_core::model::{AnswerOption, Question, QuizOutcome, QuizScore, Subject};

use super::progress::{QuizProgress, QuizState};
use crate::error::QuizError;

/// One attempt at a subject's question set.
///
/// Answers are stored positionally next to the questions. The session completes
/// the moment the last unanswered question receives an answer; after that the
/// score is fixed and no further answers are accepted.
pub struct QuizSession {
    subject: Subject,
    questions: Vec<Question>,
    answers: Vec<Option<AnswerOption>>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over the given questions.
    ///
    /// `started_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Unavailable` if `questions` is empty.
    pub fn new(
        subject: Subject,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Unavailable { subject });
        }

        Ok(Self {
            answers: vec![None; questions.len()],
            subject,
            questions,
            started_at,
            completed_at: None,
        })
    }

    /// Returns the subject being quizzed.
    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Returns the questions in the order they are asked.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Iterates the question texts in order.
    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(Question::prompt)
    }

    /// Returns one slot per question; `None` until answered.
    #[must_use]
    pub fn answers(&self) -> &[Option<AnswerOption>] {
        &self.answers
    }

    /// Returns the answer recorded for question `index`, if any.
    #[must_use]
    pub fn answer(&self, index: usize) -> Option<AnswerOption> {
        self.answers.get(index).copied().flatten()
    }

    /// Returns when the session started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the last answer arrived, if it has.
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns how many questions have an answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Index of the first question still waiting for an answer.
    #[must_use]
    pub fn next_unanswered(&self) -> Option<usize> {
        self.answers.iter().position(Option::is_none)
    }

    /// Returns true once every question has an answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.is_complete() {
            QuizState::Completed
        } else {
            QuizState::InProgress
        }
    }

    /// Returns a progress snapshot for display.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let answered = self.answered_count();
        QuizProgress {
            total: self.total(),
            answered,
            remaining: self.total() - answered,
            state: self.state(),
        }
    }

    /// Record the learner's choice for question `index`.
    ///
    /// `answered_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` once every question is answered,
    /// `QuizError::QuestionOutOfRange` for a bad index and
    /// `QuizError::AlreadyAnswered` when the question already has an answer.
    pub fn record_answer(
        &mut self,
        index: usize,
        answer: AnswerOption,
        answered_at: DateTime<Utc>,
    ) -> Result<QuizProgress, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }

        let total = self.total();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(QuizError::QuestionOutOfRange { index, total })?;
        if slot.is_some() {
            return Err(QuizError::AlreadyAnswered { index });
        }
        *slot = Some(answer);

        if self.next_unanswered().is_none() {
            self.completed_at = Some(answered_at.max(self.started_at));
        }

        Ok(self.progress())
    }

    /// The score, available only after every question has been answered.
    #[must_use]
    pub fn score(&self) -> Option<QuizScore> {
        if !self.is_complete() {
            return None;
        }
        let correct = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| answer.is_some_and(|a| question.is_correct(a)))
            .count();
        QuizScore::new(correct, self.total()).ok()
    }

    /// Consume the session and produce the outcome handed to progress tracking.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` if some questions are still unanswered.
    pub fn finalize(self) -> Result<QuizOutcome, QuizError> {
        let (Some(score), Some(completed_at)) = (self.score(), self.completed_at) else {
            return Err(QuizError::Incomplete {
                answered: self.answered_count(),
                total: self.total(),
            });
        };
        Ok(QuizOutcome::new(
            self.subject,
            score,
            self.started_at,
            completed_at,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("subject", &self.subject)
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answered_count())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

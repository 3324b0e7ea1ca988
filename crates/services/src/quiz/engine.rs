use std::sync::Arc;

use tracing::{debug, info, warn};

use study_core::model::{AnswerOption, QuestionBank, QuizOutcome, Subject};

use super::progress::QuizProgress;
use super::session::QuizSession;
use crate::Clock;
use crate::error::QuizError;

/// Administers quizzes from a shared, read-only question bank.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    clock: Clock,
    bank: Arc<QuestionBank>,
}

impl QuizEngine {
    /// Returns an engine over `bank`, stamping sessions with `clock`.
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>) -> Self {
        Self { clock, bank }
    }

    /// Returns the shared question bank.
    #[must_use]
    pub fn question_bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Returns true if `subject` has a quiz.
    #[must_use]
    pub fn is_available(&self, subject: &Subject) -> bool {
        self.bank.contains(subject)
    }

    /// Start a quiz over every question the bank holds for `subject`, in bank order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Unavailable` when the bank has no entry for the subject.
    pub fn start_quiz(&self, subject: &Subject) -> Result<QuizSession, QuizError> {
        let Some(questions) = self.bank.questions(subject) else {
            warn!(%subject, "no quiz available");
            return Err(QuizError::Unavailable {
                subject: subject.clone(),
            });
        };

        let session = QuizSession::new(subject.clone(), questions.to_vec(), self.clock.now())?;
        info!(%subject, questions = session.total(), "quiz started");
        Ok(session)
    }

    /// Record an answer for question `index`.
    ///
    /// # Errors
    ///
    /// See [`QuizSession::record_answer`].
    pub fn record_answer(
        &self,
        session: &mut QuizSession,
        index: usize,
        answer: AnswerOption,
    ) -> Result<QuizProgress, QuizError> {
        let progress = session.record_answer(index, answer, self.clock.now())?;
        debug!(
            subject = %session.subject(),
            index,
            answer = answer.number(),
            answered = progress.answered,
            "answer recorded"
        );
        if progress.is_complete() {
            info!(subject = %session.subject(), "quiz completed");
        }
        Ok(progress)
    }

    /// Answer the first question that has no answer yet.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if nothing is left to answer.
    pub fn answer_next(
        &self,
        session: &mut QuizSession,
        answer: AnswerOption,
    ) -> Result<QuizProgress, QuizError> {
        let index = session.next_unanswered().ok_or(QuizError::Completed)?;
        self.record_answer(session, index, answer)
    }

    /// Close a completed session and report its score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` if questions remain unanswered.
    pub fn finalize(&self, session: QuizSession) -> Result<QuizOutcome, QuizError> {
        let outcome = session.finalize()?;
        info!(
            subject = %outcome.subject(),
            score = %outcome.score(),
            "quiz scored"
        );
        Ok(outcome)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

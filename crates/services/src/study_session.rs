use std::sync::Arc;

use study_core::model::{QuizOutcome, ResourceLink, StudyPlan, Subject, SubjectCatalog};

use crate::Clock;
use crate::error::QuizError;
use crate::plan_service::{PlanConfirmation, StudyPlanManager};
use crate::progress_tracker::ProgressTracker;
use crate::quiz::{QuizEngine, QuizSession};
use crate::reference::ReferenceData;

/// Everything one learner works with during a run.
///
/// Reference data is shared; the plan and the progress tracker belong to this
/// session alone, so several learners can each hold their own `StudySession`.
#[derive(Debug, Clone)]
pub struct StudySession {
    reference: Arc<ReferenceData>,
    planner: StudyPlanManager,
    quizzes: QuizEngine,
    progress: ProgressTracker,
    plan: Option<StudyPlan>,
}

impl StudySession {
    /// A session with empty progress.
    #[must_use]
    pub fn new(reference: Arc<ReferenceData>, clock: Clock) -> Self {
        let quizzes = QuizEngine::new(clock, reference.question_bank());
        Self {
            planner: StudyPlanManager::new(clock),
            quizzes,
            progress: ProgressTracker::new(),
            plan: None,
            reference,
        }
    }

    /// Seed progress from the reference data's starter values.
    #[must_use]
    pub fn with_starter_progress(mut self) -> Self {
        self.progress = ProgressTracker::with_starter(self.reference.starter());
        self
    }

    /// Returns the subject catalog.
    #[must_use]
    pub fn catalog(&self) -> &SubjectCatalog {
        self.reference.catalog()
    }

    /// Returns the shared reference data.
    #[must_use]
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Returns the most recently submitted plan.
    #[must_use]
    pub fn plan(&self) -> Option<&StudyPlan> {
        self.plan.as_ref()
    }

    /// Create a plan and make it the session's current plan.
    pub fn submit_plan(
        &mut self,
        learner: impl Into<String>,
        subjects: impl IntoIterator<Item = Subject>,
        hours_per_day: u32,
        goal: impl Into<String>,
    ) -> PlanConfirmation {
        let confirmation = self
            .planner
            .create_plan(learner, subjects, hours_per_day, goal);
        self.plan = Some(confirmation.plan().clone());
        confirmation
    }

    /// Returns the quiz engine, for recording answers.
    #[must_use]
    pub fn quiz_engine(&self) -> &QuizEngine {
        &self.quizzes
    }

    /// # Errors
    ///
    /// Returns `QuizError::Unavailable` when there is no quiz for the subject.
    pub fn start_quiz(&self, subject: &Subject) -> Result<QuizSession, QuizError> {
        self.quizzes.start_quiz(subject)
    }

    /// Score a finished quiz and append the result to progress.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` if the quiz still has unanswered questions.
    pub fn complete_quiz(&mut self, session: QuizSession) -> Result<QuizOutcome, QuizError> {
        let outcome = self.quizzes.finalize(session)?;
        self.progress.record_quiz(&outcome);
        Ok(outcome)
    }

    /// Returns this learner's progress tracker.
    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Resources for the current plan, or for every subject when there is no plan.
    #[must_use]
    pub fn recommended_resources(&self) -> Vec<(&Subject, &[ResourceLink])> {
        let resources = self.reference.resources();
        match &self.plan {
            Some(plan) => resources.recommended_for(plan, self.reference.catalog()),
            None => resources.all(self.reference.catalog()),
        }
    }
}

use chrono::{DateTime, Utc};
use tracing::info;

use study_core::model::{StudyHours, StudyPlan, Subject};

use crate::Clock;

/// A freshly created plan together with the message echoed back to the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfirmation {
    plan: StudyPlan,
    message: String,
    created_at: DateTime<Utc>,
}

impl PlanConfirmation {
    /// Returns the created plan.
    #[must_use]
    pub fn plan(&self) -> &StudyPlan {
        &self.plan
    }

    /// Returns the confirmation text shown to the learner.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when the plan was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Consumes the confirmation, keeping only the plan.
    #[must_use]
    pub fn into_plan(self) -> StudyPlan {
        self.plan
    }
}

/// Captures study plans.
///
/// Planning never fails: any name, subject selection and goal are accepted.
/// Hours per day are clamped into `1..=10`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudyPlanManager {
    clock: Clock,
}

impl StudyPlanManager {
    /// Returns a planner stamping plans with `clock`.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Builds a plan from raw inputs, clamping `hours_per_day` into `1..=10`.
    pub fn create_plan(
        &self,
        learner: impl Into<String>,
        subjects: impl IntoIterator<Item = Subject>,
        hours_per_day: u32,
        goal: impl Into<String>,
    ) -> PlanConfirmation {
        let plan = StudyPlan::new(
            learner,
            subjects,
            StudyHours::clamped(hours_per_day),
            goal,
        );
        let message = plan.confirmation();

        info!(
            subjects = plan.subjects().len(),
            hours_per_day = plan.hours_per_day().value(),
            "study plan created"
        );

        PlanConfirmation {
            plan,
            message,
            created_at: self.clock.now(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

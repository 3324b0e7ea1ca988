use serde::Serialize;
use std::fmt;

use crate::model::Subject;

pub const MIN_STUDY_HOURS: u8 = 1;
pub const MAX_STUDY_HOURS: u8 = 10;

//
// ─── STUDY HOURS ───────────────────────────────────────────────────────────────
//

/// Daily study time in whole hours, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StudyHours(u8);

impl StudyHours {
    /// Clamps any requested value into the supported range.
    #[must_use]
    pub fn clamped(hours: u32) -> Self {
        let max = u32::from(MAX_STUDY_HOURS);
        let min = u32::from(MIN_STUDY_HOURS);
        Self(u8::try_from(hours.clamp(min, max)).unwrap_or(MAX_STUDY_HOURS))
    }

    /// Returns the hours as a plain number.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for StudyHours {
    fn default() -> Self {
        Self(2)
    }
}

impl fmt::Display for StudyHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── STUDY PLAN ────────────────────────────────────────────────────────────────
//

/// A learner's declared plan for the current session.
///
/// Every field is accepted as given: an empty name, no subjects and an empty goal
/// are all valid. Subjects keep their selection order with repeats dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyPlan {
    learner: String,
    subjects: Vec<Subject>,
    hours_per_day: StudyHours,
    goal: String,
}

impl StudyPlan {
    /// Builds a plan, dropping repeated subjects but keeping first-selection order.
    #[must_use]
    pub fn new(
        learner: impl Into<String>,
        subjects: impl IntoIterator<Item = Subject>,
        hours_per_day: StudyHours,
        goal: impl Into<String>,
    ) -> Self {
        let mut selected: Vec<Subject> = Vec::new();
        for subject in subjects {
            if !selected.contains(&subject) {
                selected.push(subject);
            }
        }

        Self {
            learner: learner.into(),
            subjects: selected,
            hours_per_day,
            goal: goal.into(),
        }
    }

    /// Returns the learner's name exactly as entered.
    #[must_use]
    pub fn learner(&self) -> &str {
        &self.learner
    }

    /// Returns the selected subjects in selection order.
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Returns the clamped daily study time.
    #[must_use]
    pub fn hours_per_day(&self) -> StudyHours {
        self.hours_per_day
    }

    /// Returns the free-text goal.
    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Returns true if the plan selects `subject`.
    #[must_use]
    pub fn includes(&self, subject: &Subject) -> bool {
        self.subjects.contains(subject)
    }

    /// Human-readable echo of the plan, shown after submission.
    #[must_use]
    pub fn confirmation(&self) -> String {
        let subjects = self
            .subjects
            .iter()
            .map(Subject::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Study plan created for {}. Focus on [{}] for {} hours/day. Goal: {}.",
            self.learner, subjects, self.hours_per_day, self.goal
        )
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use serde::Serialize;

use study_core::model::{Percent, Subject, SubjectSummary};

/// One bar of the subject-progress chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressBar {
    pub subject: Subject,
    pub percent: Percent,
}

/// One point of a subject's score line; attempts count from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScorePoint {
    pub attempt: usize,
    pub score: u32,
}

/// Per-subject chart data plus aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectProgress {
    #[serde(flatten)]
    pub summary: SubjectSummary,
    pub series: Vec<ScorePoint>,
}

/// Everything a progress screen needs, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub bars: Vec<ProgressBar>,
    pub subjects: Vec<SubjectProgress>,
    pub overall_completion: Option<f64>,
}

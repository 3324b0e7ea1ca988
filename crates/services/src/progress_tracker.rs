use std::collections::BTreeMap;

use tracing::{debug, info};

use study_core::model::{
    Percent, ProgressRecord, QuizOutcome, Subject, SubjectCatalog, SubjectSummary,
};

use crate::progress_view::{ProgressBar, ProgressSnapshot, ScorePoint, SubjectProgress};
use crate::reference::StarterProgress;

/// Owns every subject's progress record for the lifetime of a learner session.
///
/// Completion is last-write-wins; score history is append-only. Reads never fail:
/// a subject with nothing recorded reads as 0% with an empty history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    records: BTreeMap<Subject, ProgressRecord>,
}

impl ProgressTracker {
    /// Returns a tracker with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker pre-filled with starter completion values and score histories.
    #[must_use]
    pub fn with_starter(starter: &StarterProgress) -> Self {
        let mut tracker = Self::new();
        for (subject, percent) in starter.completion() {
            tracker.record_completion(subject, *percent);
        }
        for (subject, scores) in starter.history() {
            for score in scores {
                tracker.record_score(subject, *score);
            }
        }
        tracker
    }

    /// Overwrites the subject's completion.
    pub fn record_completion(&mut self, subject: &Subject, percent: Percent) {
        debug!(%subject, %percent, "completion recorded");
        self.records
            .entry(subject.clone())
            .or_default()
            .set_completion(percent);
    }

    /// Appends `score` to the subject's history.
    pub fn record_score(&mut self, subject: &Subject, score: u32) {
        debug!(%subject, score, "score recorded");
        self.records
            .entry(subject.clone())
            .or_default()
            .push_score(score);
    }

    /// Append a finished quiz to its subject's history as a percentage.
    ///
    /// Returns the recorded value.
    pub fn record_quiz(&mut self, outcome: &QuizOutcome) -> u32 {
        let percent = outcome.score().percent();
        info!(
            subject = %outcome.subject(),
            score = %outcome.score(),
            percent,
            "quiz result recorded"
        );
        self.record_score(outcome.subject(), percent);
        percent
    }

    /// Completion for every subject that has one recorded.
    #[must_use]
    pub fn progress(&self) -> BTreeMap<Subject, Percent> {
        self.records
            .iter()
            .filter_map(|(subject, record)| record.completion().map(|p| (subject.clone(), p)))
            .collect()
    }

    /// Returns the stored completion, or 0% when none was recorded.
    #[must_use]
    pub fn completion(&self, subject: &Subject) -> Percent {
        self.records
            .get(subject)
            .and_then(ProgressRecord::completion)
            .unwrap_or_default()
    }

    /// Returns the score history, oldest first; empty for unknown subjects.
    #[must_use]
    pub fn history(&self, subject: &Subject) -> &[u32] {
        self.records
            .get(subject)
            .map(ProgressRecord::history)
            .unwrap_or_default()
    }

    /// Returns display aggregates for `subject`.
    #[must_use]
    pub fn summary(&self, subject: &Subject) -> SubjectSummary {
        self.records
            .get(subject)
            .map_or_else(
                || ProgressRecord::new().summarize(subject),
                |record| record.summarize(subject),
            )
    }

    /// Subjects to chart: the catalog in order, then anything else that has data.
    fn chart_subjects<'a>(&'a self, catalog: &'a SubjectCatalog) -> Vec<&'a Subject> {
        let mut subjects: Vec<&Subject> = catalog.iter().collect();
        subjects.extend(self.records.keys().filter(|s| !catalog.contains(s)));
        subjects
    }

    /// Returns one completion bar per charted subject.
    #[must_use]
    pub fn progress_bars(&self, catalog: &SubjectCatalog) -> Vec<ProgressBar> {
        self.chart_subjects(catalog)
            .into_iter()
            .map(|subject| ProgressBar {
                subject: subject.clone(),
                percent: self.completion(subject),
            })
            .collect()
    }

    /// Returns the history as chart points numbered from 1.
    #[must_use]
    pub fn score_series(&self, subject: &Subject) -> Vec<ScorePoint> {
        self.history(subject)
            .iter()
            .enumerate()
            .map(|(i, score)| ScorePoint {
                attempt: i + 1,
                score: *score,
            })
            .collect()
    }

    /// Mean completion across the charted subjects, or `None` if there are none.
    #[must_use]
    pub fn overall_completion(&self, catalog: &SubjectCatalog) -> Option<f64> {
        let bars = self.progress_bars(catalog);
        if bars.is_empty() {
            return None;
        }
        let sum: u32 = bars.iter().map(|b| u32::from(b.percent.value())).sum();
        #[allow(clippy::cast_precision_loss)]
        Some(f64::from(sum) / bars.len() as f64)
    }

    /// Returns bars, per-subject series and the overall average in one value.
    #[must_use]
    pub fn snapshot(&self, catalog: &SubjectCatalog) -> ProgressSnapshot {
        let subjects = self
            .chart_subjects(catalog)
            .into_iter()
            .map(|subject| SubjectProgress {
                summary: self.summary(subject),
                series: self.score_series(subject),
            })
            .collect();

        ProgressSnapshot {
            bars: self.progress_bars(catalog),
            subjects,
            overall_completion: self.overall_completion(catalog),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

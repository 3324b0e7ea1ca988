use serde::Serialize;
use std::fmt;

use crate::model::Subject;

/// Whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    /// Returns `None` when the value is above 100.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        u8::try_from(value).ok().filter(|v| *v <= 100).map(Self)
    }

    /// Saturates values above 100.
    #[must_use]
    pub fn clamped(value: u32) -> Self {
        Self::new(value.min(100)).unwrap_or(Self::FULL)
    }

    /// Returns the percentage as a plain number.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Stored progress for one subject.
///
/// `completion` is unset until someone records it; `history` only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    completion: Option<Percent>,
    history: Vec<u32>,
}

impl ProgressRecord {
    /// Returns an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last recorded completion, if any.
    #[must_use]
    pub fn completion(&self) -> Option<Percent> {
        self.completion
    }

    /// Returns past scores, oldest first.
    #[must_use]
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Replaces the stored completion.
    pub fn set_completion(&mut self, percent: Percent) {
        self.completion = Some(percent);
    }

    /// Appends a score to the end of the history.
    pub fn push_score(&mut self, score: u32) {
        self.history.push(score);
    }

    /// Aggregates the record for display; missing completion reads as 0%.
    #[must_use]
    pub fn summarize(&self, subject: &Subject) -> SubjectSummary {
        let attempts = self.history.len();
        let average = if attempts == 0 {
            None
        } else {
            let sum: u64 = self.history.iter().map(|s| u64::from(*s)).sum();
            #[allow(clippy::cast_precision_loss)]
            Some(sum as f64 / attempts as f64)
        };

        SubjectSummary {
            subject: subject.clone(),
            completion: self.completion.unwrap_or_default(),
            attempts,
            latest: self.history.last().copied(),
            best: self.history.iter().max().copied(),
            average,
        }
    }
}

/// Display-ready aggregates for one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSummary {
    pub subject: Subject,
    pub completion: Percent,
    pub attempts: usize,
    pub latest: Option<u32>,
    pub best: Option<u32>,
    pub average: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_bounds() {
        assert_eq!(Percent::new(100), Some(Percent::FULL));
        assert_eq!(Percent::new(101), None);
        assert_eq!(Percent::new(300), None);
        assert_eq!(Percent::clamped(140), Percent::FULL);
        assert_eq!(Percent::clamped(45).value(), 45);
        assert_eq!(Percent::clamped(45).to_string(), "45%");
    }

    #[test]
    fn record_overwrites_completion_and_appends_scores() {
        let mut record = ProgressRecord::new();
        assert_eq!(record.completion(), None);

        record.set_completion(Percent::clamped(30));
        record.set_completion(Percent::clamped(45));
        record.push_score(55);
        record.push_score(60);

        assert_eq!(record.completion(), Some(Percent::clamped(45)));
        assert_eq!(record.history(), &[55, 60]);
    }

    #[test]
    fn summary_of_empty_record_is_zeroed() {
        let subject = Subject::new("Art").unwrap();
        let summary = ProgressRecord::new().summarize(&subject);
        assert_eq!(summary.completion, Percent::ZERO);
        assert_eq!(summary.attempts, 0);
        assert_eq!(summary.latest, None);
        assert_eq!(summary.best, None);
        assert_eq!(summary.average, None);
    }

    #[test]
    fn summary_aggregates_history() {
        let subject = Subject::new("Math").unwrap();
        let mut record = ProgressRecord::new();
        for score in [80, 85, 78, 90] {
            record.push_score(score);
        }
        record.set_completion(Percent::clamped(80));

        let summary = record.summarize(&subject);
        assert_eq!(summary.attempts, 4);
        assert_eq!(summary.latest, Some(90));
        assert_eq!(summary.best, Some(90));
        assert!((summary.average.unwrap() - 83.25).abs() < f64::EPSILON);
        assert_eq!(summary.completion.value(), 80);
    }
}

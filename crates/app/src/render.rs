//! Plain-text rendering for the terminal front end.

use std::fmt::Write as _;

use services::{PlanConfirmation, ProgressBar, ScorePoint, SubjectProgress};
use study_core::model::{ResourceLink, Subject};

const BAR_WIDTH: usize = 20;

pub const WELCOME: &str = "\
Welcome to your Smart Study Assistant. It helps you with:

  - Study plans built around the subjects you choose.
  - Quizzes to test your knowledge in each subject.
  - Progress tracking with per-subject charts.
  - A list of study resources for every subject.

Start by setting a study goal (`study plan`), taking a quiz (`study quiz <subject>`)
or checking your progress (`study progress`).";

/// Confirmation message followed by a newline.
pub fn plan(confirmation: &PlanConfirmation) -> String {
    format!("{}\n", confirmation.message())
}

/// One fixed-width `#` bar per subject, labels padded to the longest name.
pub fn progress_bars(bars: &[ProgressBar]) -> String {
    let label_width = bars
        .iter()
        .map(|b| b.subject.as_str().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for bar in bars {
        let filled = usize::from(bar.percent.value()) * BAR_WIDTH / 100;
        let _ = writeln!(
            out,
            "{:<label_width$}  {}{}  {}",
            bar.subject.as_str(),
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled),
            bar.percent,
        );
    }
    out
}

/// Single line listing each attempt as `#n score`.
pub fn score_series(subject: &Subject, series: &[ScorePoint]) -> String {
    if series.is_empty() {
        return format!("{subject}: no scores yet\n");
    }
    let points = series
        .iter()
        .map(|p| format!("#{} {}", p.attempt, p.score))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{subject}: {points}\n")
}

/// Score line plus an aggregates line once there is at least one attempt.
pub fn subject_summary(progress: &SubjectProgress) -> String {
    let summary = &progress.summary;
    let mut out = score_series(&summary.subject, &progress.series);
    if let (Some(latest), Some(best), Some(average)) =
        (summary.latest, summary.best, summary.average)
    {
        let _ = writeln!(
            out,
            "  attempts {}  latest {latest}  best {best}  average {average:.1}",
            summary.attempts
        );
    }
    out
}

/// Bullet list of `subject: title <url>` lines.
pub fn resources(entries: &[(&Subject, &[ResourceLink])]) -> String {
    if entries.is_empty() {
        return "No resources available.\n".to_owned();
    }
    let mut out = String::new();
    for (subject, links) in entries {
        for link in *links {
            let _ = writeln!(out, "- {subject}: {} <{}>", link.title(), link.url());
        }
    }
    out
}

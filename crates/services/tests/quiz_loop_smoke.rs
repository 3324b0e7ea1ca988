use std::sync::Arc;

use services::{Clock, ProgressTracker, QuizError, QuizState, ReferenceData, StudySession};
use study_core::model::{AnswerOption, Percent, Subject};
use study_core::time::fixed_now;

fn subject(name: &str) -> Subject {
    Subject::new(name).expect("valid subject")
}

fn learner_session() -> StudySession {
    let reference = Arc::new(ReferenceData::builtin().expect("builtin reference data"));
    StudySession::new(reference, Clock::fixed(fixed_now()))
}

#[test]
fn plan_confirmation_echoes_learner_input() {
    let mut session = learner_session();
    let confirmation = session.submit_plan(
        "Ana",
        [subject("Math"), subject("Science")],
        3,
        "Finish algebra",
    );

    let plan = confirmation.plan();
    assert_eq!(plan.learner(), "Ana");
    assert_eq!(plan.subjects(), &[subject("Math"), subject("Science")]);
    assert_eq!(plan.hours_per_day().value(), 3);
    assert_eq!(plan.goal(), "Finish algebra");
    for needle in ["Ana", "Math", "Science", "3"] {
        assert!(confirmation.message().contains(needle));
    }
}

#[test]
fn math_quiz_scores_three_of_three() {
    let mut session = learner_session();
    let engine = session.quiz_engine().clone();
    let mut quiz = session.start_quiz(&subject("Math")).expect("math quiz");
    assert_eq!(quiz.total(), 3);

    let answers = [AnswerOption::First, AnswerOption::Fourth, AnswerOption::Second];
    for (index, answer) in answers.into_iter().enumerate() {
        assert_eq!(quiz.state(), QuizState::InProgress);
        engine
            .record_answer(&mut quiz, index, answer)
            .expect("answer accepted");
    }
    assert_eq!(quiz.state(), QuizState::Completed);

    let outcome = session.complete_quiz(quiz).expect("quiz finalized");
    assert_eq!(outcome.score().to_string(), "3/3");
    assert_eq!(session.progress().history(&subject("Math")), &[100]);
}

#[test]
fn unknown_subject_yields_warning_without_session() {
    let session = learner_session();
    let err = session.start_quiz(&subject("Art")).unwrap_err();
    assert!(err.is_unavailable());
    assert_eq!(err.to_string(), "no quiz available for Art");
    assert!(matches!(err, QuizError::Unavailable { subject } if subject.as_str() == "Art"));
}

#[test]
fn score_history_appends_in_order() {
    let mut tracker = ProgressTracker::new();
    tracker.record_score(&subject("Science"), 55);
    tracker.record_score(&subject("Science"), 60);
    assert_eq!(tracker.history(&subject("Science")), &[55, 60]);
}

#[test]
fn completion_keeps_last_write() {
    let mut tracker = ProgressTracker::new();
    tracker.record_completion(&subject("History"), Percent::clamped(30));
    tracker.record_completion(&subject("History"), Percent::clamped(45));
    assert_eq!(tracker.progress()[&subject("History")].value(), 45);
}

#[test]
fn snapshot_serializes_for_charts() {
    let session = learner_session().with_starter_progress();
    let snapshot = session.progress().snapshot(session.catalog());

    assert_eq!(snapshot.bars.len(), 4);
    assert_eq!(snapshot.subjects[0].series.len(), 4);
    assert!((snapshot.overall_completion.unwrap() - 55.0).abs() < f64::EPSILON);

    let json = serde_json::to_value(&snapshot).expect("snapshot serializes");
    assert_eq!(json["bars"][0]["subject"], "Math");
    assert_eq!(json["bars"][0]["percent"], 80);
    assert_eq!(json["subjects"][0]["latest"], 90);
    assert_eq!(json["subjects"][0]["series"][3]["attempt"], 4);
}

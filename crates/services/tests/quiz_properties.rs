use std::sync::Arc;

use proptest::prelude::*;
use services::{Clock, QuizEngine};
use study_core::model::{AnswerOption, Question, QuestionBank, Subject};
use study_core::time::fixed_now;

fn bank_with(sizes: &[usize]) -> (Arc<QuestionBank>, Vec<Subject>) {
    let mut bank = QuestionBank::new();
    let mut subjects = Vec::new();
    for (i, size) in sizes.iter().enumerate() {
        let subject = Subject::new(format!("Subject {i}")).unwrap();
        let questions = (0..*size)
            .map(|q| Question::new(format!("Question {q}")).unwrap())
            .collect();
        bank = bank.with_subject(subject.clone(), questions).unwrap();
        subjects.push(subject);
    }
    (Arc::new(bank), subjects)
}

fn answer() -> impl Strategy<Value = AnswerOption> {
    proptest::sample::select(AnswerOption::ALL.to_vec())
}

proptest! {
    #[test]
    fn every_banked_subject_runs_to_full_marks(
        sizes in proptest::collection::vec(1_usize..8, 1..5),
        answers in proptest::collection::vec(answer(), 8),
    ) {
        let (bank, subjects) = bank_with(&sizes);
        let engine = QuizEngine::new(Clock::fixed(fixed_now()), bank);

        for (subject, size) in subjects.iter().zip(&sizes) {
            let mut session = engine.start_quiz(subject).unwrap();
            prop_assert_eq!(session.total(), *size);

            let mut completions = 0;
            for index in 0..*size {
                let progress = engine.record_answer(&mut session, index, answers[index]).unwrap();
                if progress.is_complete() {
                    completions += 1;
                }
            }
            prop_assert_eq!(completions, 1);

            let outcome = engine.finalize(session).unwrap();
            prop_assert_eq!(outcome.score().correct(), *size);
            prop_assert_eq!(outcome.score().to_string(), format!("{size}/{size}"));
        }
    }

    #[test]
    fn absent_subjects_never_start(name in "[A-Za-z]{1,12}") {
        let (bank, _) = bank_with(&[2, 3]);
        let engine = QuizEngine::new(Clock::fixed(fixed_now()), bank);
        let subject = Subject::new(format!("Elective {name}")).unwrap();

        let err = engine.start_quiz(&subject).unwrap_err();
        prop_assert!(err.is_unavailable());
    }
}

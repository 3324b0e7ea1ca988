use proptest::prelude::*;
use study_core::model::{
    MAX_STUDY_HOURS, MIN_STUDY_HOURS, Percent, ProgressRecord, QuizScore, StudyHours, StudyPlan,
    Subject, SubjectCatalog,
};

fn catalog_subset() -> impl Strategy<Value = Vec<Subject>> {
    let all = SubjectCatalog::standard().subjects().to_vec();
    proptest::sample::subsequence(all.clone(), 0..=all.len())
}

proptest! {
    #[test]
    fn plan_round_trips_inputs(
        name in ".*",
        subjects in catalog_subset(),
        hours in u32::from(MIN_STUDY_HOURS)..=u32::from(MAX_STUDY_HOURS),
        goal in ".*",
    ) {
        let plan = StudyPlan::new(
            name.clone(),
            subjects.clone(),
            StudyHours::clamped(hours),
            goal.clone(),
        );

        prop_assert_eq!(plan.learner(), name.as_str());
        prop_assert_eq!(plan.subjects(), subjects.as_slice());
        prop_assert_eq!(u32::from(plan.hours_per_day().value()), hours);
        prop_assert_eq!(plan.goal(), goal.as_str());
    }

    #[test]
    fn hours_always_within_range(hours in any::<u32>()) {
        let value = StudyHours::clamped(hours).value();
        prop_assert!((MIN_STUDY_HOURS..=MAX_STUDY_HOURS).contains(&value));
    }

    #[test]
    fn history_is_append_only(scores in proptest::collection::vec(0_u32..=100, 0..32)) {
        let mut record = ProgressRecord::new();
        for (i, score) in scores.iter().enumerate() {
            record.push_score(*score);
            prop_assert_eq!(record.history().len(), i + 1);
        }
        prop_assert_eq!(record.history(), scores.as_slice());
    }

    #[test]
    fn completion_is_last_write_wins(first in 0_u32..=100, second in 0_u32..=100) {
        let mut record = ProgressRecord::new();
        record.set_completion(Percent::clamped(first));
        record.set_completion(Percent::clamped(second));
        prop_assert_eq!(record.completion().map(|p| u32::from(p.value())), Some(second));
    }

    #[test]
    fn score_percent_stays_within_bounds(total in 1_usize..500, correct in 0_usize..500) {
        let score = QuizScore::new(correct.min(total), total).unwrap();
        prop_assert!(score.percent() <= 100);
        if score.is_perfect() {
            prop_assert_eq!(score.percent(), 100);
        }
        if score.correct() == 0 {
            prop_assert_eq!(score.percent(), 0);
        }
    }
}

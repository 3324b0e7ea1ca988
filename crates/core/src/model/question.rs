use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::Subject;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("answer option must be 1-4, got {0}")]
    InvalidOption(u8),

    #[error("unrecognised answer option: {raw}")]
    UnknownOptionLabel { raw: String },

    #[error("subject {subject} has no questions")]
    NoQuestions { subject: Subject },
}

//
// ─── ANSWER OPTION ─────────────────────────────────────────────────────────────
//

/// One of the four fixed choices offered for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AnswerOption {
    First,
    Second,
    Third,
    Fourth,
}

impl AnswerOption {
    pub const ALL: [AnswerOption; 4] = [
        AnswerOption::First,
        AnswerOption::Second,
        AnswerOption::Third,
        AnswerOption::Fourth,
    ];

    /// Converts a 1-based option number.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::InvalidOption` outside `1..=4`.
    pub fn from_number(value: u8) -> Result<Self, QuestionBankError> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            _ => Err(QuestionBankError::InvalidOption(value)),
        }
    }

    /// Returns the 1-based option number.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            AnswerOption::First => 1,
            AnswerOption::Second => 2,
            AnswerOption::Third => 3,
            AnswerOption::Fourth => 4,
        }
    }

    /// Label shown next to the choice, e.g. `Option 2`.
    #[must_use]
    pub fn label(self) -> String {
        format!("Option {}", self.number())
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Option {}", self.number())
    }
}

impl TryFrom<u8> for AnswerOption {
    type Error = QuestionBankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<AnswerOption> for u8 {
    fn from(option: AnswerOption) -> Self {
        option.number()
    }
}

/// Accepts `2` as well as the label form `Option 2` (any case).
impl FromStr for AnswerOption {
    type Err = QuestionBankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .get(..6)
            .filter(|prefix| prefix.eq_ignore_ascii_case("option"))
            .map_or(trimmed, |_| trimmed[6..].trim_start());

        digits
            .parse::<u8>()
            .map_err(|_| QuestionBankError::UnknownOptionLabel {
                raw: trimmed.to_owned(),
            })
            .and_then(Self::from_number)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single quiz prompt.
///
/// Questions loaded without an answer key are graded leniently: any choice counts
/// as correct. A key is only present when the question source supplies one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    answer_key: Option<AnswerOption>,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionBankError::EmptyPrompt` if the prompt is blank.
    pub fn new(prompt: impl Into<String>) -> Result<Self, QuestionBankError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionBankError::EmptyPrompt);
        }
        Ok(Self {
            prompt: prompt.trim().to_owned(),
            answer_key: None,
        })
    }

    /// Attaches the correct option, switching the question to strict grading.
    #[must_use]
    pub fn with_answer_key(mut self, key: AnswerOption) -> Self {
        self.answer_key = Some(key);
        self
    }

    /// Returns the question text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the correct option when one is known.
    #[must_use]
    pub fn answer_key(&self) -> Option<AnswerOption> {
        self.answer_key
    }

    /// Without an answer key every choice counts as correct.
    #[must_use]
    pub fn is_correct(&self, answer: AnswerOption) -> bool {
        self.answer_key.is_none_or(|key| key == answer)
    }
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Read-only mapping from subject to its ordered questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    entries: BTreeMap<Subject, Vec<Question>>,
}

impl QuestionBank {
    /// Returns an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the question set for a subject.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::NoQuestions` if `questions` is empty.
    pub fn with_subject(
        mut self,
        subject: Subject,
        questions: Vec<Question>,
    ) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::NoQuestions { subject });
        }
        self.entries.insert(subject, questions);
        Ok(self)
    }

    /// Returns the questions for `subject` in bank order, or `None` if it has no quiz.
    #[must_use]
    pub fn questions(&self, subject: &Subject) -> Option<&[Question]> {
        self.entries.get(subject).map(Vec::as_slice)
    }

    /// Returns true if `subject` has a quiz.
    #[must_use]
    pub fn contains(&self, subject: &Subject) -> bool {
        self.entries.contains_key(subject)
    }

    /// Iterates banked subjects in name order.
    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.entries.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_number_conversion_works() {
        assert_eq!(AnswerOption::from_number(1).unwrap(), AnswerOption::First);
        assert_eq!(AnswerOption::from_number(4).unwrap(), AnswerOption::Fourth);
        assert_eq!(
            AnswerOption::from_number(0).unwrap_err(),
            QuestionBankError::InvalidOption(0)
        );
        assert_eq!(AnswerOption::Third.label(), "Option 3");
    }

    #[test]
    fn option_parses_number_or_label() {
        assert_eq!("2".parse::<AnswerOption>().unwrap(), AnswerOption::Second);
        assert_eq!(
            "option 4".parse::<AnswerOption>().unwrap(),
            AnswerOption::Fourth
        );
        assert_eq!(
            " Option 1 ".parse::<AnswerOption>().unwrap(),
            AnswerOption::First
        );
        assert!(matches!(
            "maybe".parse::<AnswerOption>(),
            Err(QuestionBankError::UnknownOptionLabel { .. })
        ));
        assert!(matches!(
            "Option 9".parse::<AnswerOption>(),
            Err(QuestionBankError::InvalidOption(9))
        ));
    }

    #[test]
    fn question_without_key_accepts_any_answer() {
        let question = Question::new("2 + 2 = ?").unwrap();
        assert!(AnswerOption::ALL.iter().all(|a| question.is_correct(*a)));
    }

    #[test]
    fn question_with_key_grades_by_match() {
        let question = Question::new("5 x 6 = ?")
            .unwrap()
            .with_answer_key(AnswerOption::Second);
        assert!(question.is_correct(AnswerOption::Second));
        assert!(!question.is_correct(AnswerOption::First));
    }

    #[test]
    fn question_rejects_blank_prompt() {
        assert_eq!(Question::new("  ").unwrap_err(), QuestionBankError::EmptyPrompt);
    }

    #[test]
    fn bank_rejects_empty_question_set() {
        let math = Subject::new("Math").unwrap();
        let err = QuestionBank::new()
            .with_subject(math.clone(), Vec::new())
            .unwrap_err();
        assert_eq!(err, QuestionBankError::NoQuestions { subject: math });
    }

    #[test]
    fn bank_lookup_by_subject() {
        let math = Subject::new("Math").unwrap();
        let bank = QuestionBank::new()
            .with_subject(math.clone(), vec![Question::new("2 + 2 = ?").unwrap()])
            .unwrap();

        assert_eq!(bank.questions(&math).map(<[Question]>::len), Some(1));
        assert!(bank.questions(&Subject::new("Art").unwrap()).is_none());
        assert_eq!(bank.len(), 1);
    }
}

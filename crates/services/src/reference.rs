//! Reference data loaded at startup.
//!
//! A TOML document describes the subject catalog, the question bank, study
//! resources and optional starter progress:
//!
//! ```toml
//! subjects = ["Math", "Science"]
//!
//! [questions]
//! Math = ["2 + 2 = ?", { prompt = "5 x 6 = ?", answer = 2 }]
//!
//! [[resources.Math]]
//! title = "Khan Academy Math Lessons"
//! url = "https://www.khanacademy.org"
//!
//! [starter.progress]
//! Math = 80
//!
//! [starter.history]
//! Math = [80, 85]
//! ```
//!
//! Plain-string questions carry no answer key and are graded leniently.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use study_core::model::{
    AnswerOption, Percent, Question, QuestionBank, ResourceCatalog, ResourceLink, Subject,
    SubjectCatalog,
};

use crate::error::ReferenceDataError;

const BUILTIN: &str = include_str!("../data/reference.toml");

//
// ─── RAW (FILE) SHAPE ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawReferenceData {
    subjects: Vec<String>,
    #[serde(default)]
    questions: BTreeMap<String, Vec<RawQuestion>>,
    #[serde(default)]
    resources: BTreeMap<String, Vec<RawResource>>,
    #[serde(default)]
    starter: RawStarter,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawQuestion {
    Prompt(String),
    Keyed { prompt: String, answer: u8 },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawResource {
    title: String,
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStarter {
    #[serde(default)]
    progress: BTreeMap<String, u32>,
    #[serde(default)]
    history: BTreeMap<String, Vec<u32>>,
}

impl RawQuestion {
    fn into_question(self) -> Result<Question, ReferenceDataError> {
        Ok(match self {
            RawQuestion::Prompt(prompt) => Question::new(prompt)?,
            RawQuestion::Keyed { prompt, answer } => {
                Question::new(prompt)?.with_answer_key(AnswerOption::from_number(answer)?)
            }
        })
    }
}

//
// ─── VALIDATED SHAPE ───────────────────────────────────────────────────────────
//

/// Completion values and score histories used to seed a fresh tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarterProgress {
    completion: Vec<(Subject, Percent)>,
    history: Vec<(Subject, Vec<u32>)>,
}

impl StarterProgress {
    /// Returns starter completion values in subject-name order.
    #[must_use]
    pub fn completion(&self) -> &[(Subject, Percent)] {
        &self.completion
    }

    /// Returns starter score histories in subject-name order.
    #[must_use]
    pub fn history(&self) -> &[(Subject, Vec<u32>)] {
        &self.history
    }

    /// Returns true if the document had no starter section.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completion.is_empty() && self.history.is_empty()
    }
}

/// Validated reference data shared read-only by every learner session.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    catalog: SubjectCatalog,
    questions: Arc<QuestionBank>,
    resources: ResourceCatalog,
    starter: StarterProgress,
}

impl ReferenceData {
    /// The data shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceDataError` only if the embedded document is malformed.
    pub fn builtin() -> Result<Self, ReferenceDataError> {
        Self::from_toml_str(BUILTIN)
    }

    /// Read and validate a reference file.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceDataError::Io` if the file cannot be read, or any
    /// parse/validation error from [`ReferenceData::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ReferenceDataError> {
        let text = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            subjects = data.catalog.len(),
            starter = !data.starter.is_empty(),
            "reference data loaded"
        );
        Ok(data)
    }

    /// Parse and validate a TOML document.
    ///
    /// Every subject named under `questions`, `resources` or `starter` must appear
    /// in `subjects`.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceDataError` on malformed TOML, unknown subjects, blank
    /// prompts, bad answer keys, bad URLs or starter values above 100.
    pub fn from_toml_str(text: &str) -> Result<Self, ReferenceDataError> {
        let raw: RawReferenceData = toml::from_str(text)?;

        let catalog = SubjectCatalog::new(
            raw.subjects
                .into_iter()
                .map(Subject::new)
                .collect::<Result<Vec<_>, _>>()?,
        )?;
        let known = |section: &'static str, name: String| -> Result<Subject, ReferenceDataError> {
            let subject = Subject::new(name)?;
            if catalog.contains(&subject) {
                Ok(subject)
            } else {
                Err(ReferenceDataError::NotInCatalog { section, subject })
            }
        };

        let mut questions = QuestionBank::new();
        for (name, raw_questions) in raw.questions {
            let subject = known("questions", name)?;
            let parsed = raw_questions
                .into_iter()
                .map(RawQuestion::into_question)
                .collect::<Result<Vec<_>, _>>()?;
            questions = questions.with_subject(subject, parsed)?;
        }

        let mut resources = ResourceCatalog::new();
        for (name, raw_links) in raw.resources {
            let subject = known("resources", name)?;
            let links = raw_links
                .into_iter()
                .map(|r| ResourceLink::new(r.title, &r.url))
                .collect::<Result<Vec<_>, _>>()?;
            resources = resources.with_links(subject, links);
        }

        let mut starter = StarterProgress::default();
        for (name, value) in raw.starter.progress {
            let subject = known("starter.progress", name)?;
            let percent = Percent::new(value).ok_or_else(|| {
                ReferenceDataError::PercentOutOfRange {
                    subject: subject.clone(),
                    value,
                }
            })?;
            starter.completion.push((subject, percent));
        }
        for (name, scores) in raw.starter.history {
            let subject = known("starter.history", name)?;
            if let Some(&value) = scores.iter().find(|v| Percent::new(**v).is_none()) {
                return Err(ReferenceDataError::PercentOutOfRange { subject, value });
            }
            starter.history.push((subject, scores));
        }

        Ok(Self {
            catalog,
            questions: Arc::new(questions),
            resources,
            starter,
        })
    }

    /// Returns the subject catalog.
    #[must_use]
    pub fn catalog(&self) -> &SubjectCatalog {
        &self.catalog
    }

    /// Returns a shared handle to the question bank.
    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.questions)
    }

    /// Returns the resource catalog.
    #[must_use]
    pub fn resources(&self) -> &ResourceCatalog {
        &self.resources
    }

    /// Returns the starter progress values.
    #[must_use]
    pub fn starter(&self) -> &StarterProgress {
        &self.starter
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

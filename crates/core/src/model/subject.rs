use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubjectError {
    #[error("subject name cannot be empty")]
    EmptyName,

    #[error("subject {0} is listed more than once")]
    Duplicate(Subject),

    #[error("unknown subject: {name}")]
    Unknown { name: String },
}

//
// ─── SUBJECT ───────────────────────────────────────────────────────────────────
//

/// A study topic such as `Math` or `History`.
///
/// Subjects key quizzes, plans and progress. The name is trimmed and never empty.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    /// Creates a validated subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::EmptyName` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, SubjectError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SubjectError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the trimmed name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn builtin(name: &'static str) -> Self {
        Self(name.to_owned())
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject({})", self.0)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Subject {
    type Err = SubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Subject {
    type Error = SubjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.0
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Ordered, duplicate-free list of subjects a learner can choose from.
///
/// The order is the display order used for charts and listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    /// Builds a catalog preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Duplicate` if a subject appears twice.
    pub fn new(subjects: impl IntoIterator<Item = Subject>) -> Result<Self, SubjectError> {
        let mut ordered: Vec<Subject> = Vec::new();
        for subject in subjects {
            if ordered.contains(&subject) {
                return Err(SubjectError::Duplicate(subject));
            }
            ordered.push(subject);
        }
        Ok(Self { subjects: ordered })
    }

    /// The four subjects offered out of the box.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            subjects: ["Math", "Science", "History", "Literature"]
                .into_iter()
                .map(Subject::builtin)
                .collect(),
        }
    }

    /// Returns the subjects in catalog order.
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Returns true if `subject` is in the catalog (exact match).
    #[must_use]
    pub fn contains(&self, subject: &Subject) -> bool {
        self.subjects.contains(subject)
    }

    /// Position of the subject in display order.
    #[must_use]
    pub fn position(&self, subject: &Subject) -> Option<usize> {
        self.subjects.iter().position(|s| s == subject)
    }

    /// Looks up a subject by name, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Unknown` if no catalog entry matches.
    pub fn resolve(&self, name: &str) -> Result<Subject, SubjectError> {
        let wanted = name.trim();
        self.subjects
            .iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| SubjectError::Unknown {
                name: wanted.to_owned(),
            })
    }
}

impl Default for SubjectCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_trims_name() {
        let subject = Subject::new("  Math ").unwrap();
        assert_eq!(subject.as_str(), "Math");
        assert_eq!(subject.to_string(), "Math");
    }

    #[test]
    fn subject_rejects_blank_name() {
        assert_eq!(Subject::new("   ").unwrap_err(), SubjectError::EmptyName);
        assert!("".parse::<Subject>().is_err());
    }

    #[test]
    fn standard_catalog_keeps_display_order() {
        let catalog = SubjectCatalog::standard();
        let names: Vec<_> = catalog.iter().map(Subject::as_str).collect();
        assert_eq!(names, ["Math", "Science", "History", "Literature"]);
        assert_eq!(catalog.position(&Subject::new("History").unwrap()), Some(2));
    }

    #[test]
    fn catalog_rejects_duplicates() {
        let math = Subject::new("Math").unwrap();
        let err = SubjectCatalog::new([math.clone(), math.clone()]).unwrap_err();
        assert_eq!(err, SubjectError::Duplicate(math));
    }

    #[test]
    fn resolve_ignores_case() {
        let catalog = SubjectCatalog::standard();
        assert_eq!(catalog.resolve(" science ").unwrap().as_str(), "Science");
        assert!(matches!(
            catalog.resolve("Art"),
            Err(SubjectError::Unknown { name }) if name == "Art"
        ));
    }
}

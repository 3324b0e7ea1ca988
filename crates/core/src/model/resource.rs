use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

use crate::model::{StudyPlan, Subject, SubjectCatalog};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResourceError {
    #[error("resource title cannot be empty")]
    EmptyTitle,

    #[error("invalid resource URL: {raw}")]
    InvalidUrl { raw: String },
}

/// A named external study resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    title: String,
    url: Url,
}

impl ResourceLink {
    /// # Errors
    ///
    /// Returns `ResourceError` if the title is blank or the URL does not parse.
    pub fn new(title: impl Into<String>, url: &str) -> Result<Self, ResourceError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ResourceError::EmptyTitle);
        }
        let url = Url::parse(url.trim()).map_err(|_| ResourceError::InvalidUrl {
            raw: url.to_owned(),
        })?;
        Ok(Self {
            title: title.trim().to_owned(),
            url,
        })
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the parsed link target.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Static subject → links reference table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceCatalog {
    links: BTreeMap<Subject, Vec<ResourceLink>>,
}

impl ResourceCatalog {
    /// Returns an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends links for `subject`, keeping any already present.
    #[must_use]
    pub fn with_links(mut self, subject: Subject, links: Vec<ResourceLink>) -> Self {
        self.links.entry(subject).or_default().extend(links);
        self
    }

    /// Returns the links for `subject`; empty when it has none.
    #[must_use]
    pub fn links_for(&self, subject: &Subject) -> &[ResourceLink] {
        self.links.get(subject).map(Vec::as_slice).unwrap_or_default()
    }

    /// Links for the plan's subjects in plan order.
    ///
    /// A plan without subjects gets every subject in catalog order. Subjects with no
    /// links are skipped.
    #[must_use]
    pub fn recommended_for<'a>(
        &'a self,
        plan: &'a StudyPlan,
        catalog: &'a SubjectCatalog,
    ) -> Vec<(&'a Subject, &'a [ResourceLink])> {
        let subjects = if plan.subjects().is_empty() {
            catalog.subjects()
        } else {
            plan.subjects()
        };

        subjects
            .iter()
            .map(|s| (s, self.links_for(s)))
            .filter(|(_, links)| !links.is_empty())
            .collect()
    }

    /// Every subject with links, in catalog order.
    #[must_use]
    pub fn all<'a>(
        &'a self,
        catalog: &'a SubjectCatalog,
    ) -> Vec<(&'a Subject, &'a [ResourceLink])> {
        catalog
            .iter()
            .map(|s| (s, self.links_for(s)))
            .filter(|(_, links)| !links.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudyHours;

    fn subject(name: &str) -> Subject {
        Subject::new(name).unwrap()
    }

    fn catalog() -> ResourceCatalog {
        ResourceCatalog::new()
            .with_links(
                subject("Math"),
                vec![
                    ResourceLink::new("Khan Academy Math Lessons", "https://www.khanacademy.org")
                        .unwrap(),
                ],
            )
            .with_links(
                subject("History"),
                vec![
                    ResourceLink::new("History.com Articles", "https://www.history.com").unwrap(),
                ],
            )
    }

    #[test]
    fn link_rejects_bad_input() {
        assert_eq!(
            ResourceLink::new(" ", "https://example.com").unwrap_err(),
            ResourceError::EmptyTitle
        );
        assert!(matches!(
            ResourceLink::new("Notes", "not a url"),
            Err(ResourceError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn unknown_subject_has_no_links() {
        assert!(catalog().links_for(&subject("Art")).is_empty());
    }

    #[test]
    fn recommendations_follow_plan_subjects() {
        let resources = catalog();
        let subjects = SubjectCatalog::standard();
        let plan = StudyPlan::new(
            "Ana",
            [subject("History"), subject("Science"), subject("Math")],
            StudyHours::default(),
            "",
        );

        let picked: Vec<_> = resources
            .recommended_for(&plan, &subjects)
            .into_iter()
            .map(|(s, _)| s.as_str())
            .collect();
        assert_eq!(picked, ["History", "Math"]);
    }

    #[test]
    fn empty_plan_gets_everything() {
        let resources = catalog();
        let subjects = SubjectCatalog::standard();
        let plan = StudyPlan::new("Ana", Vec::new(), StudyHours::default(), "");

        let picked: Vec<_> = resources
            .recommended_for(&plan, &subjects)
            .into_iter()
            .map(|(s, _)| s.as_str())
            .collect();
        assert_eq!(picked, ["Math", "History"]);
        assert_eq!(resources.all(&subjects).len(), 2);
    }
}

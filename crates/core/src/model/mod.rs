mod plan;
mod progress;
mod question;
mod quiz;
mod resource;
mod subject;

pub use subject::{Subject, SubjectCatalog, SubjectError};

pub use plan::{MAX_STUDY_HOURS, MIN_STUDY_HOURS, StudyHours, StudyPlan};
pub use progress::{Percent, ProgressRecord, SubjectSummary};
pub use question::{AnswerOption, Question, QuestionBank, QuestionBankError};
pub use quiz::{QuizOutcome, QuizOutcomeError, QuizScore};
pub use resource::{ResourceCatalog, ResourceError, ResourceLink};

#![forbid(unsafe_code)]

pub mod error;
pub mod plan_service;
pub mod progress_tracker;
pub mod progress_view;
pub mod quiz;
pub mod reference;
pub mod study_session;

pub use study_core::Clock;

pub use error::{QuizError, ReferenceDataError};
pub use plan_service::{PlanConfirmation, StudyPlanManager};
pub use progress_tracker::ProgressTracker;
pub use progress_view::{ProgressBar, ProgressSnapshot, ScorePoint, SubjectProgress};
pub use quiz::{QuizEngine, QuizProgress, QuizSession, QuizState};
pub use reference::{ReferenceData, StarterProgress};
pub use study_session::StudySession;

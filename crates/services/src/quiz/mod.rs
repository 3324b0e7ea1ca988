mod engine;
mod progress;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::QuizEngine;
pub use progress::{QuizProgress, QuizState};
pub use session::QuizSession;

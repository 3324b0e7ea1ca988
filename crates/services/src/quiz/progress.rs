/// Where a quiz session sits in its lifecycle. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress,
    Completed,
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub state: QuizState,
}

impl QuizProgress {
    /// Returns true once every question has an answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Completed
    }
}

use super::*;

impl QuizEngine {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn score(&self) -> usize {
        match self.state {
            QuizState::InProgress { score, .. } | QuizState::Complete { score } => score,
        }
    }

    /// `None` cuando el quiz ya terminó
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { current, .. } => Some(current),
            QuizState::Complete { .. } => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn selected_option(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { selected, .. } => selected,
            QuizState::Complete { .. } => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.selected_option().is_some()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Complete { .. })
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .map(|i| i + 1 == self.questions.len())
            .unwrap_or(false)
    }
}

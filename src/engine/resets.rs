use super::*;

impl QuizEngine {
    /// Vuelve al estado inicial sin importar dónde estemos.
    pub fn reset(&mut self) {
        self.state = QuizState::default();
    }
}

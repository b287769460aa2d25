use serde::{Deserialize, Serialize};

/// Número fijo de opciones por pregunta.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,       // Enunciado
    pub options: Vec<String>, // Orden fijo, siempre 4
    pub correct_option: usize,
}

impl Question {
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_option
    }
}

/// Estado del quiz. `selected` a `Some` equivale a "ya respondida".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress {
        current: usize,
        score: usize,
        selected: Option<usize>,
    },
    Complete {
        score: usize,
    },
}

impl Default for QuizState {
    fn default() -> Self {
        QuizState::InProgress {
            current: 0,
            score: 0,
            selected: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Correct,
    Incorrect,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextQuestion(usize),
    Finished(usize),
    Ignored,
}

use crate::error::QuizError;
use crate::model::{AdvanceOutcome, OPTIONS_PER_QUESTION, Question, QuizState, SelectOutcome};
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionStatus, OptionView, QuizSummary};

/// Máquina de estados del quiz. No sabe nada de egui: la UI solo llama a
/// `select_option`, `advance` y `reset` y pinta lo que devuelven las consultas.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    state: QuizState,
}

impl QuizEngine {
    /// Valida el banco y arranca en `InProgress(0, sin responder)`.
    /// Un banco vacío se rechaza aquí.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        validate_bank(&questions)?;
        Ok(Self {
            questions,
            state: QuizState::default(),
        })
    }
}

fn validate_bank(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::EmptyBank);
    }

    let mut seen = HashSet::new();
    for q in questions {
        if !seen.insert(q.id) {
            return Err(QuizError::DuplicateId(q.id));
        }
        if q.options.len() != OPTIONS_PER_QUESTION {
            return Err(QuizError::WrongOptionCount {
                id: q.id,
                found: q.options.len(),
            });
        }
        if q.correct_option >= q.options.len() {
            return Err(QuizError::CorrectOptionOutOfRange {
                id: q.id,
                index: q.correct_option,
                len: q.options.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn question(id: u32, correct_option: usize) -> Question {
    Question {
        id,
        prompt: format!("Pregunta {id}"),
        options: (0..OPTIONS_PER_QUESTION).map(|i| format!("Opción {i}")).collect(),
        correct_option,
    }
}

#[cfg(test)]
pub(crate) fn sample_engine() -> QuizEngine {
    QuizEngine::new(vec![
        question(1, 1),
        question(2, 2),
        question(3, 0),
        question(4, 0),
        question(5, 3),
    ])
    .expect("sample bank ok")
}

use crate::data::read_questions_embedded;
use crate::engine::QuizEngine;
use crate::error::QuizError;
use crate::model::Question;

// Submódulos
pub mod actions;

pub struct QuizApp {
    pub engine: QuizEngine,
    pub message: String,
}

impl QuizApp {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let engine = QuizEngine::new(questions)?;
        log::info!("Quiz listo con {} preguntas", engine.total());
        Ok(Self {
            engine,
            message: String::new(),
        })
    }

    /// Entrypoint con el banco embebido en el binario
    pub fn from_embedded() -> Result<Self, QuizError> {
        Self::new(read_questions_embedded()?)
    }
}

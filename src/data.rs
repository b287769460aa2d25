// src/data.rs

use crate::error::QuizError;
use crate::model::Question;

/// Parsea un banco de preguntas en YAML
pub fn parse_questions(yaml: &str) -> Result<Vec<Question>, QuizError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<Vec<Question>, QuizError> {
    let file_content = include_str!("data/quiz_questions.yaml");
    parse_questions(file_content)
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("No se pudo parsear el banco de preguntas: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("El banco de preguntas está vacío")]
    EmptyBank,

    #[error("La pregunta {id} tiene {found} opciones (se esperan 4)")]
    WrongOptionCount { id: u32, found: usize },

    #[error("La pregunta {id} marca la opción {index} como correcta pero solo tiene {len}")]
    CorrectOptionOutOfRange { id: u32, index: usize, len: usize },

    #[error("Id de pregunta duplicado: {0}")]
    DuplicateId(u32),
}

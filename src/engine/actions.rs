use super::*;

impl QuizEngine {
    /// Registra la respuesta a la pregunta `question_index`.
    ///
    /// Solo cuenta el primer clic: si la pregunta ya está respondida, si el
    /// índice de pregunta no es el actual o si la opción no existe, no cambia nada.
    pub fn select_option(&mut self, question_index: usize, option_index: usize) -> SelectOutcome {
        let QuizState::InProgress {
            current,
            score,
            selected,
        } = &mut self.state
        else {
            log::debug!("select_option ignorado: el quiz ya terminó");
            return SelectOutcome::Ignored;
        };

        if selected.is_some() {
            log::debug!("select_option ignorado: pregunta {current} ya respondida");
            return SelectOutcome::Ignored;
        }
        if question_index != *current {
            log::debug!("select_option ignorado: clic tardío en pregunta {question_index}");
            return SelectOutcome::Ignored;
        }

        let q = &self.questions[*current];
        if option_index >= q.options.len() {
            log::debug!("select_option ignorado: opción {option_index} fuera de rango");
            return SelectOutcome::Ignored;
        }

        *selected = Some(option_index);
        if q.is_correct(option_index) {
            *score += 1;
            SelectOutcome::Correct
        } else {
            SelectOutcome::Incorrect
        }
    }
}

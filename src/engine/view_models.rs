use super::*;

impl QuizEngine {
    /// Estado visual de cada opción de la pregunta actual. Vacío si el quiz terminó.
    pub fn option_views(&self) -> Vec<OptionView> {
        let Some(q) = self.current_question() else {
            return Vec::new();
        };
        let selected = self.selected_option();

        q.options
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let status = match selected {
                    None => OptionStatus::Available,
                    Some(_) if q.is_correct(idx) => OptionStatus::Correct,
                    Some(s) if s == idx => OptionStatus::Incorrect,
                    Some(_) => OptionStatus::Locked,
                };
                OptionView {
                    idx,
                    text: text.clone(),
                    status,
                }
            })
            .collect()
    }

    /// Texto del botón de avanzar; `None` mientras no haya respuesta.
    pub fn advance_label(&self) -> Option<&'static str> {
        if !self.is_answered() {
            return None;
        }
        Some(if self.is_last_question() {
            "Show Results"
        } else {
            "Next Question"
        })
    }

    pub fn progress_label(&self) -> Option<String> {
        self.current_index()
            .map(|i| format!("Question {}/{}", i + 1, self.total()))
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score())
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        match self.state {
            QuizState::Complete { score } => Some(QuizSummary {
                score,
                total: self.total(),
            }),
            QuizState::InProgress { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sample_engine;

    fn statuses(engine: &QuizEngine) -> Vec<OptionStatus> {
        engine.option_views().iter().map(|o| o.status).collect()
    }

    #[test]
    fn unanswered_options_are_all_enabled() {
        let engine = sample_engine();
        let views = engine.option_views();
        assert_eq!(views.len(), 4);
        assert!(views.iter().all(OptionView::enabled));
        assert_eq!(engine.advance_label(), None);
    }

    #[test]
    fn correct_pick_marks_only_the_correct_option() {
        let mut engine = sample_engine();
        engine.select_option(0, 1);
        use OptionStatus::*;
        assert_eq!(statuses(&engine), vec![Locked, Correct, Locked, Locked]);
        assert!(engine.option_views().iter().all(|o| !o.enabled()));
    }

    #[test]
    fn wrong_pick_marks_selection_and_correct_option() {
        let mut engine = sample_engine();
        engine.select_option(0, 3);
        use OptionStatus::*;
        assert_eq!(statuses(&engine), vec![Locked, Correct, Locked, Incorrect]);
    }

    #[test]
    fn locked_view_follows_the_first_click() {
        let mut engine = sample_engine();
        engine.select_option(0, 2);
        engine.select_option(0, 0);
        use OptionStatus::*;
        assert_eq!(statuses(&engine), vec![Locked, Correct, Incorrect, Locked]);
    }

    #[test]
    fn header_labels_track_position_and_score() {
        let mut engine = sample_engine();
        assert_eq!(engine.progress_label().as_deref(), Some("Question 1/5"));
        engine.select_option(0, 1);
        engine.advance();
        assert_eq!(engine.progress_label().as_deref(), Some("Question 2/5"));
        assert_eq!(engine.score_label(), "Score: 1");
    }

    #[test]
    fn summary_only_exists_once_complete() {
        let mut engine = sample_engine();
        assert_eq!(engine.summary(), None);
        for i in 0..engine.total() {
            engine.select_option(i, 1);
            engine.advance();
        }
        let summary = engine.summary().expect("complete");
        assert_eq!(summary.label(), "You scored 1 out of 5");
        assert!(engine.option_views().is_empty());
        assert_eq!(engine.progress_label(), None);
    }
}

use super::*;

impl QuizEngine {
    /// Pasa a la siguiente pregunta, o a `Complete` si era la última.
    /// Sin respuesta previa no hace nada.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let QuizState::InProgress {
            current,
            score,
            selected,
        } = self.state
        else {
            log::debug!("advance ignorado: el quiz ya terminó");
            return AdvanceOutcome::Ignored;
        };

        if selected.is_none() {
            log::debug!("advance ignorado: pregunta {current} sin responder");
            return AdvanceOutcome::Ignored;
        }

        let next = current + 1;
        if next < self.questions.len() {
            self.state = QuizState::InProgress {
                current: next,
                score,
                selected: None,
            };
            AdvanceOutcome::NextQuestion(next)
        } else {
            self.state = QuizState::Complete { score };
            AdvanceOutcome::Finished(score)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sample_engine;

    #[test]
    fn advance_before_answering_is_ignored() {
        let mut engine = sample_engine();
        assert_eq!(engine.advance(), AdvanceOutcome::Ignored);
        assert_eq!(engine.current_index(), Some(0));
    }

    #[test]
    fn advance_moves_one_step_with_a_clean_slate() {
        let mut engine = sample_engine();
        engine.select_option(0, 1);
        assert_eq!(engine.advance(), AdvanceOutcome::NextQuestion(1));
        assert_eq!(engine.current_index(), Some(1));
        assert_eq!(engine.selected_option(), None);
        assert!(!engine.is_answered());
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn index_grows_by_one_until_complete() {
        let mut engine = sample_engine();
        let total = engine.total();
        for i in 0..total {
            assert_eq!(engine.current_index(), Some(i));
            engine.select_option(i, 0);
            let outcome = engine.advance();
            if i + 1 < total {
                assert_eq!(outcome, AdvanceOutcome::NextQuestion(i + 1));
            } else {
                assert!(matches!(outcome, AdvanceOutcome::Finished(_)));
            }
            assert!(engine.score() <= total);
        }
        assert!(engine.is_complete());
        assert_eq!(engine.current_index(), None);
        assert_eq!(engine.advance(), AdvanceOutcome::Ignored);
    }

    #[test]
    fn five_questions_with_one_miss_score_four() {
        let mut engine = sample_engine();
        let picks = [1, 0, 0, 0, 3];
        for (i, pick) in picks.into_iter().enumerate() {
            engine.select_option(i, pick);
            engine.advance();
        }
        assert_eq!(engine.state(), &QuizState::Complete { score: 4 });
        assert_eq!(engine.summary(), Some(QuizSummary { score: 4, total: 5 }));
    }

    #[test]
    fn last_question_offers_results_and_finishes_with_running_tally() {
        let mut engine = sample_engine();
        for i in 0..4 {
            engine.select_option(i, if i == 0 { 1 } else { 3 });
            assert_eq!(engine.advance_label(), Some("Next Question"));
            engine.advance();
        }
        assert!(engine.is_last_question());
        engine.select_option(4, 3);
        assert_eq!(engine.advance_label(), Some("Show Results"));
        let tally = engine.score();
        assert_eq!(engine.advance(), AdvanceOutcome::Finished(tally));
        assert_eq!(tally, 2);
    }

    #[test]
    fn single_question_bank_finishes_on_first_advance() {
        let mut engine = QuizEngine::new(vec![crate::engine::question(9, 2)]).expect("bank ok");
        engine.select_option(0, 2);
        assert_eq!(engine.advance(), AdvanceOutcome::Finished(1));
    }
}

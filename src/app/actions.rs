use super::*;
use crate::model::{AdvanceOutcome, SelectOutcome};

impl QuizApp {
    pub fn choose_option(&mut self, question_index: usize, option_index: usize) {
        match self.engine.select_option(question_index, option_index) {
            SelectOutcome::Correct => {
                log::info!("Pregunta {}: opción {option_index} correcta", question_index + 1);
                self.message = "✅ Correct!".into();
            }
            SelectOutcome::Incorrect => {
                log::info!("Pregunta {}: opción {option_index} incorrecta", question_index + 1);
                self.message = "❌ Incorrect".into();
            }
            SelectOutcome::Ignored => {}
        }
    }

    pub fn next_question(&mut self) {
        match self.engine.advance() {
            AdvanceOutcome::NextQuestion(_) => self.message.clear(),
            AdvanceOutcome::Finished(score) => {
                log::info!("Quiz terminado: {score}/{}", self.engine.total());
                self.message.clear();
            }
            AdvanceOutcome::Ignored => {}
        }
    }

    pub fn restart(&mut self) {
        log::info!("Reiniciando quiz");
        self.engine.reset();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> QuizApp {
        QuizApp::from_embedded().expect("embedded bank ok")
    }

    #[test]
    fn feedback_message_follows_the_answer() {
        let mut app = app();
        app.choose_option(0, 1);
        assert_eq!(app.message, "✅ Correct!");
        app.next_question();
        assert!(app.message.is_empty());
        app.choose_option(1, 0);
        assert_eq!(app.message, "❌ Incorrect");
    }

    #[test]
    fn ignored_click_keeps_previous_feedback() {
        let mut app = app();
        app.choose_option(0, 0);
        app.choose_option(0, 1);
        assert_eq!(app.message, "❌ Incorrect");
        assert_eq!(app.engine.score(), 0);
    }

    #[test]
    fn restart_clears_feedback_and_state() {
        let mut app = app();
        for (i, pick) in [1, 2, 0, 0, 3].into_iter().enumerate() {
            app.choose_option(i, pick);
            app.next_question();
        }
        assert_eq!(app.engine.summary().map(|s| s.score), Some(5));
        app.restart();
        assert!(app.message.is_empty());
        assert_eq!(app.engine.current_index(), Some(0));
        assert_eq!(app.engine.score(), 0);
    }

    #[test]
    fn empty_bank_fails_to_build_the_app() {
        assert!(matches!(QuizApp::new(vec![]), Err(QuizError::EmptyBank)));
    }
}

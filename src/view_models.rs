// src/view_models.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    Available, // sin responder, se puede pulsar
    Correct,   // la opción correcta, tras responder
    Incorrect, // la elegida, si no era la correcta
    Locked,    // el resto, tras responder
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub idx: usize,
    pub text: String,
    pub status: OptionStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
}

impl OptionView {
    pub fn enabled(&self) -> bool {
        self.status == OptionStatus::Available
    }

    pub fn label(&self) -> String {
        match self.status {
            OptionStatus::Correct => format!("✅ {}", self.text),
            OptionStatus::Incorrect => format!("❌ {}", self.text),
            OptionStatus::Available | OptionStatus::Locked => self.text.clone(),
        }
    }
}

impl QuizSummary {
    pub fn label(&self) -> String {
        format!("You scored {} out of {}", self.score, self.total)
    }
}

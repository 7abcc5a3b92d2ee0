// src/models/view.rs

use serde::Serialize;

use crate::models::session::QuizSession;

/// The three mutually exclusive screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Input,
    Material,
    Quiz,
}

/// Why a forward transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRefused {
    NotGenerated,
    Loading,
}

/// Owns the active view. Forward moves need a completed generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewController {
    current: View,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn show_material(&mut self, session: &QuizSession) -> Result<View, TransitionRefused> {
        self.forward(View::Material, session)
    }

    pub fn show_quiz(&mut self, session: &QuizSession) -> Result<View, TransitionRefused> {
        self.forward(View::Quiz, session)
    }

    fn forward(&mut self, target: View, session: &QuizSession) -> Result<View, TransitionRefused> {
        if session.loading {
            return Err(TransitionRefused::Loading);
        }
        if !session.is_generated() {
            return Err(TransitionRefused::NotGenerated);
        }
        self.current = target;
        Ok(target)
    }

    /// MATERIAL/QUIZ -> INPUT, keeping the generated data. Ignored on INPUT.
    pub fn back(&mut self, session: &mut QuizSession) -> bool {
        if self.current == View::Input {
            return false;
        }
        self.current = View::Input;
        session.clear_error();
        true
    }

    /// "Generate new": wipes the session and returns to the input view.
    pub fn generate_new(&mut self, session: &mut QuizSession) -> Result<(), TransitionRefused> {
        if session.loading {
            return Err(TransitionRefused::Loading);
        }
        session.reset();
        self.current = View::Input;
        Ok(())
    }

    /// A generation attempt always happens on, and stays on, the input view.
    pub fn settle_after_generation(&mut self) {
        self.current = View::Input;
    }
}

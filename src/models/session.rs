// src/models/session.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::GenerationError;
use crate::models::question::{GeneratedContent, Question};
use crate::models::score::{Score, score};

/// Everything one generation cycle owns: input, generated content, answers.
///
/// All mutation goes through the methods below. The derived values
/// (`all_answered`, `result`) are recomputed on demand, never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuizSession {
    pub input_text: String,
    pub questions: Vec<Question>,
    pub material: String,
    /// Question index -> chosen option. Keys stay within `0..questions.len()`.
    pub answers: BTreeMap<usize, String>,
    pub submitted: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub generated_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input is editable only while nothing is in flight.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.loading {
            return;
        }
        self.input_text = text.into();
    }

    /// Local validation failure; nothing else changes.
    pub fn reject_input(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Whether `option` is one of the choices of question `index`.
    pub fn offers_option(&self, index: usize, option: &str) -> bool {
        self.questions
            .get(index)
            .is_some_and(|q| q.options.iter().any(|o| o == option))
    }

    /// Must run before the Content Client is called.
    pub fn start_generation(&mut self) {
        self.loading = true;
        self.error = None;
        self.questions.clear();
        self.material.clear();
        self.answers.clear();
        self.submitted = false;
        self.generated_at = None;
    }

    /// Commits a finished request. Questions and material land together or not at all.
    pub fn apply_generation_result(&mut self, result: Result<GeneratedContent, GenerationError>) {
        self.loading = false;
        match result {
            Ok(content) => {
                self.questions = content.questions;
                self.material = content.material;
                self.generated_at = Some(Utc::now());
            }
            Err(err) => {
                self.questions.clear();
                self.material.clear();
                self.error = Some(err.user_message());
            }
        }
    }

    /// Last write wins. Ignored after submission or for an unknown index.
    pub fn select_answer(&mut self, index: usize, option: impl Into<String>) -> bool {
        if self.submitted || index >= self.questions.len() {
            return false;
        }
        self.answers.insert(index, option.into());
        true
    }

    /// Locks the answers. Idempotent; ignored when there is nothing to answer.
    pub fn submit(&mut self) -> bool {
        if self.questions.is_empty() {
            return false;
        }
        self.submitted = true;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Questions and material are both present.
    pub fn is_generated(&self) -> bool {
        !self.questions.is_empty() && !self.material.is_empty()
    }

    pub fn all_answered(&self) -> bool {
        !self.questions.is_empty() && self.answers.len() == self.questions.len()
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Score, once the answers are locked.
    pub fn result(&self) -> Option<Score> {
        self.submitted.then(|| score(self))
    }
}

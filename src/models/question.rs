// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::INPUT_MAX_CHARS;

/// One generated multiple-choice question, as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question text. May contain lightweight markdown.
    #[serde(rename = "question")]
    pub prompt: String,

    /// Answer choices in backend order. Labels A, B, C... follow this order.
    pub options: Vec<String>,

    /// Must be one of `options`. The backend is trusted on this.
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// Result of one successful generation cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    pub questions: Vec<Question>,
    pub material: String,
}

/// Body POSTed to the content backend.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub text: &'a str,
    pub format: &'a str,
}

/// Success envelope: `{"data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub data: GeneratedPayload,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedPayload {
    pub questions: Vec<Question>,
    #[serde(rename = "materi_penuh")]
    pub material: String,
}

/// Error envelope of a non-2xx answer. `error` may be absent.
#[derive(Debug, Deserialize)]
pub struct BackendErrorBody {
    pub error: Option<String>,
}

/// Form posted by the input view.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateForm {
    #[validate(length(
        max = INPUT_MAX_CHARS,
        message = "Teks terlalu panjang (maksimal 20000 karakter)."
    ))]
    #[serde(default)]
    pub text: String,
}

/// Form posted by an option button of the quiz view.
#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub index: usize,
    pub option: String,
}

// src/handlers/api.rs

use std::collections::BTreeMap;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::{score::Score, view::View},
    state::SharedWorkspace,
};

/// Question as exposed by the snapshot. The correct answer stays hidden until submission.
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer", skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub view: View,
    pub input_text: String,
    pub loading: bool,
    pub error: Option<String>,
    pub questions: Vec<PublicQuestion>,
    pub material: String,
    pub answers: BTreeMap<usize, String>,
    pub all_answered: bool,
    pub submitted: bool,
    pub score: Option<Score>,
    pub generated_at: Option<DateTime<Utc>>,
}

/// Read-only JSON view of the current session.
pub async fn session_snapshot(State(workspace): State<SharedWorkspace>) -> impl IntoResponse {
    let ws = workspace.lock().await;
    let session = &ws.session;

    let questions = session
        .questions
        .iter()
        .map(|q| PublicQuestion {
            question: q.prompt.clone(),
            options: q.options.clone(),
            correct_answer: session.submitted.then(|| q.correct_answer.clone()),
        })
        .collect();

    Json(SessionSnapshot {
        view: ws.view.current(),
        input_text: session.input_text.clone(),
        loading: session.loading,
        error: session.error.clone(),
        questions,
        material: session.material.clone(),
        answers: session.answers.clone(),
        all_answered: session.all_answered(),
        submitted: session.submitted,
        score: session.result(),
        generated_at: session.generated_at,
    })
}

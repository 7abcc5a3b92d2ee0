// src/handlers/quiz.rs

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};

use crate::{
    models::{question::AnswerForm, view::View},
    state::SharedWorkspace,
};

/// Records the chosen option for one question.
///
/// Only accepted on the quiz view, and only for an option the question offers.
/// Ignored once the quiz is submitted or when the index is out of range.
pub async fn select_answer(
    State(workspace): State<SharedWorkspace>,
    Form(form): Form<AnswerForm>,
) -> impl IntoResponse {
    let mut ws = workspace.lock().await;
    if ws.view.current() != View::Quiz {
        tracing::warn!("Answer for question {} ignored outside the quiz view", form.index);
        return Redirect::to("/");
    }
    if !ws.session.offers_option(form.index, &form.option) {
        tracing::warn!("Answer for question {} is not one of its options", form.index);
        return Redirect::to("/");
    }
    if !ws.session.select_answer(form.index, form.option) {
        tracing::debug!("Answer for question {} ignored", form.index);
    }
    Redirect::to("/")
}

/// Locks the answers and reveals the score.
///
/// Only accepted on the quiz view once every question has an answer.
pub async fn submit(State(workspace): State<SharedWorkspace>) -> impl IntoResponse {
    let mut ws = workspace.lock().await;
    if ws.view.current() != View::Quiz {
        tracing::warn!("Submission ignored outside the quiz view");
        return Redirect::to("/");
    }
    if !ws.session.all_answered() {
        tracing::warn!(
            "Submission refused: {} of {} questions answered",
            ws.session.answers.len(),
            ws.session.questions.len()
        );
        return Redirect::to("/");
    }

    if ws.session.submit() {
        if let Some(score) = ws.session.result() {
            tracing::info!(
                "Quiz submitted: {} of {} correct ({}%)",
                score.correct,
                score.total,
                score.percent
            );
        }
    }
    Redirect::to("/")
}

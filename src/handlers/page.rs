// src/handlers/page.rs

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use maud::Markup;
use validator::{Validate, ValidationErrors};

use crate::{
    error::{AppError, INPUT_REQUIRED_MESSAGE},
    models::question::GenerateForm,
    render::render_workspace,
    state::{SharedGenerator, SharedWorkspace},
};

/// Renders the active view.
pub async fn index(State(workspace): State<SharedWorkspace>) -> Markup {
    let ws = workspace.lock().await;
    render_workspace(&ws)
}

/// Runs one generation cycle for the submitted text.
///
/// * Blank or oversized text is rejected locally; nothing is cleared.
/// * Otherwise the session is cleared, the backend is called, and the result
///   (content or error message) is committed. The view stays on input.
/// * Refused with 409 while another generation is in flight.
pub async fn generate(
    State(workspace): State<SharedWorkspace>,
    State(generator): State<SharedGenerator>,
    Form(form): Form<GenerateForm>,
) -> Result<impl IntoResponse, AppError> {
    {
        let mut ws = workspace.lock().await;
        if ws.session.loading {
            tracing::warn!("Generation requested while another one is in flight");
            return Err(AppError::Conflict(
                "A generation is already in progress".to_string(),
            ));
        }

        ws.view.settle_after_generation();
        ws.session.set_input(form.text.clone());

        if let Err(errors) = form.validate() {
            tracing::info!("Rejected input: {}", errors);
            ws.session.reject_input(first_message(&errors));
            return Ok(Redirect::to("/"));
        }
        if form.text.trim().is_empty() {
            tracing::info!("Rejected blank input");
            ws.session.reject_input(INPUT_REQUIRED_MESSAGE);
            return Ok(Redirect::to("/"));
        }

        ws.session.start_generation();
    }

    // Spawned so a dropped connection cannot leave the session stuck in `loading`.
    let text = form.text;
    let task = tokio::spawn(async move {
        let result = generator.generate(&text).await;
        if let Err(e) = &result {
            tracing::warn!("Generation failed: {}", e);
        }
        let mut ws = workspace.lock().await;
        ws.session.apply_generation_result(result);
        ws.view.settle_after_generation();
    });

    task.await
        .map_err(|e| AppError::InternalServerError(format!("generation task failed: {}", e)))?;

    Ok(Redirect::to("/"))
}

pub async fn show_material(State(workspace): State<SharedWorkspace>) -> impl IntoResponse {
    let mut guard = workspace.lock().await;
    let ws = &mut *guard;
    if let Err(reason) = ws.view.show_material(&ws.session) {
        tracing::warn!("Material view refused: {:?}", reason);
    }
    Redirect::to("/")
}

pub async fn show_quiz(State(workspace): State<SharedWorkspace>) -> impl IntoResponse {
    let mut guard = workspace.lock().await;
    let ws = &mut *guard;
    if let Err(reason) = ws.view.show_quiz(&ws.session) {
        tracing::warn!("Quiz view refused: {:?}", reason);
    }
    Redirect::to("/")
}

/// Back to the input view; generated data survives. No-op on the input view.
pub async fn back(State(workspace): State<SharedWorkspace>) -> impl IntoResponse {
    let mut guard = workspace.lock().await;
    let ws = &mut *guard;
    if !ws.view.back(&mut ws.session) {
        tracing::debug!("Back ignored on the input view");
    }
    Redirect::to("/")
}

/// "Generate new": full reset.
pub async fn generate_new(
    State(workspace): State<SharedWorkspace>,
) -> Result<impl IntoResponse, AppError> {
    let mut guard = workspace.lock().await;
    let ws = &mut *guard;
    ws.view.generate_new(&mut ws.session).map_err(|_| {
        AppError::Conflict("Cannot reset while a generation is in progress".to_string())
    })?;
    tracing::info!("Session reset");
    Ok(Redirect::to("/"))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

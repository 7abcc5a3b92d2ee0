// tests/view_tests.rs

use prepkilat::error::GenerationError;
use prepkilat::models::{
    question::{GeneratedContent, Question},
    session::QuizSession,
    view::{TransitionRefused, View, ViewController},
};

fn populated() -> QuizSession {
    let mut session = QuizSession::new();
    session.start_generation();
    session.apply_generation_result(Ok(GeneratedContent {
        questions: vec![Question {
            prompt: "Q".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            correct_answer: "A".to_string(),
        }],
        material: "materi".to_string(),
    }));
    session
}

#[test]
fn starts_on_input() {
    assert_eq!(ViewController::new().current(), View::Input);
}

#[test]
fn forward_needs_a_completed_generation() {
    let mut view = ViewController::new();
    let session = QuizSession::new();

    assert_eq!(
        view.show_material(&session),
        Err(TransitionRefused::NotGenerated)
    );
    assert_eq!(view.show_quiz(&session), Err(TransitionRefused::NotGenerated));
    assert_eq!(view.current(), View::Input);
}

#[test]
fn forward_is_refused_while_loading() {
    let mut view = ViewController::new();
    let mut session = populated();
    session.loading = true;

    assert_eq!(view.show_quiz(&session), Err(TransitionRefused::Loading));
    assert_eq!(view.current(), View::Input);
}

#[test]
fn back_keeps_generated_data() {
    let mut view = ViewController::new();
    let mut session = populated();
    session.select_answer(0, "B");

    assert_eq!(view.show_quiz(&session), Ok(View::Quiz));
    view.back(&mut session);
    assert_eq!(view.current(), View::Input);
    assert!(session.is_generated());
    assert_eq!(session.answer(0), Some("B"));

    assert_eq!(view.show_material(&session), Ok(View::Material));
    view.back(&mut session);
    assert_eq!(view.show_quiz(&session), Ok(View::Quiz));
}

#[test]
fn back_on_input_keeps_the_error_banner() {
    let mut view = ViewController::new();
    let mut session = QuizSession::new();
    session.start_generation();
    session.apply_generation_result(Err(GenerationError::Backend {
        status: 500,
        message: Some("rate limited".to_string()),
    }));

    assert!(!view.back(&mut session));
    assert_eq!(view.current(), View::Input);
    assert_eq!(session.error.as_deref(), Some("rate limited"));
}

#[test]
fn back_from_quiz_clears_the_error() {
    let mut view = ViewController::new();
    let mut session = populated();
    view.show_quiz(&session).unwrap();
    session.reject_input("lama");

    assert!(view.back(&mut session));
    assert!(session.error.is_none());
}

#[test]
fn generate_new_resets_everything() {
    let mut view = ViewController::new();
    let mut session = populated();
    session.select_answer(0, "A");
    session.submit();
    view.show_quiz(&session).unwrap();

    view.generate_new(&mut session).unwrap();

    assert_eq!(view.current(), View::Input);
    assert_eq!(session, QuizSession::new());
}

#[test]
fn generate_new_waits_for_loading_to_finish() {
    let mut view = ViewController::new();
    let mut session = QuizSession::new();
    session.set_input("teks");
    session.start_generation();

    assert_eq!(
        view.generate_new(&mut session),
        Err(TransitionRefused::Loading)
    );
    assert!(session.loading);
}

// tests/scoring_tests.rs

use prepkilat::models::{
    question::{GeneratedContent, Question},
    score::{Score, percentage, score},
    session::QuizSession,
};

fn session_with_answers(correct: &[&str]) -> QuizSession {
    let questions = correct
        .iter()
        .map(|c| Question {
            prompt: format!("Pilih {}", c),
            options: vec!["A".into(), "B".into(), "C".into(), "X".into()],
            correct_answer: c.to_string(),
        })
        .collect();

    let mut session = QuizSession::new();
    session.start_generation();
    session.apply_generation_result(Ok(GeneratedContent {
        questions,
        material: "materi".to_string(),
    }));
    session
}

#[test]
fn two_of_three_is_sixty_seven_percent() {
    let mut session = session_with_answers(&["A", "B", "C"]);
    session.select_answer(0, "A");
    session.select_answer(1, "X");
    session.select_answer(2, "C");

    assert_eq!(
        score(&session),
        Score {
            correct: 2,
            total: 3,
            percent: 67
        }
    );
}

#[test]
fn missing_answers_count_as_wrong() {
    let mut session = session_with_answers(&["A", "B", "C", "A"]);
    session.select_answer(1, "B");

    let result = score(&session);
    assert_eq!(result.correct, 1);
    assert_eq!(result.total, 4);
    assert_eq!(result.percent, 25);
}

#[test]
fn result_is_hidden_until_submitted() {
    let mut session = session_with_answers(&["A"]);
    session.select_answer(0, "A");
    assert!(session.result().is_none());

    session.submit();
    assert_eq!(
        session.result(),
        Some(Score {
            correct: 1,
            total: 1,
            percent: 100
        })
    );
}

#[test]
fn empty_quiz_scores_zero() {
    let session = QuizSession::new();
    assert_eq!(
        score(&session),
        Score {
            correct: 0,
            total: 0,
            percent: 0
        }
    );
}

#[test]
fn percentage_rounds_to_nearest() {
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(1, 8), 13);
    assert_eq!(percentage(0, 5), 0);
    assert_eq!(percentage(5, 5), 100);
}

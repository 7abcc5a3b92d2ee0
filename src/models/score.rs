// src/models/score.rs

use serde::Serialize;

use crate::models::session::QuizSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

/// Counts matching answers. Missing answers count as wrong.
///
/// Does not look at `submitted`, so it can score a partially answered quiz.
pub fn score(session: &QuizSession) -> Score {
    let total = session.questions.len();
    let correct = session
        .questions
        .iter()
        .enumerate()
        .filter(|(i, q)| session.answer(*i).is_some_and(|a| q.is_correct(a)))
        .count();

    Score {
        correct,
        total,
        percent: percentage(correct, total),
    }
}

/// Rounded to the nearest whole percent, half away from zero. Zero for an empty quiz.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}

// src/render/quiz.rs

use maud::{Markup, PreEscaped, html};

use crate::models::question::Question;
use crate::models::session::QuizSession;
use crate::render::action_button;
use crate::utils::html::{option_label, render_markdown};

pub fn render(session: &QuizSession) -> Markup {
    html! {
        main class="container quiz-view dark-bg" {
            (action_button("/back", "back-button secondary-btn", "← Kembali ke Input Materi", false))
            h2 class="section-title" { (session.questions.len()) " Soal Pemahaman" }

            div class="quiz-list" {
                @for (i, q) in session.questions.iter().enumerate() {
                    (question_card(i, q, session.answer(i), session.submitted))
                }
            }

            @match session.result() {
                None => {
                    form method="post" action="/quiz/submit" class="inline-form" {
                        button type="submit" class="primary-btn submit-quiz-button" disabled[!session.all_answered()] {
                            "Submit Jawaban & Lihat Skor ✨"
                        }
                    }
                }
                Some(score) => {
                    div class="score-summary primary-btn" {
                        "🎉 Skor Akhir: " (score.correct) " dari " (score.total) " (" (score.percent) "%)"
                    }
                    (action_button(
                        "/new",
                        "generate-new-button secondary-btn",
                        "Buat Kuis Baru ✏️",
                        session.loading,
                    ))
                }
            }
        }
    }
}

fn question_card(index: usize, question: &Question, answer: Option<&str>, submitted: bool) -> Markup {
    let is_correct = submitted && answer.is_some_and(|a| question.is_correct(a));

    let card_class = if submitted {
        if is_correct {
            "quiz-card dark-card correct"
        } else {
            "quiz-card dark-card incorrect"
        }
    } else if answer.is_some() {
        "quiz-card dark-card selected-pending"
    } else {
        "quiz-card dark-card"
    };

    html! {
        div class=(card_class) {
            div class="quiz-question" {
                strong { "Soal " (index + 1) ":" }
                " "
                (PreEscaped(render_markdown(&question.prompt)))
            }
            form method="post" action="/quiz/answer" class="quiz-options" {
                input type="hidden" name="index" value=(index);
                @for (opt_index, option) in question.options.iter().enumerate() {
                    button type="submit" name="option" value=(option)
                        class=(option_class(question, option, answer, submitted))
                        disabled[submitted] {
                        (option_label(opt_index)) ". " (option)
                    }
                }
            }
            @if submitted {
                div class="feedback-message" {
                    @if is_correct {
                        "✅ Benar!"
                    } @else {
                        "❌ Salah. Jawaban yang benar adalah: " (question.correct_answer)
                    }
                }
            }
        }
    }
}

fn option_class(question: &Question, option: &str, answer: Option<&str>, submitted: bool) -> String {
    let mut class = String::from("option-button secondary-btn");
    let chosen = answer == Some(option);
    if !submitted {
        if chosen {
            class.push_str(" selected");
        }
    } else {
        if question.is_correct(option) {
            class.push_str(" correct-answer-reveal");
        }
        if chosen && !question.is_correct(option) {
            class.push_str(" selected-incorrect");
        }
    }
    class
}

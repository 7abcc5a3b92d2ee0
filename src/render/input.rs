// src/render/input.rs

use maud::{Markup, html};

use crate::models::session::QuizSession;
use crate::render::action_button;

pub fn render(session: &QuizSession) -> Markup {
    let loading = session.loading;

    html! {
        main class="container landing-view dark-bg" {
            div class="split-layout-container" {
                div class="left-promo-panel" {
                    div class="logo-section" {
                        (logo())
                        span class="logo-text" { "PrepKilat AI" }
                    }
                    h1 { "Kuasai Ilmu. Taklukkan Masa Depan." }
                    p { "Ciptakan kuis beserta temukan materi dari teks apa pun, ditenagai oleh AI. Pembelajaran jadi cepat, efisien." }
                }
                div class="input-section dark-card" {
                    h2 { "Input Pertanyaan atau Materi" }
                    p { "Masukkan topik, pertanyaan, atau jelaskan materi apa yang ingin Anda pelajari." }
                    form id="generate-form" method="post" action="/generate" {
                        textarea name="text" class="text-input dark-input" rows="8"
                            placeholder="Contoh: Saya ingin mempelajari materi tentang Pertumbuhan dan Perkembangan pada Manusia..."
                            disabled[loading] { (session.input_text) }
                    }

                    @if session.questions.is_empty() && session.material.is_empty() {
                        // Blank text is caught server-side; the stored input lags the textarea.
                        button type="submit" form="generate-form" class="primary-btn" disabled[loading] {
                            @if loading { "⏳ Sedang Membuat Konten..." } @else { "✨ Generate Konten" }
                        }
                    }

                    @if session.is_generated() {
                        div class="post-result-controls" {
                            div class="result-buttons" {
                                (action_button(
                                    "/view/material",
                                    "view-results-button materi-button primary-btn",
                                    "Lihat Materi 📖",
                                    loading,
                                ))
                                (action_button(
                                    "/view/quiz",
                                    "view-results-button flashcard-button primary-btn",
                                    &format!("Lihat {} Soal Kuis 📝", session.questions.len()),
                                    loading,
                                ))
                            }
                            (action_button(
                                "/new",
                                "generate-new-button secondary-btn",
                                "Generate Topik Baru ✏️",
                                loading,
                            ))
                        }
                    }

                    @if let Some(error) = &session.error {
                        div class="error-message" { "⚠️ Error: " (error) }
                    }
                }
            }
        }
    }
}

/// Flashcard outline with a lightning bolt.
fn logo() -> Markup {
    html! {
        svg class="logo-icon" xmlns="http://www.w3.org/2000/svg" width="30" height="30" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            rect x="3" y="5" width="18" height="14" rx="3" ry="3" fill="none" stroke="currentColor" stroke-width="1.5" {}
            line x1="8" y1="10" x2="8" y2="14" stroke="currentColor" stroke-width="1.5" {}
            line x1="16" y1="10" x2="16" y2="14" stroke="currentColor" stroke-width="1.5" {}
            path d="M11 9 L13 15 L11 15 L13 9 Z" fill="currentColor" stroke="none" {}
        }
    }
}

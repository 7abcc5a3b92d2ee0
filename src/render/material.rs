// src/render/material.rs

use maud::{Markup, PreEscaped, html};

use crate::models::session::QuizSession;
use crate::render::action_button;
use crate::utils::html::render_markdown;

pub fn render(session: &QuizSession) -> Markup {
    html! {
        main class="container materi-view dark-bg" {
            (action_button("/back", "back-button secondary-btn", "← Kembali ke Input Materi", false))
            div class="materi-content dark-card" {
                @if session.material.is_empty() {
                    p { "Memuat materi..." }
                } @else {
                    // Already sanitised by ammonia.
                    (PreEscaped(render_markdown(&session.material)))
                }
            }
        }
    }
}

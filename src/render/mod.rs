// src/render/mod.rs

//! Declarative HTML projection of the workspace. Nothing here mutates state.

pub mod input;
pub mod material;
pub mod quiz;

use maud::{DOCTYPE, Markup, html};

use crate::models::view::View;
use crate::state::Workspace;

/// Renders whichever view is active.
pub fn render_workspace(workspace: &Workspace) -> Markup {
    let session = &workspace.session;
    match workspace.view.current() {
        View::Input => page(None, input::render(session)),
        View::Material => page(Some("📖 Materi"), material::render(session)),
        View::Quiz => page(Some("📝 Uji Pemahaman Materi"), quiz::render(session)),
    }
}

fn page(heading: Option<&str>, main: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "PrepKilat AI" }
                link rel="stylesheet" href="/static/app.css";
            }
            body {
                div class="App" {
                    @if let Some(heading) = heading {
                        header class="App-header dark-header" { h1 { (heading) } }
                    }
                    (main)
                }
            }
        }
    }
}

/// A one-button form posting to `action`.
pub(crate) fn action_button(action: &str, class: &str, label: &str, disabled: bool) -> Markup {
    html! {
        form method="post" action=(action) class="inline-form" {
            button type="submit" class=(class) disabled[disabled] { (label) }
        }
    }
}

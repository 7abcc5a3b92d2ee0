// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::{session::QuizSession, view::ViewController};
use crate::services::content_client::{ContentGenerator, HttpContentClient};

/// The single session plus the view that is showing it.
#[derive(Debug, Default)]
pub struct Workspace {
    pub session: QuizSession,
    pub view: ViewController,
}

pub type SharedWorkspace = Arc<Mutex<Workspace>>;
pub type SharedGenerator = Arc<dyn ContentGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub workspace: SharedWorkspace,
    pub generator: SharedGenerator,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = HttpContentClient::new(config.backend_url.clone(), config.request_timeout);
        Self::with_generator(config, Arc::new(client))
    }

    /// Lets tests plug in their own content source.
    pub fn with_generator(config: Config, generator: SharedGenerator) -> Self {
        Self {
            workspace: Arc::new(Mutex::new(Workspace::default())),
            generator,
            config,
        }
    }
}

impl FromRef<AppState> for SharedWorkspace {
    fn from_ref(state: &AppState) -> Self {
        state.workspace.clone()
    }
}

impl FromRef<AppState> for SharedGenerator {
    fn from_ref(state: &AppState) -> Self {
        state.generator.clone()
    }
}

// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use prepkilat::{config::Config, config::parse_backend_url, routes, state::AppState};
use serde_json::{Value, json};

/// Canned answer of the mock content backend, plus a hit counter.
#[derive(Clone)]
pub struct MockBackend {
    pub status: StatusCode,
    pub body: String,
    pub hits: Arc<AtomicUsize>,
    pub last_request: Arc<tokio::sync::Mutex<Option<Value>>>,
}

impl MockBackend {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self::raw(status, body.to_string())
    }

    pub fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            hits: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(tokio::sync::Mutex::new(None)),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn mock_generate(
    State(mock): State<MockBackend>,
    Json(body): Json<Value>,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    *mock.last_request.lock().await = Some(body);
    (
        mock.status,
        [("content-type", "application/json")],
        mock.body.clone(),
    )
}

/// Spawns the mock backend on a random port and returns its endpoint URL.
pub async fn spawn_backend(mock: MockBackend) -> String {
    let app = Router::new()
        .route("/api/generate-content", post(mock_generate))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}/api/generate-content", port)
}

pub fn test_config(backend_url: &str) -> Config {
    Config {
        backend_url: parse_backend_url(backend_url).expect("valid backend url"),
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        request_timeout: Duration::from_secs(5),
        static_dir: "static".to_string(),
        log_dir: "logs".to_string(),
        rust_log: "error".to_string(),
    }
}

/// Spawns the app on a random port. Returns its base URL.
pub async fn spawn_app_with_state(state: AppState) -> String {
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

pub async fn spawn_app(backend_url: &str) -> String {
    spawn_app_with_state(AppState::new(test_config(backend_url))).await
}

/// Two questions about photosynthesis, correct answers "Klorofil" and "Oksigen".
pub fn photosynthesis_payload() -> Value {
    json!({
        "data": {
            "questions": [
                {
                    "question": "Pigmen apa yang menyerap cahaya pada **fotosintesis**?",
                    "options": ["Hemoglobin", "Klorofil", "Melanin", "Keratin"],
                    "correctAnswer": "Klorofil"
                },
                {
                    "question": "Gas apa yang dilepaskan tumbuhan saat fotosintesis?",
                    "options": ["Karbon dioksida", "Nitrogen", "Oksigen"],
                    "correctAnswer": "Oksigen"
                }
            ],
            "materi_penuh": "# Fotosintesis\n\nProses tumbuhan mengubah cahaya menjadi energi kimia."
        }
    })
}

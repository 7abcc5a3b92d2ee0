// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use dotenvy::dotenv;
use url::Url;

/// Upper bound for the study text accepted from the input view.
pub const INPUT_MAX_CHARS: u64 = 20_000;

/// Question format requested from the content backend.
pub const GENERATION_FORMAT: &str = "multiple_choice";

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Url,
    pub listen_addr: SocketAddr,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub log_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let backend_url = env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/generate-content".to_string());
        let backend_url = parse_backend_url(&backend_url)
            .unwrap_or_else(|e| panic!("BACKEND_URL is invalid: {}", e));

        let listen_addr = env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse::<SocketAddr>()
            .expect("LISTEN_ADDR must be a socket address like 0.0.0.0:8080");

        let request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .map(|v| {
                v.parse::<u64>()
                    .expect("REQUEST_TIMEOUT_SECS must be a whole number of seconds")
            })
            .unwrap_or(60);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            backend_url,
            listen_addr,
            request_timeout: Duration::from_secs(request_timeout),
            static_dir,
            log_dir,
            rust_log,
        }
    }
}

/// Accepts only absolute http(s) endpoints.
pub fn parse_backend_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}

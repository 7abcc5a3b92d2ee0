// src/services/mod.rs

pub mod content_client;

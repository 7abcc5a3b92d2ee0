// src/handlers/mod.rs

pub mod api;
pub mod page;
pub mod quiz;
